use ndcore::{Array, LinalgConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 3 samples, 2 features
    let x = Array::from_vec(vec![1.0, 2.0, 2.0, 4.5, 3.0, 6.0]).reshape(&[3, 2])?;
    println!("x = {}", x);

    // centre each feature: broadcast a [1, 2] row over the rows
    let means = x.t()?.mean()?.reshape(&[1, 2])?;
    let centred = x.sub(&means)?;
    println!("centred = {}", centred);

    // covariance (population) and its inverse
    let n = x.rows()? as f64;
    let cov = centred.t()?.dot(&centred)?.div_scalar(n);
    println!("cov = {}", cov);
    println!("det(cov) = {}", cov.det()?);
    let prec = cov.inv_with(&LinalgConfig::robust())?;
    println!("cov . prec = {}", cov.dot(&prec)?);

    // views share their buffer with the source
    let mut flat = x.ravel();
    let mut grid = flat.reshape(&[2, 3])?;
    grid.set(&[1, 2], 0.0)?;
    println!("flat after writing through a view = {}", flat);

    flat.sort()?;
    println!("sorted = {}, unique = {}", flat, flat.unique());
    println!("tiled = {}", Array::arange(2).tile(&[3])?);
    Ok(())
}
