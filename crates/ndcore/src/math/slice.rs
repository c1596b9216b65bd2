/// Product of all entries; 1 for an empty slice.
pub fn product_of(s: &[usize]) -> usize {
    s.iter().product()
}

/// Number of elements implied by a shape. Rank 0 holds no elements.
pub fn size_of_shape(shape: &[usize]) -> usize {
    if shape.is_empty() {
        0
    } else {
        product_of(shape)
    }
}

pub fn sum_of(s: &[f64]) -> f64 {
    s.iter().sum()
}

pub fn shape_eq(a: &[usize], b: &[usize]) -> bool {
    a == b
}

/// Equal length and every pair closer than `tol`.
pub fn approx_eq_slice(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < tol)
}

pub fn dot_slice(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}
