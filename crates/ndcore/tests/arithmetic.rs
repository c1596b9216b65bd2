//! Integration tests for broadcasting arithmetic and linear algebra.

use ndcore::{Array, DetMethod, InvMethod, LinalgConfig};

fn arr(shape: &[usize], data: &[f64]) -> Array {
    Array::from_shape_vec(shape, data.to_vec()).expect("test data matches shape")
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Broadcasting
// ---------------------------------------------------------------------------

#[test]
fn identical_shapes_are_elementwise() {
    let a = arr(&[2, 2], &[1.0, 2.0, 3.0, 4.0]);
    let b = arr(&[2, 2], &[4.0, 3.0, 2.0, 1.0]);
    assert!(a.add(&b).unwrap().equals(&Array::full(&[2, 2], 5.0).unwrap()));
    assert!(a.sub(&b).unwrap().equals(&arr(&[2, 2], &[-3.0, -1.0, 1.0, 3.0])));
    assert!(a.mul(&b).unwrap().equals(&arr(&[2, 2], &[4.0, 6.0, 6.0, 4.0])));
    assert!(a.div(&b).unwrap().equals(&arr(&[2, 2], &[0.25, 2.0 / 3.0, 1.5, 4.0])));
}

#[test]
fn single_element_broadcasts_to_every_shape() {
    for shape in [vec![5], vec![2, 3], vec![2, 2, 2]] {
        let a = Array::random_seeded(&shape, 3).unwrap();
        let s = Array::from_vec(vec![2.5]);
        assert!(a.add(&s).unwrap().equals(&a.map(|x| x + 2.5)));
        assert!(a.sub(&s).unwrap().equals(&a.sub_scalar(2.5)));
        assert!(a.mul(&s).unwrap().equals(&a.mul_scalar(2.5)));
        assert!(a.div(&s).unwrap().equals(&a.div_scalar(2.5)));
    }
}

#[test]
fn single_element_of_any_rank_broadcasts() {
    let a = Array::arange(4).reshape(&[2, 2]).unwrap();
    let s = arr(&[1, 1], &[10.0]);
    assert!(a.add(&s).unwrap().equals(&arr(&[2, 2], &[10.0, 11.0, 12.0, 13.0])));
}

#[test]
fn row_vector_broadcasts_down_rows() {
    let a = arr(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let r = Array::arange_from(1, 4).reshape(&[1, 3]).unwrap();
    assert!(a.add(&r).unwrap().equals(&arr(&[2, 3], &[2.0, 4.0, 6.0, 5.0, 7.0, 9.0])));
    assert!(a.div(&r).unwrap().equals(&arr(&[2, 3], &[1.0, 1.0, 1.0, 4.0, 2.5, 2.0])));
}

#[test]
fn column_vector_broadcasts_across_columns() {
    let a = arr(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let c = arr(&[2, 1], &[1.0, 2.0]);
    assert!(a.sub(&c).unwrap().equals(&arr(&[2, 3], &[0.0, 1.0, 2.0, 2.0, 3.0, 4.0])));
}

#[test]
fn incompatible_shapes_fail() {
    let a = Array::zeros(&[2, 3]).unwrap();
    assert!(a.add(&Array::zeros(&[3, 2]).unwrap()).unwrap_err().is_shape_error());
    assert!(a.add(&Array::zeros(&[3]).unwrap()).unwrap_err().is_shape_error());
    // the larger operand has to be on the left
    let c = Array::zeros(&[2, 1]).unwrap();
    assert!(c.add(&a).is_err());
}

#[test]
fn division_by_zero_is_not_an_error() {
    let a = Array::from_vec(vec![1.0, -1.0, 0.0]);
    let r = a.div(&Array::zeros(&[3]).unwrap()).unwrap().to_vec();
    assert_eq!(r[0], f64::INFINITY);
    assert_eq!(r[1], f64::NEG_INFINITY);
    assert!(r[2].is_nan());
}

#[test]
fn mul_bit_requires_identical_shapes() {
    let a = arr(&[2, 2], &[1.0, 2.0, 3.0, 4.0]);
    assert!(a.mul_bit(&a).unwrap().equals(&arr(&[2, 2], &[1.0, 4.0, 9.0, 16.0])));
    assert!(a.mul_bit(&Array::from_vec(vec![2.0])).unwrap_err().is_shape_error());
}

#[test]
fn map_exp_and_neg_keep_shape() {
    let a = Array::arange(4).reshape(&[2, 2]).unwrap();
    let e = a.exp();
    assert_eq!(e.shape(), &[2, 2]);
    assert!((e.get(&[0, 1]).unwrap() - std::f64::consts::E).abs() < 1e-12);
    assert!(a.neg().equals(&arr(&[2, 2], &[0.0, -1.0, -2.0, -3.0])));
    assert!(a.add_scalar(1.0).equals(&a.map(|x| x + 1.0)));
    // source is untouched
    assert_eq!(a.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
}

// ---------------------------------------------------------------------------
// Dot
// ---------------------------------------------------------------------------

#[test]
fn dot_matrix_matrix() {
    let a = arr(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = arr(&[3, 2], &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    assert!(a.dot(&b).unwrap().equals(&arr(&[2, 2], &[58.0, 64.0, 139.0, 154.0])));
}

#[test]
fn dot_vector_cases() {
    let m = arr(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let row = Array::from_vec(vec![1.0, 1.0]).dot(&m).unwrap();
    assert!(row.equals(&arr(&[1, 3], &[5.0, 7.0, 9.0])));

    let col = m.dot(&Array::from_vec(vec![1.0, 0.0, 1.0])).unwrap();
    assert!(col.equals(&arr(&[2, 1], &[4.0, 10.0])));

    let s = Array::arange_from(1, 4).dot(&Array::arange_from(1, 4)).unwrap();
    assert_eq!(s.shape(), &[1]);
    assert_eq!(s.value().unwrap(), 14.0);
}

#[test]
fn dot_mismatch_fails() {
    let m = Array::zeros(&[2, 3]).unwrap();
    assert!(m.dot(&m).unwrap_err().is_shape_error());
    assert!(Array::arange(2).dot(&Array::arange(3)).is_err());
}

#[test]
fn identity_is_neutral_for_dot() {
    let m = Array::random_seeded(&[4, 3], 21).unwrap();
    assert!(Array::eye(4).dot(&m).unwrap().equals(&m));
    assert!(m.dot(&Array::eye(3)).unwrap().equals(&m));
}

// ---------------------------------------------------------------------------
// Inverse / determinant
// ---------------------------------------------------------------------------

#[test]
fn inverse_times_matrix_is_identity() {
    for (n, data) in [
        (2, vec![4.0, 7.0, 2.0, 6.0]),
        (3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]),
    ] {
        let a = arr(&[n, n], &data);
        let prod = a.dot(&a.inv().unwrap()).unwrap();
        assert!(prod.equals(&Array::eye(n)), "{}", prod);
    }
}

#[test]
fn inverse_requires_square_matrix() {
    assert!(Array::zeros(&[2, 3]).unwrap().inv().unwrap_err().is_shape_error());
    assert!(Array::arange(4).inv().is_err());
    assert!(Array::zeros(&[2, 3]).unwrap().det().unwrap_err().is_shape_error());
}

#[test]
fn zero_pivot_only_survives_with_pivoting() {
    init_logging();
    let swap = arr(&[2, 2], &[0.0, 1.0, 1.0, 0.0]);

    let naive = swap.inv().unwrap();
    assert!(naive.to_vec().iter().any(|v| !v.is_finite()));

    let cfg = LinalgConfig::new(DetMethod::Sarrus, InvMethod::PartialPivot);
    assert!(swap.inv_with(&cfg).unwrap().equals(&swap));
}

#[test]
fn small_determinants() {
    assert_eq!(Array::eye(1).det().unwrap(), 1.0);
    assert_eq!(arr(&[1, 1], &[-3.5]).det().unwrap(), -3.5);
    let a = arr(&[3, 3], &[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
    assert!((a.det().unwrap() - -306.0).abs() < 1e-9);
    assert!((a.det_with(&LinalgConfig::robust()).unwrap() - -306.0).abs() < 1e-9);
}

#[test]
fn sarrus_and_lu_disagree_from_4x4() {
    init_logging();
    // identity with rows 0 and 1 swapped: a true determinant of -1
    let mut p = Array::eye(4);
    p.set_row(&Array::from_vec(vec![0.0, 1.0, 0.0, 0.0]), 0).unwrap();
    p.set_row(&Array::from_vec(vec![1.0, 0.0, 0.0, 0.0]), 1).unwrap();

    assert_eq!(p.det().unwrap(), 0.0);
    let lu = LinalgConfig::new(DetMethod::Lu, InvMethod::GaussJordan);
    assert!((p.det_with(&lu).unwrap() - -1.0).abs() < 1e-12);
}

#[test]
fn lu_determinant_of_singular_matrix_is_zero() {
    let a = arr(&[3, 3], &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
    assert_eq!(a.det_with(&LinalgConfig::robust()).unwrap(), 0.0);
}
