//! Small helpers over plain slices.
//!
//! These are the building blocks the array code reaches for when it needs a
//! product of dimensions, a sum of values or a tolerance comparison. They work
//! on `&[usize]`/`&[f64]` directly so they stay usable without an
//! `Array` in hand.
pub mod slice;

pub use slice::{approx_eq_slice, dot_slice, product_of, shape_eq, size_of_shape, sum_of};
