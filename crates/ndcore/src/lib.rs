//! ndcore: a dense n-dimensional `f64` array.
//!
//! The crate is built around a single type, [`Array`], a shape header over a
//! flat row-major buffer. On top of it sit broadcasting arithmetic for the 1-D
//! and 2-D cases, small dense linear algebra (dot, inverse, determinant),
//! row-wise reductions, and the usual manipulation helpers (stacking,
//! splitting, tiling, sorting, searching).
//!
//! Reshaping without changing the element count returns a view that shares
//! the buffer with its source. Writes through one header are visible through
//! the other, so `reshape` is not a way to get an independent copy; use
//! `clone` or `ravel` for that. Buffers are reference counted, which also
//! means an `Array` cannot cross threads.
//!
//! Shape violations come back as [`NdError`] values. Floating-point edge
//! cases (division by zero, singular matrices) do not: they propagate as
//! infinities and NaN.
#![doc = include_str!("../README.md")]
pub mod array;
pub mod config;
pub mod error;
pub mod math;

mod arith;
mod interop;
mod linalg;
mod manipulation;
mod random;
mod stats;

pub use array::Array;
pub use config::{DetMethod, InvMethod, LinalgConfig, Tolerances};
pub use error::{NdError, Result};
