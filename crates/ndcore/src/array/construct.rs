use std::iter::FromIterator;

use super::Array;
use crate::error::{NdError, Result};
use crate::math::size_of_shape;

impl Array {
    /// Array of `shape` filled with `value`. The shape must have at least one
    /// dimension.
    pub fn full(shape: &[usize], value: f64) -> Result<Self> {
        if shape.is_empty() {
            return Err(NdError::shape("full", "at least one dimension", shape));
        }
        Ok(Array::from_parts(
            shape.to_vec(),
            vec![value; size_of_shape(shape)],
        ))
    }

    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Array::full(shape, 0.0)
    }

    pub fn ones(shape: &[usize]) -> Result<Self> {
        Array::full(shape, 1.0)
    }

    /// `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Array::from_parts(vec![n, n], data)
    }

    /// The rank-0 array with no elements.
    pub fn empty() -> Self {
        Array::from_parts(Vec::new(), Vec::new())
    }

    /// Rank-1 array owning `data`.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Array::from_parts(vec![data.len()], data)
    }

    pub fn from_slice(data: &[f64]) -> Self {
        Array::from_vec(data.to_vec())
    }

    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> Result<Self> {
        if data.len() != size_of_shape(shape) {
            return Err(NdError::shape(
                "from_shape_vec",
                format!("a shape holding {} elements", data.len()),
                shape,
            ));
        }
        Ok(Array::from_parts(shape.to_vec(), data))
    }

    /// `[0, stop)`.
    pub fn arange(stop: i64) -> Self {
        Array::arange_from(0, stop)
    }

    /// `[start, stop)` in unit steps.
    pub fn arange_from(start: i64, stop: i64) -> Self {
        let data = (start..stop).map(|v| v as f64).collect();
        Array::from_vec(data)
    }

    /// `[start, stop)` stepped by `step`, which may be negative but not zero.
    pub fn arange_step(start: i64, stop: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(NdError::DegenerateArgument("arange step must be non-zero"));
        }
        let n = ((stop - start) as f64 / step as f64).ceil().max(0.0) as i64;
        let data = (0..n).map(|i| (start + i * step) as f64).collect();
        Ok(Array::from_vec(data))
    }
}

impl From<Vec<f64>> for Array {
    fn from(value: Vec<f64>) -> Self {
        Array::from_vec(value)
    }
}

impl From<&[f64]> for Array {
    fn from(value: &[f64]) -> Self {
        Array::from_slice(value)
    }
}

impl From<Array> for Vec<f64> {
    fn from(value: Array) -> Self {
        value.to_vec()
    }
}

impl FromIterator<f64> for Array {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Array::from_vec(iter.into_iter().collect())
    }
}
