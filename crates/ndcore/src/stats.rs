use statrs::statistics::Statistics;

use crate::array::Array;
use crate::error::{NdError, Result};
use crate::math::sum_of;

/// Row-wise reductions.
///
/// Every reduction here follows the same dispatch: a vector reduces to a
/// one-element array, a matrix reduces each row into a vector of length
/// `rows`, and any other rank is a shape error.
impl Array {
    fn reduce_rows(&self, op: &'static str, f: impl Fn(&[f64]) -> f64) -> Result<Array> {
        let data = self.data();
        match *self.shape() {
            [_] => Ok(Array::from_vec(vec![f(&data[..])])),
            [rows, cols] => Ok((0..rows).map(|i| f(&data[i * cols..(i + 1) * cols])).collect()),
            _ => Err(NdError::shape(op, "rank 1 or 2", self.shape())),
        }
    }

    pub fn mean(&self) -> Result<Array> {
        self.reduce_rows("mean", |row| row.iter().mean())
    }

    pub fn sum(&self) -> Result<Array> {
        self.reduce_rows("sum", sum_of)
    }

    /// Population standard deviation (divides by N).
    pub fn std(&self) -> Result<Array> {
        self.reduce_rows("std", |row| row.iter().population_std_dev())
    }

    /// Population variance (divides by N).
    pub fn var(&self) -> Result<Array> {
        self.reduce_rows("var", |row| row.iter().population_variance())
    }

    /// Largest value; `-inf` for an empty row. NaN entries are skipped.
    pub fn max(&self) -> Result<Array> {
        self.reduce_rows("max", |row| {
            row.iter()
                .fold(f64::NEG_INFINITY, |acc, &v| if v > acc { v } else { acc })
        })
    }

    /// Smallest value; `+inf` for an empty row. NaN entries are skipped.
    pub fn min(&self) -> Result<Array> {
        self.reduce_rows("min", |row| {
            row.iter()
                .fold(f64::INFINITY, |acc, &v| if v < acc { v } else { acc })
        })
    }

    /// Sum of every element regardless of rank.
    pub fn sum_all(&self) -> f64 {
        sum_of(&self.data())
    }
}
