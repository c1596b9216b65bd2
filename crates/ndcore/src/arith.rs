//! Element-wise arithmetic with the 2-D broadcasting rules.
//!
//! `add`, `sub`, `mul` and `div` try, in order:
//!
//! 1. identical shapes: element by element;
//! 2. `that` holds a single element: it is applied to every element of `self`;
//! 3. `self` is `[m, n]` and `that` is `[m, 1]`: row `i` uses `that[i]`;
//! 4. `self` is `[m, n]` and `that` is `[1, n]`: column `j` uses `that[j]`.
//!
//! Anything else is a shape error. `self` is always the left operand, and
//! division by zero gives IEEE infinities or NaN.

use crate::array::Array;
use crate::error::{NdError, Result};
use crate::math::shape_eq;

impl Array {
    fn broadcast_with(
        &self,
        that: &Array,
        op: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Array> {
        let lhs = self.data();
        let rhs = that.data();

        if shape_eq(self.shape(), that.shape()) {
            let data = lhs.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)).collect();
            return Ok(Array::from_parts(self.shape().to_vec(), data));
        }

        if that.ndim() > 0 && that.size() == 1 {
            let s = rhs[0];
            let data = lhs.iter().map(|&a| f(a, s)).collect();
            return Ok(Array::from_parts(self.shape().to_vec(), data));
        }

        match (self.shape(), that.shape()) {
            (&[m, n], &[tm, 1]) if m == tm => {
                let mut data = Vec::with_capacity(m * n);
                for i in 0..m {
                    data.extend(lhs[i * n..(i + 1) * n].iter().map(|&a| f(a, rhs[i])));
                }
                Ok(Array::from_parts(vec![m, n], data))
            }
            (&[m, n], &[1, tn]) if n == tn => {
                let mut data = Vec::with_capacity(m * n);
                for i in 0..m {
                    data.extend(
                        lhs[i * n..(i + 1) * n]
                            .iter()
                            .zip(rhs.iter())
                            .map(|(&a, &b)| f(a, b)),
                    );
                }
                Ok(Array::from_parts(vec![m, n], data))
            }
            _ => Err(NdError::shape(
                op,
                format!(
                    "{:?}, a single element, or a [rows, 1] / [1, cols] vector",
                    self.shape()
                ),
                that.shape(),
            )),
        }
    }

    pub fn add(&self, that: &Array) -> Result<Array> {
        self.broadcast_with(that, "add", |a, b| a + b)
    }

    pub fn sub(&self, that: &Array) -> Result<Array> {
        self.broadcast_with(that, "sub", |a, b| a - b)
    }

    pub fn mul(&self, that: &Array) -> Result<Array> {
        self.broadcast_with(that, "mul", |a, b| a * b)
    }

    pub fn div(&self, that: &Array) -> Result<Array> {
        self.broadcast_with(that, "div", |a, b| a / b)
    }

    /// Element-wise product of two arrays of identical shape, no broadcasting.
    pub fn mul_bit(&self, that: &Array) -> Result<Array> {
        if !shape_eq(self.shape(), that.shape()) {
            return Err(NdError::shape("mul_bit", format!("{:?}", self.shape()), that.shape()));
        }
        self.broadcast_with(that, "mul_bit", |a, b| a * b)
    }

    pub fn add_scalar(&self, s: f64) -> Array {
        self.map(|a| a + s)
    }

    pub fn sub_scalar(&self, s: f64) -> Array {
        self.map(|a| a - s)
    }

    pub fn mul_scalar(&self, s: f64) -> Array {
        self.map(|a| a * s)
    }

    pub fn div_scalar(&self, s: f64) -> Array {
        self.map(|a| a / s)
    }

    pub fn neg(&self) -> Array {
        self.map(|a| -a)
    }

    /// Apply `f` to every element; same shape, new buffer.
    pub fn map<F>(&self, f: F) -> Array
    where
        F: Fn(f64) -> f64,
    {
        let data = self.data().iter().map(|&v| f(v)).collect();
        Array::from_parts(self.shape().to_vec(), data)
    }

    pub fn exp(&self) -> Array {
        self.map(f64::exp)
    }
}
