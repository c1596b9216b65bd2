//! Matrix products, inverse and determinant.
//!
//! `inv` and `det` default to Gauss-Jordan pivoting on the diagonal without
//! row swaps, and the wrapped-diagonal (Sarrus) determinant. Neither is robust: a zero pivot
//! turns the inverse into infinities and NaN, and the Sarrus sum is only a
//! determinant up to 3x3. `inv_with` and `det_with` select the pivoted
//! alternatives through [`LinalgConfig`].

use log::{debug, warn};

use crate::array::Array;
use crate::config::{DetMethod, InvMethod, LinalgConfig};
use crate::error::{NdError, Result};
use crate::math::dot_slice;

impl Array {
    /// Matrix / vector product.
    ///
    /// * `[m, k] . [k, n] -> [m, n]`
    /// * `[k] . [k, n] -> [1, n]`
    /// * `[m, k] . [k] -> [m, 1]`
    /// * `[k] . [k] -> [1]`
    pub fn dot(&self, that: &Array) -> Result<Array> {
        let a = self.data();
        let b = that.data();
        match (self.shape(), that.shape()) {
            (&[m, k], &[k2, n]) if k == k2 => {
                Ok(Array::from_parts(vec![m, n], matmul(&a, &b, m, k, n)))
            }
            (&[k], &[k2, n]) if k == k2 => {
                Ok(Array::from_parts(vec![1, n], matmul(&a, &b, 1, k, n)))
            }
            (&[m, k], &[k2]) if k == k2 => {
                Ok(Array::from_parts(vec![m, 1], matmul(&a, &b, m, k, 1)))
            }
            (&[k], &[k2]) if k == k2 => Ok(Array::from_vec(vec![dot_slice(&a, &b)])),
            _ => Err(NdError::shape(
                "dot",
                format!("an operand whose leading axis matches the last axis of {:?}", self.shape()),
                that.shape(),
            )),
        }
    }

    fn square_dim(&self, op: &'static str) -> Result<usize> {
        match *self.shape() {
            [n, m] if n == m => Ok(n),
            _ => Err(NdError::shape(op, "a square matrix", self.shape())),
        }
    }

    /// Inverse by Gauss-Jordan elimination without row pivoting.
    pub fn inv(&self) -> Result<Array> {
        self.inv_with(&LinalgConfig::default())
    }

    pub fn inv_with(&self, config: &LinalgConfig) -> Result<Array> {
        let n = self.square_dim("inv")?;
        let mut a = self.to_vec();
        debug!("inverting {}x{} matrix with {:?}", n, n, config.inv);
        let inv = gauss_jordan(&mut a, n, config.inv == InvMethod::PartialPivot);
        Ok(Array::from_parts(vec![n, n], inv))
    }

    /// Determinant by the wrapped-diagonal product sum. Exact up to 3x3.
    pub fn det(&self) -> Result<f64> {
        self.det_with(&LinalgConfig::default())
    }

    pub fn det_with(&self, config: &LinalgConfig) -> Result<f64> {
        let n = self.square_dim("det")?;
        let a = self.to_vec();
        Ok(match config.det {
            DetMethod::Sarrus => {
                if n >= 4 {
                    debug!("sarrus determinant on a {}x{} matrix is not a true determinant", n, n);
                }
                det_sarrus(&a, n)
            }
            DetMethod::Lu => det_lu(a, n),
        })
    }
}

fn matmul(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        let out_row = &mut out[i * n..(i + 1) * n];
        for p in 0..k {
            let aip = a[i * k + p];
            for (o, &bpj) in out_row.iter_mut().zip(&b[p * n..(p + 1) * n]) {
                *o += aip * bpj;
            }
        }
    }
    out
}

/// Row at or below `k` with the largest magnitude in column `k`.
fn pivot_row(a: &[f64], n: usize, k: usize) -> usize {
    (k..n)
        .max_by(|&x, &y| a[x * n + k].abs().total_cmp(&a[y * n + k].abs()))
        .unwrap_or(k)
}

fn swap_rows(a: &mut [f64], n: usize, r1: usize, r2: usize) {
    for j in 0..n {
        a.swap(r1 * n + j, r2 * n + j);
    }
}

/// Reduce `a` to the identity in place and return the accumulated inverse.
fn gauss_jordan(a: &mut [f64], n: usize, partial_pivot: bool) -> Vec<f64> {
    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        inv[i * n + i] = 1.0;
    }

    for k in 0..n {
        if partial_pivot {
            let p = pivot_row(a, n, k);
            if p != k {
                swap_rows(a, n, p, k);
                swap_rows(&mut inv, n, p, k);
            }
        }

        let pivot = a[k * n + k];
        if pivot == 0.0 {
            warn!("zero pivot at row {} while inverting; result will contain inf/NaN", k);
        }
        for j in 0..n {
            a[k * n + j] /= pivot;
            inv[k * n + j] /= pivot;
        }

        for i in (0..n).filter(|&i| i != k) {
            let factor = a[i * n + k];
            for j in 0..n {
                a[i * n + j] -= factor * a[k * n + j];
                inv[i * n + j] -= factor * inv[k * n + j];
            }
        }
    }
    inv
}

fn det_sarrus(a: &[f64], n: usize) -> f64 {
    match n {
        0 => 1.0,
        1 => a[0],
        2 => a[0] * a[3] - a[1] * a[2],
        _ => {
            let mut forward = 0.0;
            let mut backward = 0.0;
            for s in 0..n {
                let mut p = 1.0;
                let mut q = 1.0;
                for i in 0..n {
                    p *= a[i * n + (s + i) % n];
                    q *= a[i * n + (s + n - i) % n];
                }
                forward += p;
                backward += q;
            }
            forward - backward
        }
    }
}

fn det_lu(mut a: Vec<f64>, n: usize) -> f64 {
    let mut det = 1.0;
    for k in 0..n {
        let p = pivot_row(&a, n, k);
        if a[p * n + k] == 0.0 {
            return 0.0;
        }
        if p != k {
            swap_rows(&mut a, n, p, k);
            det = -det;
        }
        let pivot = a[k * n + k];
        det *= pivot;
        for i in k + 1..n {
            let factor = a[i * n + k] / pivot;
            for j in k..n {
                a[i * n + j] -= factor * a[k * n + j];
            }
        }
    }
    det
}
