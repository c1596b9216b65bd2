//! Sorting, searching, stacking, splitting and tiling.

use crate::array::Array;
use crate::config::Tolerances;
use crate::error::{NdError, Result};
use crate::math::shape_eq;

impl Array {
    /// Sort in place: a vector entirely, a matrix row by row. Ascending.
    pub fn sort(&mut self) -> Result<()> {
        match self.ndim() {
            1 => self.data_mut().sort_by(f64::total_cmp),
            2 => {
                let cols = self.shape()[1];
                if cols > 0 {
                    for row in self.data_mut().chunks_mut(cols) {
                        row.sort_by(f64::total_cmp);
                    }
                }
            }
            _ => return Err(NdError::shape("sort", "rank 1 or 2", self.shape())),
        }
        Ok(())
    }

    /// Distinct values in ascending order, compared exactly.
    pub fn unique(&self) -> Array {
        let mut values = self.to_vec();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Array::from_vec(values)
    }

    fn arg_rows(&self, op: &'static str, better: impl Fn(f64, f64) -> bool) -> Result<Vec<usize>> {
        let pick = |row: &[f64]| {
            let mut best = 0;
            for (j, &v) in row.iter().enumerate().skip(1) {
                if better(v, row[best]) {
                    best = j;
                }
            }
            best
        };
        let data = self.data();
        match *self.shape() {
            [_] => Ok(vec![pick(&data[..])]),
            [rows, cols] => Ok((0..rows).map(|i| pick(&data[i * cols..(i + 1) * cols])).collect()),
            _ => Err(NdError::shape(op, "rank 1 or 2", self.shape())),
        }
    }

    /// Position of the first maximum; one per row for a matrix.
    pub fn argmax(&self) -> Result<Vec<usize>> {
        self.arg_rows("argmax", |v, best| v > best)
    }

    /// Position of the first minimum; one per row for a matrix.
    pub fn argmin(&self) -> Result<Vec<usize>> {
        self.arg_rows("argmin", |v, best| v < best)
    }

    /// Values satisfying `pred`, in buffer order.
    pub fn extract<P>(&self, pred: P) -> Array
    where
        P: Fn(f64) -> bool,
    {
        self.data().iter().copied().filter(|&v| pred(v)).collect()
    }

    /// Number of elements farther than `1e-10` from `1e-10`.
    ///
    /// Note the reference point is `1e-10` and not zero: `0.0` sits exactly
    /// `1e-10` away and is not counted, while tiny values such as `3e-9` are.
    pub fn count_nonzero(&self) -> usize {
        self.count_nonzero_with(&Tolerances::default())
    }

    /// `count_nonzero` with `tol.count_nonzero_offset` as both the reference
    /// point and the distance.
    pub fn count_nonzero_with(&self, tol: &Tolerances) -> usize {
        let offset = tol.count_nonzero_offset;
        self.data()
            .iter()
            .filter(|&&v| (v - offset).abs() > offset)
            .count()
    }

    /// Indices of elements with magnitude above `1e-5`.
    ///
    /// A vector yields `[indices]`; a matrix yields `[row_indices,
    /// col_indices]` in row-major order.
    pub fn nonzero(&self) -> Result<Vec<Vec<usize>>> {
        self.nonzero_with(&Tolerances::default())
    }

    /// `nonzero` with magnitudes compared against `tol.nonzero`.
    pub fn nonzero_with(&self, tol: &Tolerances) -> Result<Vec<Vec<usize>>> {
        let tol = tol.nonzero;
        let data = self.data();
        match *self.shape() {
            [_] => Ok(vec![data
                .iter()
                .enumerate()
                .filter(|(_, v)| v.abs() > tol)
                .map(|(i, _)| i)
                .collect()]),
            [_, cols] => {
                let mut rows_idx = Vec::new();
                let mut cols_idx = Vec::new();
                for (pos, v) in data.iter().enumerate() {
                    if v.abs() > tol {
                        rows_idx.push(pos / cols);
                        cols_idx.push(pos % cols);
                    }
                }
                Ok(vec![rows_idx, cols_idx])
            }
            _ => Err(NdError::shape("nonzero", "rank 1 or 2", self.shape())),
        }
    }

    /// Stack arrays as rows. Vectors count as single rows; every input must
    /// have the same number of columns. No inputs gives the empty array.
    pub fn vstack(arrays: &[&Array]) -> Result<Array> {
        let first = match arrays.first() {
            Some(a) => a,
            None => return Ok(Array::empty()),
        };
        let (_, cols) = as_rows("vstack", first)?;
        let mut acc = Array::empty();
        let mut rows = 0;
        for a in arrays {
            let (r, c) = as_rows("vstack", a)?;
            if c != cols {
                return Err(NdError::shape("vstack", format!("{} columns", cols), a.shape()));
            }
            acc.push_eles(&a.to_vec());
            rows += r;
        }
        log::trace!("vstack: {} inputs into [{}, {}]", arrays.len(), rows, cols);
        acc.reshape(&[rows, cols])
    }

    /// Stack arrays as columns. A vector of length `n` is one column of
    /// height `n`; every input must have the same number of rows.
    pub fn hstack(arrays: &[&Array]) -> Result<Array> {
        let first = match arrays.first() {
            Some(a) => a,
            None => return Ok(Array::empty()),
        };
        let (height, _) = as_cols("hstack", first)?;
        let mut acc = Array::empty();
        let mut cols = 0;
        for a in arrays {
            let (r, c) = as_cols("hstack", a)?;
            if r != height {
                return Err(NdError::shape("hstack", format!("{} rows", height), a.shape()));
            }
            // the transposed input lands as `c` rows of length `r`
            if a.ndim() == 2 {
                acc.push_eles(&a.t()?.to_vec());
            } else {
                acc.push_eles(&a.to_vec());
            }
            cols += c;
        }
        log::trace!("hstack: {} inputs into [{}, {}]", arrays.len(), height, cols);
        acc.reshape(&[cols, height])?.t()
    }

    /// One vector per row.
    pub fn hsplit(&self) -> Result<Vec<Array>> {
        let (rows, _) = self.dims2("hsplit")?;
        (0..rows).map(|i| self.nth_row(i)).collect()
    }

    /// One vector per column.
    pub fn vsplit(&self) -> Result<Vec<Array>> {
        let (_, cols) = self.dims2("vsplit")?;
        (0..cols).map(|j| self.nth_col(j)).collect()
    }

    /// Repeat the array.
    ///
    /// With one factor a vector repeats its values and a matrix repeats along
    /// its columns. With two factors a matrix tiles `reps[0]` times down and
    /// `reps[1]` times across. No factors, or all ones, returns a copy.
    pub fn tile(&self, reps: &[usize]) -> Result<Array> {
        if reps.iter().all(|&r| r == 1) {
            return Ok(self.clone());
        }
        let data = self.to_vec();
        let mut acc = Array::empty();
        let shape = match (self.shape(), reps) {
            (&[n], &[r]) => {
                for _ in 0..r {
                    acc.push_eles(&data);
                }
                vec![n * r]
            }
            (&[m, n], &[r]) => {
                for row in row_chunks(&data, m, n) {
                    for _ in 0..r {
                        acc.push_eles(row);
                    }
                }
                vec![m, n * r]
            }
            (&[m, n], &[r0, r1]) => {
                for _ in 0..r0 {
                    for row in row_chunks(&data, m, n) {
                        for _ in 0..r1 {
                            acc.push_eles(row);
                        }
                    }
                }
                vec![m * r0, n * r1]
            }
            _ => {
                return Err(NdError::shape(
                    "tile",
                    format!("one factor for rank 1, one or two for rank 2 (got {} factors)", reps.len()),
                    self.shape(),
                ))
            }
        };
        log::trace!("tile: {:?} x {:?} -> {:?}", self.shape(), reps, shape);
        acc.reshape(&shape)
    }

    /// Flattened copy. Never a view.
    pub fn ravel(&self) -> Array {
        Array::from_vec(self.to_vec())
    }

    pub fn flat(&self) -> Array {
        self.ravel()
    }

    /// `[n]` becomes a `[n, 1]` view; anything else is returned as a view.
    pub fn atleast_2d(&self) -> Array {
        match *self.shape() {
            [n] => self.reshape_unsafe(&[n, 1]),
            _ => self.view(),
        }
    }

    /// `[n]` becomes `[n, 1, 1]` and `[m, n]` becomes `[m, n, 1]`, as views.
    pub fn atleast_3d(&self) -> Array {
        match *self.shape() {
            [n] => self.reshape_unsafe(&[n, 1, 1]),
            [m, n] => self.reshape_unsafe(&[m, n, 1]),
            _ => self.view(),
        }
    }

    /// Copy values into `dst`, which must have the same shape. `dst` keeps
    /// its own buffer and headers.
    pub fn copy_to(&self, dst: &mut Array) -> Result<()> {
        if !shape_eq(self.shape(), dst.shape()) || self.size() != dst.size() {
            return Err(NdError::shape("copy_to", format!("{:?}", self.shape()), dst.shape()));
        }
        let values = self.to_vec();
        dst.data_mut().copy_from_slice(&values);
        Ok(())
    }
}

/// `(rows, cols)` of an input to `vstack`.
fn as_rows(op: &'static str, a: &Array) -> Result<(usize, usize)> {
    match *a.shape() {
        [n] => Ok((1, n)),
        [r, c] => Ok((r, c)),
        _ => Err(NdError::shape(op, "rank 1 or 2", a.shape())),
    }
}

/// `(rows, cols)` of an input to `hstack`.
fn as_cols(op: &'static str, a: &Array) -> Result<(usize, usize)> {
    match *a.shape() {
        [n] => Ok((n, 1)),
        [r, c] => Ok((r, c)),
        _ => Err(NdError::shape(op, "rank 1 or 2", a.shape())),
    }
}

fn row_chunks(data: &[f64], rows: usize, cols: usize) -> impl Iterator<Item = &[f64]> {
    (0..rows).map(move |i| &data[i * cols..(i + 1) * cols])
}
