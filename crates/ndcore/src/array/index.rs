use std::cell::RefCell;
use std::rc::Rc;

use super::Array;
use crate::error::{NdError, Result};
use crate::math::product_of;

impl Array {
    /// Row-major offset of a (possibly partial) leading index.
    fn offset_of(&self, op: &'static str, poses: &[usize]) -> Result<usize> {
        if poses.len() > self.ndim() {
            return Err(NdError::shape(
                op,
                format!("at most {} indices, got {}", self.ndim(), poses.len()),
                &self.shape,
            ));
        }
        let mut pos = 0;
        for (k, &p) in poses.iter().enumerate() {
            let bound = self.shape[k];
            if p >= bound {
                return Err(NdError::IndexOutOfBounds { index: p, bound });
            }
            pos += p * product_of(&self.shape[k + 1..]);
        }
        Ok(pos)
    }

    fn full_offset(&self, op: &'static str, poses: &[usize]) -> Result<usize> {
        if self.ndim() == 0 {
            // the empty index names no element of a rank-0 array
            return Err(NdError::EmptyArray);
        }
        if poses.len() != self.ndim() {
            return Err(NdError::shape(
                op,
                format!("exactly {} indices, got {}", self.ndim(), poses.len()),
                &self.shape,
            ));
        }
        self.offset_of(op, poses)
    }

    /// Element at a full index.
    pub fn get(&self, poses: &[usize]) -> Result<f64> {
        let pos = self.full_offset("get", poses)?;
        Ok(self.data()[pos])
    }

    /// Overwrite the element at a full index. Visible through every view.
    pub fn set(&mut self, poses: &[usize], value: f64) -> Result<()> {
        let pos = self.full_offset("set", poses)?;
        self.data_mut()[pos] = value;
        Ok(())
    }

    /// Sub-array obtained by fixing the leading coordinates.
    ///
    /// A full index yields a one-element array of shape `[1]`. The result is
    /// always a copy.
    pub fn ix(&self, poses: &[usize]) -> Result<Array> {
        if self.ndim() == 0 {
            return Err(NdError::EmptyArray);
        }
        let pos = self.offset_of("ix", poses)?;
        if poses.len() == self.ndim() {
            return Ok(Array::from_vec(vec![self.data()[pos]]));
        }
        let shape = self.shape[poses.len()..].to_vec();
        let n = product_of(&shape);
        let data = self.data()[pos..pos + n].to_vec();
        Ok(Array::from_parts(shape, data))
    }

    /// First element.
    pub fn value(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(NdError::EmptyArray);
        }
        Ok(self.data()[0])
    }

    pub fn nth_row(&self, i: usize) -> Result<Array> {
        let (rows, cols) = self.dims2("nth_row")?;
        if i >= rows {
            return Err(NdError::IndexOutOfBounds { index: i, bound: rows });
        }
        Ok(Array::from_slice(&self.data()[i * cols..(i + 1) * cols]))
    }

    pub fn nth_col(&self, j: usize) -> Result<Array> {
        let (rows, cols) = self.dims2("nth_col")?;
        if j >= cols {
            return Err(NdError::IndexOutOfBounds { index: j, bound: cols });
        }
        let src = self.data();
        Ok((0..rows).map(|i| src[i * cols + j]).collect())
    }

    /// Overwrite row `i` with `row`, whose length must equal the column count.
    pub fn set_row(&mut self, row: &Array, i: usize) -> Result<&mut Self> {
        let (rows, cols) = self.dims2("set_row")?;
        if row.size() != cols {
            return Err(NdError::shape(
                "set_row",
                format!("a vector of length {}", cols),
                row.shape(),
            ));
        }
        if i >= rows {
            return Err(NdError::IndexOutOfBounds { index: i, bound: rows });
        }
        // snapshot first: `row` may alias this buffer
        let values = row.to_vec();
        self.data_mut()[i * cols..(i + 1) * cols].copy_from_slice(&values);
        Ok(self)
    }

    /// Overwrite column `j` with `col`, whose length must equal the row count.
    pub fn set_col(&mut self, col: &Array, j: usize) -> Result<&mut Self> {
        let (rows, cols) = self.dims2("set_col")?;
        if col.size() != rows {
            return Err(NdError::shape(
                "set_col",
                format!("a vector of length {}", rows),
                col.shape(),
            ));
        }
        if j >= cols {
            return Err(NdError::IndexOutOfBounds { index: j, bound: cols });
        }
        let values = col.to_vec();
        let mut dst = self.data_mut();
        for (i, v) in values.into_iter().enumerate() {
            dst[i * cols + j] = v;
        }
        drop(dst);
        Ok(self)
    }

    /// Append raw values to the buffer without touching the shape.
    ///
    /// This is a builder primitive: until the caller reshapes, the element
    /// count no longer matches the shape. A header that shares its buffer, or
    /// only sees a prefix of it, first moves onto a private copy so other views
    /// are left alone.
    pub fn push_eles(&mut self, values: &[f64]) -> &mut Self {
        if Rc::strong_count(&self.buf) > 1 || self.buf.borrow().len() != self.len {
            log::trace!("push_eles: detaching {} elements from a shared buffer", self.len);
            let own = self.to_vec();
            self.buf = Rc::new(RefCell::new(own));
        }
        self.buf.borrow_mut().extend_from_slice(values);
        self.len += values.len();
        self
    }

    /// Gather whole rows, in the given order, into a new matrix.
    pub fn get_rows(&self, is: &[usize]) -> Result<Array> {
        let (rows, cols) = self.dims2("get_rows")?;
        let src = self.data();
        let mut data = Vec::with_capacity(is.len() * cols);
        for &i in is {
            if i >= rows {
                return Err(NdError::IndexOutOfBounds { index: i, bound: rows });
            }
            data.extend_from_slice(&src[i * cols..(i + 1) * cols]);
        }
        Ok(Array::from_parts(vec![is.len(), cols], data))
    }

    /// Gather whole columns, in the given order, into a new matrix.
    pub fn get_cols(&self, js: &[usize]) -> Result<Array> {
        let (rows, cols) = self.dims2("get_cols")?;
        if let Some(&j) = js.iter().find(|&&j| j >= cols) {
            return Err(NdError::IndexOutOfBounds { index: j, bound: cols });
        }
        let src = self.data();
        let mut data = Vec::with_capacity(rows * js.len());
        for r in 0..rows {
            for &j in js {
                data.push(src[r * cols + j]);
            }
        }
        Ok(Array::from_parts(vec![rows, js.len()], data))
    }

    /// Gather elements of a vector by position.
    pub fn get_eles(&self, is: &[usize]) -> Result<Array> {
        self.require_rank("get_eles", 1)?;
        let src = self.data();
        is.iter()
            .map(|&i| {
                src.get(i).copied().ok_or(NdError::IndexOutOfBounds {
                    index: i,
                    bound: src.len(),
                })
            })
            .collect::<Result<Vec<f64>>>()
            .map(Array::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_row_from_own_view_does_not_panic() {
        let mut a = Array::arange(6).reshape(&[2, 3]).unwrap();
        let first = a.reshape_unsafe(&[3]);
        a.set_row(&first, 1).unwrap();
        assert_eq!(a.to_vec(), vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn push_eles_detaches_from_views() {
        let a = Array::arange(3);
        let mut b = a.view();
        b.push_eles(&[3.0, 4.0]);
        assert!(!a.shares_buffer(&b));
        assert_eq!(a.size(), 3);
        assert_eq!(b.size(), 5);
        assert_eq!(b.shape(), &[3]);
    }

    #[test]
    fn offsets_are_bounds_checked() {
        let a = Array::arange(4).reshape(&[2, 2]).unwrap();
        assert_eq!(
            a.get(&[2, 0]),
            Err(NdError::IndexOutOfBounds { index: 2, bound: 2 })
        );
        assert!(a.get(&[1]).unwrap_err().is_shape_error());
    }
}
