//! The `Array` type: a shape header over a shared, row-major `f64` buffer.
//!
//! Several headers may point at the same buffer. `reshape` (same element
//! count), `reshape_unsafe` (shrinking), `view`, `atleast_2d` and `atleast_3d`
//! hand out such aliases, so writing through one of them is visible through the
//! others. Everything else allocates. `Clone` is a deep copy.
mod construct;
mod display;
mod index;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::config::Tolerances;
use crate::error::{NdError, Result};
use crate::math::{approx_eq_slice, shape_eq, size_of_shape};

pub struct Array {
    shape: Vec<usize>,
    // invariant: len == size_of_shape(&shape), except right after push_eles
    buf: Rc<RefCell<Vec<f64>>>,
    // this header sees buf[..len]
    len: usize,
}

impl Array {
    /// Wrap an owned buffer. The caller guarantees the length matches `shape`.
    pub(crate) fn from_parts(shape: Vec<usize>, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size_of_shape(&shape));
        let len = data.len();
        Array {
            shape,
            buf: Rc::new(RefCell::new(data)),
            len,
        }
    }

    /// New header over the same buffer.
    fn alias(&self, shape: Vec<usize>, len: usize) -> Self {
        Array {
            shape,
            buf: Rc::clone(&self.buf),
            len,
        }
    }

    pub(crate) fn data(&self) -> Ref<'_, [f64]> {
        let len = self.len;
        Ref::map(self.buf.borrow(), move |v| &v[..len])
    }

    pub(crate) fn data_mut(&mut self) -> RefMut<'_, [f64]> {
        let len = self.len;
        RefMut::map(self.buf.borrow_mut(), move |v| &mut v[..len])
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements visible through this header.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty() || self.len == 0
    }

    pub fn rows(&self) -> Result<usize> {
        self.require_rank("rows", 2)?;
        Ok(self.shape[0])
    }

    pub fn cols(&self) -> Result<usize> {
        self.require_rank("cols", 2)?;
        Ok(self.shape[1])
    }

    pub(crate) fn require_rank(&self, op: &'static str, rank: usize) -> Result<()> {
        if self.ndim() == rank {
            Ok(())
        } else {
            Err(NdError::shape(op, format!("rank {}", rank), &self.shape))
        }
    }

    /// Shape of a rank-2 array as `(rows, cols)`.
    pub(crate) fn dims2(&self, op: &'static str) -> Result<(usize, usize)> {
        self.require_rank(op, 2)?;
        Ok((self.shape[0], self.shape[1]))
    }

    /// Copy of the visible elements in row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data().to_vec()
    }

    /// Run `f` over the visible elements without copying them.
    pub fn with_values<R>(&self, f: impl FnOnce(&[f64]) -> R) -> R {
        f(&self.data())
    }

    /// Iterate over a snapshot of the elements.
    pub fn iter(&self) -> std::vec::IntoIter<f64> {
        self.to_vec().into_iter()
    }

    /// Whether both headers point at the same buffer.
    pub fn shares_buffer(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }

    /// Header with the same shape over the same buffer.
    pub fn view(&self) -> Array {
        self.alias(self.shape.clone(), self.len)
    }

    /// Reinterpret the elements under `new_shape`.
    ///
    /// The element count must not change. The result shares this array's
    /// buffer, so it is a view and not a copy: writes through either header
    /// show up in both.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Array> {
        let n = size_of_shape(new_shape);
        if n != self.len {
            return Err(NdError::shape(
                "reshape",
                format!("a shape holding {} elements", self.len),
                new_shape,
            ));
        }
        Ok(self.alias(new_shape.to_vec(), n))
    }

    /// Reshape without the element-count check.
    ///
    /// Shrinking returns a view over the leading elements. Growing allocates a
    /// new buffer holding the current elements followed by zeros.
    pub fn reshape_unsafe(&self, new_shape: &[usize]) -> Array {
        let n = size_of_shape(new_shape);
        if n <= self.len {
            return self.alias(new_shape.to_vec(), n);
        }
        let mut data = vec![0.0; n];
        data[..self.len].copy_from_slice(&self.data());
        Array::from_parts(new_shape.to_vec(), data)
    }

    /// Transpose of a matrix; `r[j, i] = a[i, j]`.
    pub fn t(&self) -> Result<Array> {
        let (rows, cols) = self.dims2("transpose")?;
        let src = self.data();
        let mut data = Vec::with_capacity(src.len());
        for c in 0..cols {
            for r in 0..rows {
                data.push(src[r * cols + c]);
            }
        }
        Ok(Array::from_parts(vec![cols, rows], data))
    }

    /// Same shape and every element within `1e-5`.
    pub fn equals(&self, other: &Array) -> bool {
        self.equals_with(other, &Tolerances::default())
    }

    /// `equals` under the `equality` threshold of `tol`.
    pub fn equals_with(&self, other: &Array, tol: &Tolerances) -> bool {
        self.approx_eq(other, tol.equality)
    }

    pub fn approx_eq(&self, other: &Array, tol: f64) -> bool {
        shape_eq(&self.shape, &other.shape) && approx_eq_slice(&self.data(), &other.data(), tol)
    }
}

impl Clone for Array {
    /// Deep copy into a fresh buffer.
    fn clone(&self) -> Self {
        Array::from_parts(self.shape.clone(), self.to_vec())
    }
}

/// Exact comparison of shape and values, so NaN never equals itself. Use
/// `equals` or `approx_eq` for the tolerance comparison.
impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        shape_eq(&self.shape, &other.shape) && *self.data() == *other.data()
    }
}
