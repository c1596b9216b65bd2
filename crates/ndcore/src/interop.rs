//! Conversions to and from `ndarray`.
//!
//! Both directions copy; an `ndarray` array never aliases an `Array` buffer.

use ndarray::{ArrayD, IxDyn};

use crate::array::Array;
use crate::error::{NdError, Result};

impl Array {
    /// Row-major copy as a dynamic-rank `ndarray` array.
    pub fn to_ndarray(&self) -> Result<ArrayD<f64>> {
        ArrayD::from_shape_vec(IxDyn(self.shape()), self.to_vec())
            .map_err(|_| NdError::shape("to_ndarray", "a shape matching the element count", self.shape()))
    }

    /// Copy of any `ndarray` array, in logical (row-major) order.
    pub fn from_ndarray(a: &ArrayD<f64>) -> Array {
        let data: Vec<f64> = a.iter().copied().collect();
        if a.ndim() == 0 {
            // a 0-d ndarray holds one scalar
            return Array::from_vec(data);
        }
        Array::from_parts(a.shape().to_vec(), data)
    }
}

impl From<&ArrayD<f64>> for Array {
    fn from(value: &ArrayD<f64>) -> Self {
        Array::from_ndarray(value)
    }
}

impl TryFrom<&Array> for ArrayD<f64> {
    type Error = NdError;

    fn try_from(value: &Array) -> Result<Self> {
        value.to_ndarray()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_ndarray() {
        let a = Array::arange(6).reshape(&[2, 3]).unwrap();
        let nd = a.to_ndarray().unwrap();
        assert_eq!(nd.shape(), &[2, 3]);
        assert_eq!(nd[IxDyn(&[1, 0])], 3.0);
        assert!(Array::from_ndarray(&nd).equals(&a));
    }

    #[test]
    fn transposed_ndarray_is_copied_in_logical_order() {
        let nd = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let t = nd.t().to_owned();
        assert_eq!(Array::from_ndarray(&t).to_vec(), vec![1.0, 3.0, 2.0, 4.0]);
    }
}
