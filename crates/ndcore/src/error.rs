use std::error::Error;
use std::fmt;

/// Errors raised by array operations whose preconditions do not hold.
#[derive(Debug, Clone, PartialEq)]
pub enum NdError {
    /// Shapes or ranks do not satisfy the operation.
    ShapeError {
        op: &'static str,
        expected: String,
        actual: Vec<usize>,
    },
    IndexOutOfBounds {
        index: usize,
        bound: usize,
    },
    /// A scalar was requested from an array with no elements.
    EmptyArray,
    DegenerateArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, NdError>;

impl NdError {
    pub(crate) fn shape(op: &'static str, expected: impl Into<String>, actual: &[usize]) -> Self {
        NdError::ShapeError {
            op,
            expected: expected.into(),
            actual: actual.to_vec(),
        }
    }

    pub fn is_shape_error(&self) -> bool {
        matches!(self, NdError::ShapeError { .. })
    }
}

impl fmt::Display for NdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NdError::ShapeError { op, expected, actual } => write!(
                f,
                "shape error in {}: expected {}, got shape {:?}",
                op, expected, actual
            ),
            NdError::IndexOutOfBounds { index, bound } => {
                write!(f, "index {} out of bounds for axis of length {}", index, bound)
            }
            NdError::EmptyArray => write!(f, "empty ndarray"),
            NdError::DegenerateArgument(what) => write!(f, "degenerate argument: {}", what),
        }
    }
}

impl Error for NdError {}
