use std::fmt;

/// A `(rows, columns)` pair, formatted as `RxC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape(pub usize, pub usize);

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self(rows, cols)
    }
}

/// Errors returned by checked vector and matrix operations.
///
/// Operations on the fixed-size [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] types can
/// only fail on division by zero and on singular matrices. Everything else is reported by the
/// dynamically-sized [`DVector`][crate::DVector] and [`DMatrix`][crate::DMatrix].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Division denied: divisor equals 0")]
    ZeroDivisor,

    #[error("{op} denied: vectors with different lengths ({left} and {right})")]
    VectorSizeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("{op} denied: matrices with different sizes ({left} and {right})")]
    MatrixSizeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("Matrix product denied: matrices with sizes {left} and {right}")]
    ProductShape { left: Shape, right: Shape },

    #[error("Matrix-vector product denied: matrix width {width} differs from vector length {len}")]
    ColumnProductShape { width: usize, len: usize },

    #[error("Vector-matrix product denied: matrix height {height} differs from vector length {len}")]
    RowProductShape { height: usize, len: usize },

    #[error("Cross product denied: vector size must be 3, but given are {left}, {right}")]
    CrossDimension { left: usize, right: usize },

    #[error("{op} denied: matrix {shape} is not square")]
    NotSquare { op: &'static str, shape: Shape },

    #[error("Matrix inversion denied: determinant equals 0")]
    Singular,

    #[error("Matrix creation denied: expected length {expected}, but entry {index} has length {found}")]
    Ragged {
        expected: usize,
        found: usize,
        index: usize,
    },

    #[error("Matrix creation denied: no rows or vectors given")]
    Empty,

    #[error("Conversion denied: expected dimensions {expected}, found {found}")]
    DimensionMismatch { expected: Shape, found: Shape },
}

/// Result type used by the checked operations of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::ZeroDivisor.to_string(),
            "Division denied: divisor equals 0"
        );
        assert_eq!(
            Error::VectorSizeMismatch {
                op: "Vector addition",
                left: 3,
                right: 4,
            }
            .to_string(),
            "Vector addition denied: vectors with different lengths (3 and 4)"
        );
        assert_eq!(
            Error::MatrixSizeMismatch {
                op: "Matrix subtraction",
                left: Shape(2, 3),
                right: Shape(3, 2),
            }
            .to_string(),
            "Matrix subtraction denied: matrices with different sizes (2x3 and 3x2)"
        );
        assert_eq!(
            Error::CrossDimension { left: 2, right: 3 }.to_string(),
            "Cross product denied: vector size must be 3, but given are 2, 3"
        );
    }
}
