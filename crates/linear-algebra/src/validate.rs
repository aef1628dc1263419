//! Argument checks shared by the checked operations.
//!
//! These are public so that code building on top of this crate can report the same errors for its
//! own operations.

use crate::{
    error::{Error, Result, Shape},
    Float,
};

/// Fails with [`Error::ZeroDivisor`] if `divisor` is within [`Float::epsilon`] of zero.
///
/// # Examples
///
/// ```
/// # use linear_algebra::{validate::validate_divisor, Error};
/// assert!(validate_divisor(0.5).is_ok());
/// assert_eq!(validate_divisor(1e-9), Err(Error::ZeroDivisor));
/// ```
pub fn validate_divisor<T: Float>(divisor: T) -> Result<()> {
    if divisor.abs() < T::epsilon() {
        return Err(Error::ZeroDivisor);
    }
    Ok(())
}

/// Fails with [`Error::VectorSizeMismatch`] if `left` and `right` differ.
///
/// `op` names the operation in the error message (eg. `"Vector addition"`).
pub fn validate_vector_sizes(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::VectorSizeMismatch { op, left, right });
    }
    Ok(())
}

/// Fails with [`Error::MatrixSizeMismatch`] if the two shapes differ.
pub fn validate_matrix_sizes(
    op: &'static str,
    left: impl Into<Shape>,
    right: impl Into<Shape>,
) -> Result<()> {
    let (left, right) = (left.into(), right.into());
    if left != right {
        return Err(Error::MatrixSizeMismatch { op, left, right });
    }
    Ok(())
}

/// Fails with [`Error::NotSquare`] unless `shape` has as many rows as columns.
pub fn validate_square(op: &'static str, shape: impl Into<Shape>) -> Result<()> {
    let shape = shape.into();
    if shape.0 != shape.1 {
        return Err(Error::NotSquare { op, shape });
    }
    Ok(())
}
