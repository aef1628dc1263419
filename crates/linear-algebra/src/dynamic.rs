//! Vectors and matrices whose dimensions are only known at run time.
//!
//! Unlike [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix], operations on these types have
//! to check that the dimensions of their operands agree. Those checks are reported as
//! [`Error`][crate::Error]s instead of panics.
//!
//! Conversions to and from the fixed-size types are available via [`From`] and [`TryFrom`].

mod matrix;
mod vector;

pub use matrix::DMatrix;
pub use vector::DVector;
