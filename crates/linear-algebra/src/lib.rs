//! A linear algebra library with fixed-size and dynamically-sized vectors and matrices.
//!
//! # Overview
//!
//! - [`Vector`] and [`Matrix`] have their dimensions encoded in the type via const generics.
//!   Dimension mismatches in products, sums and conversions are compile-time errors, so the only
//!   operations that can fail at run time are divisions by (almost) zero and inversions of
//!   singular matrices.
//! - [`DVector`] and [`DMatrix`] have dimensions that are only known at run time. Their operations
//!   check the dimensions of their operands and return an [`Error`] on mismatch.
//!
//! Both families are generic over the element type. Exact operations (products, closed-form
//! determinants, cofactors) work with any [`Number`], including signed integers. Operations that
//! need a tolerance (triangulation, checked division, approximate comparison) require a [`Float`].
//!
//! # Tolerance
//!
//! Approximate comparisons and the zero checks of the checked operations use a tolerance of
//! [`config::DEFAULT_EPSILON`]. It can be overridden by setting the `LINALG_EPSILON` environment
//! variable to a positive number before the first use.
//!
//! # Goals & Non-Goals
//!
//! - Support only a single, column-major, unpadded data layout for fixed-size matrices and
//!   vectors, simplifying their API. [`DMatrix`] uses row-major storage.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Decompositions (LU, QR, SVD) and quaternions are out of scope.
//!
//! # Logging
//!
//! Diagnostics (row swaps during triangulation, rejected inversions, tolerance overrides) are
//! emitted through the [`log`] crate. With the `logger` feature, [`init_logger!`] installs an
//! `env_logger` backend.

pub mod approx;
pub mod config;
mod dynamic;
mod error;
mod matrix;
mod traits;
pub mod validate;
mod vector;

pub use dynamic::*;
pub use error::{Error, Result, Shape};
pub use matrix::*;
pub use traits::*;
pub use vector::*;

#[cfg(feature = "logger")]
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    use log::LevelFilter;

    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[cfg(feature = "logger")]
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
