//! Approximate equality.
//!
//! There are two ways of comparing values approximately:
//!
//! - [`eq_within`] and [`eq_approx`] compare two scalars against a single *strict* tolerance. The
//!   vector and matrix types expose the same comparison as `eq_within`/`eq_approx` methods. This
//!   is the comparison used by the library itself (eg. during pivot selection).
//! - The [`ApproxEq`] trait supports absolute, relative and ULPs-based comparison and backs the
//!   [`assert_approx_eq!`][crate::assert_approx_eq] and
//!   [`assert_approx_ne!`][crate::assert_approx_ne] macros.

mod impls;

use std::{fmt, panic::Location};

use crate::Float;

/// Returns whether `a` and `b` differ by strictly less than `eps`.
///
/// `NaN` never compares equal. Infinities only compare equal to the same infinity.
///
/// # Examples
///
/// ```
/// # use linear_algebra::approx::eq_within;
/// assert!(eq_within(1.0, 1.05, 0.1));
/// assert!(!eq_within(1.0, 1.1, 0.1));
/// ```
pub fn eq_within<T: Float>(a: T, b: T, eps: T) -> bool {
    if a == b {
        // Covers `inf == inf`; no subtraction needed.
        return true;
    }
    (a - b).abs() < eps
}

/// Returns whether `a` and `b` are equal within the configured tolerance ([`Float::epsilon`]).
///
/// # Examples
///
/// ```
/// # use linear_algebra::approx::eq_approx;
/// assert!(eq_approx(0.1 + 0.2, 0.3));
/// assert!(!eq_approx(0.1, 0.2));
/// ```
pub fn eq_approx<T: Float>(a: T, b: T) -> bool {
    eq_within(a, b, T::epsilon())
}

/// Tolerant comparison of floating-point values and of containers of them.
///
/// Arrays, slices, vectors and matrices compare element by element and are equal only if every
/// pair of elements is. Slices of different lengths are never equal.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The float type that absolute and relative tolerances are given in.
    type Tolerance: DefaultTolerances + Copy;

    /// Equal if `abs(self - other) <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Equal if `abs(self - other) <= max(abs(self), abs(other)) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Equal if at most `ulps_tolerance` representable values lie between `self` and `other`.
    ///
    /// `NaN` is never equal to anything. Values of opposite sign are only equal if both are zero.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] when the assertion is not configured.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

macro_rules! default_tolerances {
    ($($ty:ident),+) => {
        $(
            impl DefaultTolerances for $ty {
                const DEFAULT_ABS_TOLERANCE: Self = $ty::EPSILON;
                const DEFAULT_REL_TOLERANCE: Self = $ty::EPSILON;
                const DEFAULT_ULPS_TOLERANCE: u32 = 4;
            }
        )+
    };
}
default_tolerances!(f32, f64);

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne], evaluated when it goes out of scope.
///
/// [`abs`](Asserter::abs), [`rel`](Asserter::rel) and [`ulps`](Asserter::ulps) select the
/// comparisons to run. The values count as equal as soon as one selected comparison accepts
/// them. With nothing selected, an absolute and a relative comparison against the
/// [`DefaultTolerances`] of the element type are used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Accept values whose difference is at most `abs`. Use this near zero.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Accept values whose difference is at most `rel` times the larger magnitude.
    ///
    /// A comparison against 0.0 only passes with `rel >= 1.0`.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Accept values at most `ulps` representable floats apart.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn holds(&self) -> bool {
        let (l, r) = (self.left, self.right);
        let configured = self.abs.is_some() || self.rel.is_some() || self.ulps.is_some();
        let equal = if configured {
            self.abs.map_or(false, |tol| l.abs_diff_eq(r, tol))
                || self.rel.map_or(false, |tol| l.rel_diff_eq(r, tol))
                || self.ulps.map_or(false, |tol| l.ulps_diff_eq(r, tol))
        } else {
            l.abs_diff_eq(r, T::Tolerance::DEFAULT_ABS_TOLERANCE)
                || l.rel_diff_eq(r, T::Tolerance::DEFAULT_REL_TOLERANCE)
        };
        match self.kind {
            AssertionKind::Eq => equal,
            AssertionKind::Ne => !equal,
        }
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // Destructors ignore `#[track_caller]`; `location` was recorded by `new`.
    fn drop(&mut self) {
        if !self.holds() {
            report_failure(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn report_failure(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if kind == AssertionKind::Eq { "==" } else { "!=" };
    let suffix = msg.map(|m| format!(": {m}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{suffix}\n  left: {left:?}\n right: {right:?}")
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Like [`assert_eq!`], but compares with [`ApproxEq`].
///
/// The returned [`Asserter`] can pick the comparison before the check runs at the end of the
/// statement.
///
/// ```
/// # use linear_algebra::*;
/// let sum: f64 = [0.1; 10].iter().sum();
/// assert_approx_eq!(sum, 1.0);
/// assert_approx_eq!(1000.0, 1001.0).rel(1e-3);
/// assert_approx_eq!(-0.25, -0.2501).abs(1e-3);
///
/// let m = Mat2::from_rows([[2.0, 1.0], [7.0, 4.0]]);
/// assert_approx_eq!(m.invert() * m, Mat2::IDENTITY, "inverse of {m:?}").abs(1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Like [`assert_ne!`], but compares with [`ApproxEq`]. See [`assert_approx_eq!`].
///
/// ```
/// # use linear_algebra::*;
/// assert_approx_ne!(1000.0, 1001.0).rel(1e-4);
/// assert_approx_ne!(vec2(0.0, 1.0), vec2(0.0, 1.01)).abs(1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}
