//! Numeric traits the vector and matrix types are generic over.

use std::{fmt, ops};

use crate::{approx::ApproxEq, config};

/// Element types with the trigonometric functions needed for angles and rotations.
///
/// All angles are in radians.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// Arccosine, in the range `[0, pi]`.
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / x`, in the range `[-pi, pi]`.
    fn atan2(self, x: Self) -> Self;
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Element-wise minimum and maximum.
///
/// The float impls forward to [`f64::min`] and [`f64::max`], so a `NaN` operand yields the other
/// operand.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

/// The additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// The multiplicative identity.
pub trait One {
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is enough for exact algebra: sums, products, closed-form determinants and cofactors all
/// work for signed integers as well as floats.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// Operations that need a tolerance (pivot selection, divisor checks, approximate comparison) or a
/// square root are only available for element types implementing this trait.
pub trait Float:
    Number + Sqrt + Trig + MinMax + PartialOrd + ApproxEq<Tolerance = Self> + fmt::Debug
{
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns the tolerance used by the `*_approx` comparisons and by the checked operations.
    ///
    /// This is [`DEFAULT_EPSILON`][config::DEFAULT_EPSILON] unless overridden via the
    /// `LINALG_EPSILON` environment variable.
    fn epsilon() -> Self;
}

macro_rules! int_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    <$ty>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$ty>::max(self, other)
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                fn cos(self) -> Self {
                    <$ty>::cos(self)
                }

                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                fn atan2(self, x: Self) -> Self {
                    <$ty>::atan2(self, x)
                }
            }

            impl Float for $ty {
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }

                fn epsilon() -> Self {
                    config::epsilon() as $ty
                }
            }
        )+
    };
}
float_impls!(f32, f64);
