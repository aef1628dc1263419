use std::{array, fmt};

use crate::{
    approx::eq_within,
    traits::{Number, Sqrt},
    validate::validate_divisor,
    Float, Mat2, Matrix, MinMax, One, Result, Trig, Zero,
};

mod ops;
mod view;

macro_rules! aliases {
    ($($n:literal: $name:ident, $f32:ident;)+) => {
        $(
            #[doc = concat!("A vector with ", stringify!($n), " elements.")]
            pub type $name<T> = Vector<T, $n>;
            #[doc = concat!("A [`", stringify!($name), "`] of [`f32`].")]
            pub type $f32 = $name<f32>;
        )+
    };
}
aliases! {
    1: Vec1, Vec1f;
    2: Vec2, Vec2f;
    3: Vec3, Vec3f;
    4: Vec4, Vec4f;
}

/// An `N`-element vector storing elements of type `T`.
///
/// The dimension is part of the type, so operations combining two vectors (addition, dot product,
/// ...) can not fail. For vectors whose length is only known at runtime, use [`DVector`].
///
/// [`DVector`]: crate::DVector
///
/// # Construction
///
/// - [`vec1`], [`vec2`], [`vec3`] and [`vec4`] create vectors from their elements.
/// - [`Vector::splat`] copies one value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Arrays convert into vectors via [`From`].
/// - [`Vector::ZERO`] has all elements set to 0, [`Vector::ONE`] has all elements set to 1.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   are the unit vectors along each axis.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
///
/// # Transforms
///
/// A [`Vector`] can act as a *vector-column* (multiplied from the right of a matrix, `M * v`, see
/// [`Vector::transform`]) or as a *vector-row* (multiplied from the left, `v * M`, see
/// [`Vector::transform_row`]).
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element set to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element set to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

macro_rules! axes {
    ($n:literal: $($axis:ident = $i:literal),+) => {
        impl<T: Zero + One + Copy> Vector<T, $n> {
            $(
                #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                pub const $axis: Self = {
                    let mut elems = [T::ZERO; $n];
                    elems[$i] = T::ONE;
                    Self(elems)
                };
            )+
        }
    };
}
axes!(1: X = 0);
axes!(2: X = 0, Y = 1);
axes!(3: X = 0, Y = 1, Z = 2);
axes!(4: X = 0, Y = 1, Z = 2, W = 3);

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every element equal to `elem`.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(Vec4::splat(-1), vec4(-1, -1, -1, -1));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector by invoking a closure with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let v: Vec3<usize> = Vector::from_fn(|i| 10 + i);
    /// assert_eq!(v, vec3(10, 11, 12));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Returns a vector of `f` applied to every element.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec2(-3, 4).map(i32::abs), vec2(3, 4));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` at equal indices into pairs.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec2(1, 2).zip(vec2(true, false)), vec2((1, true), (2, false)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        self.map(|lhs| match rhs.next() {
            Some(rhs) => (lhs, rhs),
            None => unreachable!("both sides have {} elements", N),
        })
    }

    /// Returns a reference to the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying array.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mut v = Vec3::ZERO;
    /// v.as_mut_array()[2] = 5;
    /// assert_eq!(v, [0, 0, 5]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Squared euclidean length, `self · self`.
    ///
    /// Unlike [`Vector::length`], this needs no square root and works for integers.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec3(2, -3, 6).length2(), 49);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Euclidean length (norm) of the vector.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec3(2.0, -3.0, 6.0).length(), 7.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// Normalizing the zero vector yields `NaN` elements; [`Vector::try_normalize`] reports an
    /// error instead.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec2(-5.0, 0.0).normalize(), vec2(-1.0, 0.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Divides this vector by its length, or fails with [`Error::ZeroDivisor`] if the length is
    /// (approximately) zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Ok(vec2(0.0, -1.0)));
    /// assert_eq!(Vec2f::ZERO.try_normalize(), Err(Error::ZeroDivisor));
    /// ```
    ///
    /// [`Error::ZeroDivisor`]: crate::Error::ZeroDivisor
    pub fn try_normalize(self) -> Result<Self>
    where
        T: Float,
    {
        self.try_div(self.length())
    }

    /// Divides each element by `divisor`, or fails with [`Error::ZeroDivisor`] if `divisor` is
    /// (approximately) zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec2(1.0, 3.0).try_div(2.0), Ok(vec2(0.5, 1.5)));
    /// assert!(vec2(1.0, 3.0).try_div(0.0).is_err());
    /// ```
    ///
    /// [`Error::ZeroDivisor`]: crate::Error::ZeroDivisor
    pub fn try_div(self, divisor: T) -> Result<Self>
    where
        T: Float,
    {
        validate_divisor(divisor)?;
        Ok(self / divisor)
    }

    /// Scalar product: the sum of the products of elements at equal indices.
    ///
    /// Its sign tells whether the angle between the vectors is acute (positive), right (zero) or
    /// obtuse (negative).
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec4(1, 2, 3, 4).dot(vec4(2, 0, -1, 1)), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        let mut sum = T::ZERO;
        for (a, b) in self.0.into_iter().zip(other.0) {
            sum = sum + a * b;
        }
        sum
    }

    /// Unsigned angle between `self` and `other` in radians, in the range `[0, pi]`.
    ///
    /// The result is `NaN` if either vector has zero length. Parallel vectors give exactly 0 or pi
    /// even when rounding moves the cosine slightly past 1.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// use std::f64::consts::{FRAC_PI_4, PI};
    ///
    /// assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(0.0, 3.0)), FRAC_PI_4).abs(1e-12);
    /// assert_approx_eq!(Vec3::<f64>::Z.abs_angle_to(-Vec3::<f64>::Z), PI);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt + PartialOrd,
    {
        let cos = self.dot(other) / (self.length() * other.length());
        // `NaN` fails both comparisons and is passed through.
        let cos = if cos > T::ONE {
            T::ONE
        } else if cos < -T::ONE {
            -T::ONE
        } else {
            cos
        };
        cos.acos()
    }

    /// Transforms this vector-column by `operator`, computing `operator * self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let scale = Matrix::from_diagonal([2, 3]);
    /// assert_eq!(vec2(1, 1).transform(scale), vec2(2, 3));
    ///
    /// // Non-square operators change the dimension.
    /// let project = Matrix::from_rows([[1, 0, 0], [0, 1, 0]]);
    /// assert_eq!(vec3(5, 6, 7).transform(project), vec2(5, 6));
    /// ```
    pub fn transform<const R: usize>(self, operator: Matrix<T, R, N>) -> Vector<T, R>
    where
        T: Number,
    {
        operator * self
    }

    /// Transforms this vector-row by `operator`, computing `self * operator`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(vec2(1, 1).transform_row(m), vec2(4, 6));
    /// ```
    pub fn transform_row<const C: usize>(self, operator: Matrix<T, N, C>) -> Vector<T, C>
    where
        T: Number,
    {
        operator.mul_row(self)
    }

    /// Returns whether every element of `self` differs from the one in `other` by strictly less
    /// than `eps`.
    pub fn eq_within(&self, other: &Self, eps: T) -> bool
    where
        T: Float,
    {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(&a, &b)| eq_within(a, b, eps))
    }

    /// Like [`Vector::eq_within`], using the configured tolerance ([`Float::epsilon`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let a = vec3(0.1 + 0.2, 1.0, 0.0);
    /// assert!(a.eq_approx(&vec3(0.3, 1.0, 0.0)));
    /// assert!(!a.eq_approx(&vec3(0.3, 1.0, 0.001)));
    /// ```
    pub fn eq_approx(&self, other: &Self) -> bool
    where
        T: Float,
    {
        self.eq_within(other, T::epsilon())
    }

    /// Per-element minimum of `self` and `other`.
    ///
    /// For floats, a `NaN` element is replaced by the element of the other vector.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec3(4, -2, 0).min(vec3(1, 7, 0)), vec3(1, -2, 0));
    /// assert_eq!(vec2(f64::NAN, 1.0).min(vec2(2.0, 3.0)), vec2(2.0, 1.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Per-element maximum of `self` and `other`.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec3(4, -2, 0).max(vec3(1, 7, 0)), vec3(4, 7, 0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Limits every element to the range given by the elements of `lo` and `hi` at its index.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let v = vec2(-0.5, 1.5).clamp(Vec2::ZERO, Vec2::ONE);
    /// assert_eq!(v, vec2(0.0, 1.0));
    /// ```
    pub fn clamp(self, lo: Self, hi: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(lo[i], hi[i]))
    }
}

impl<T> Vector<T, 1> {
    /// Adds `value` as the Y coordinate.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.0;
        Vector([x, value])
    }
}

impl<T> Vector<T, 2> {
    /// Drops the Y coordinate.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.0;
        Vector([x])
    }

    /// Adds `value` as the Z coordinate.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec2(7, 8).extend(9), vec3(7, 8, 9));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Homogeneous coordinates of this 2D point (`w = 1`), for use with the 3x3 matrices built by
    /// [`Matrix::to_homogeneous`].
    pub fn to_homogeneous(self) -> Vector<T, 3>
    where
        T: One,
    {
        self.extend(T::ONE)
    }

    /// Rotates the vector clockwise by `radians`, with X pointing right and Y pointing up.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// use std::f64::consts::PI;
    ///
    /// let v = vec2(2.0, 0.0).rotate_clockwise(PI / 2.0);
    /// assert_approx_eq!(v, vec2(0.0, -2.0)).abs(1e-12);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates the vector counterclockwise by `radians`.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Angle in radians that [`Vector::rotate_clockwise`] has to turn `self` by to point in the
    /// direction of `other`, in the range `[-pi, pi]`.
    ///
    /// Counterclockwise turns are negative. With a Y axis pointing down, the sign flips.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(vec2(0.0, 3.0).signed_angle_to(vec2(1.0, 0.0)), FRAC_PI_2);
    /// assert_approx_eq!(vec2(1.0, 0.0).signed_angle_to(vec2(0.0, 3.0)), -FRAC_PI_2);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// 2D cross product `x1 * y2 - y1 * x2`, the signed area of the parallelogram spanned by both
    /// vectors.
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.y - self.y * other.x
    }
}

impl<T> Vector<T, 3> {
    /// Drops the Z coordinate.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Adds `value` as the W coordinate.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Homogeneous coordinates of this 3D point (`w = 1`).
    pub fn to_homogeneous(self) -> Vector<T, 4>
    where
        T: One,
    {
        self.extend(T::ONE)
    }

    /// Vector product of `self` and `other`.
    ///
    /// The result is orthogonal to both operands and follows the right-hand rule, so
    /// `a.cross(b) == -b.cross(a)`.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));
    /// assert_eq!(Vec3::<i32>::Z.cross(Vec3::X), Vec3::Y);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [x1, y1, z1] = self.0;
        let [x2, y2, z2] = other.0;
        Vector([y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2])
    }
}

impl<T> Vector<T, 4> {
    /// Drops the W coordinate, the inverse of [`Vector::to_homogeneous`] for points with `w = 1`.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |t, elem| t.field(elem))
            .finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut sep = "";
        for elem in &self.0 {
            f.write_str(sep)?;
            elem.fmt(f)?;
            sep = ", ";
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Shorthand for `Vec1::from([x])`.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Shorthand for `Vec2::from([x, y])`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for `Vec3::from([x, y, z])`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for `Vec4::from([x, y, z, w])`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
