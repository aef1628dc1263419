use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

use crate::{
    approx::{eq_within, ApproxEq},
    error::Shape,
    validate::{validate_divisor, validate_vector_sizes},
    DMatrix, Error, Float, Number, One, Result, Vector, Zero,
};

/// A vector with a length determined at run time.
///
/// Operations combining two vectors fail with [`Error::VectorSizeMismatch`] when their lengths
/// differ.
///
/// # Examples
///
/// ```
/// # use linear_algebra::*;
/// let a = DVector::from(vec![1, 2, 3]);
/// let b = DVector::from(vec![4, 5, 6]);
/// assert_eq!(a.try_dot(&b), Ok(32));
///
/// let c = DVector::from(vec![1, 2]);
/// assert!(a.try_add(&c).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DVector<T>(Vec<T>);

impl<T> DVector<T> {
    /// Creates a vector of length `len` with every element set to 0.
    pub fn zeros(len: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self(vec![T::ZERO; len])
    }

    /// Creates a vector of length `len` with every element set to 1.
    pub fn ones(len: usize) -> Self
    where
        T: One + Clone,
    {
        Self(vec![T::ONE; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem * elem)
    }

    /// Returns the length (magnitude) of this vector.
    pub fn length(&self) -> T
    where
        T: Float,
    {
        self.length2().sqrt()
    }

    /// Divides each element by `divisor`, or fails with [`Error::ZeroDivisor`] if `divisor` is
    /// within [`Float::epsilon`] of zero.
    pub fn try_div(&self, divisor: T) -> Result<Self>
    where
        T: Float,
    {
        validate_divisor(divisor)?;
        Ok(Self(self.0.iter().map(|&elem| elem / divisor).collect()))
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    ///
    /// Fails with [`Error::ZeroDivisor`] if `self` has (almost) zero length.
    pub fn try_normalize(&self) -> Result<Self>
    where
        T: Float,
    {
        self.try_div(self.length())
    }

    /// Element-wise addition.
    pub fn try_add(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        self.zip_with("Vector addition", other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    pub fn try_sub(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        self.zip_with("Vector subtraction", other, |a, b| a - b)
    }

    /// Adds `other` to `self` in place. On error, `self` is left unchanged.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()>
    where
        T: Number,
    {
        *self = self.try_add(other)?;
        Ok(())
    }

    /// Subtracts `other` from `self` in place. On error, `self` is left unchanged.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()>
    where
        T: Number,
    {
        *self = self.try_sub(other)?;
        Ok(())
    }

    /// Computes the dot product (scalar product) of `self` and `other`.
    pub fn try_dot(&self, other: &Self) -> Result<T>
    where
        T: Number,
    {
        validate_vector_sizes("Scalar product", self.len(), other.len())?;
        Ok(self
            .0
            .iter()
            .zip(&other.0)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b))
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// Fails with [`Error::CrossDimension`] unless both vectors have exactly 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let x = DVector::from(vec![1, 0, 0]);
    /// let y = DVector::from(vec![0, 1, 0]);
    /// assert_eq!(x.try_cross(&y), Ok(DVector::from(vec![0, 0, 1])));
    /// assert_eq!(
    ///     x.try_cross(&DVector::from(vec![0, 1])),
    ///     Err(Error::CrossDimension { left: 3, right: 2 }),
    /// );
    /// ```
    pub fn try_cross(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        match (self.as_slice(), other.as_slice()) {
            (&[ax, ay, az], &[bx, by, bz]) => Ok(Self(vec![
                ay * bz - az * by,
                az * bx - ax * bz,
                ax * by - ay * bx,
            ])),
            _ => Err(Error::CrossDimension {
                left: self.len(),
                right: other.len(),
            }),
        }
    }

    /// Transforms this vector-column by `operator`, computing `operator * self`.
    ///
    /// See [`DMatrix::try_mul_col`].
    pub fn try_transform(&self, operator: &DMatrix<T>) -> Result<Self>
    where
        T: Number,
    {
        operator.try_mul_col(self)
    }

    /// Transforms this vector-row by `operator`, computing `self * operator`.
    ///
    /// See [`DMatrix::try_mul_row`].
    pub fn try_transform_row(&self, operator: &DMatrix<T>) -> Result<Self>
    where
        T: Number,
    {
        operator.try_mul_row(self)
    }

    /// Returns whether every element of `self` differs from the one in `other` by strictly less
    /// than `eps`.
    ///
    /// Vectors of different lengths cannot be compared and yield
    /// [`Error::VectorSizeMismatch`].
    pub fn eq_within(&self, other: &Self, eps: T) -> Result<bool>
    where
        T: Float,
    {
        validate_vector_sizes("Equalization", self.len(), other.len())?;
        Ok(self
            .0
            .iter()
            .zip(&other.0)
            .all(|(&a, &b)| eq_within(a, b, eps)))
    }

    /// Like [`DVector::eq_within`], using the configured tolerance ([`Float::epsilon`]).
    pub fn eq_approx(&self, other: &Self) -> Result<bool>
    where
        T: Float,
    {
        self.eq_within(other, T::epsilon())
    }

    fn zip_with<F>(&self, op: &'static str, other: &Self, mut f: F) -> Result<Self>
    where
        T: Copy,
        F: FnMut(T, T) -> T,
    {
        validate_vector_sizes(op, self.len(), other.len())?;
        Ok(Self(
            self.0.iter().zip(&other.0).map(|(&a, &b)| f(a, b)).collect(),
        ))
    }
}

impl<T> From<Vec<T>> for DVector<T> {
    fn from(value: Vec<T>) -> Self {
        Self(value)
    }
}

impl<T> From<DVector<T>> for Vec<T> {
    fn from(value: DVector<T>) -> Self {
        value.0
    }
}

impl<T, const N: usize> From<Vector<T, N>> for DVector<T> {
    fn from(value: Vector<T, N>) -> Self {
        Self(value.into_array().into())
    }
}

/// Fails with [`Error::DimensionMismatch`] unless the vector has exactly `N` elements.
impl<T, const N: usize> TryFrom<DVector<T>> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: DVector<T>) -> Result<Self> {
        let len = value.len();
        match <[T; N]>::try_from(value.0) {
            Ok(array) => Ok(array.into()),
            Err(_) => Err(Error::DimensionMismatch {
                expected: Shape(N, 1),
                found: Shape(len, 1),
            }),
        }
    }
}

impl<T> Index<usize> for DVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for DVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

/// Scaling by a scalar.
impl<T: Number> Mul<T> for DVector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self(self.0.into_iter().map(|elem| elem * rhs).collect())
    }
}

impl<T> ApproxEq for DVector<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0[..].abs_diff_eq(&other.0[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0[..].rel_diff_eq(&other.0[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0[..].ulps_diff_eq(&other.0[..], ulps_tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for DVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display> fmt::Display for DVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}
