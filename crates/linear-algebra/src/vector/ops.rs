//! Operator and comparison impls for [`Vector`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Vectors compare equal to vectors, arrays and slices of any comparable element type.
impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for [T; N] {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for Vector<T, N> {
    fn eq(&self, other: &[U]) -> bool {
        self.0[..] == *other
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident);+ $(;)?) => {
        $(
            /// Element-wise operation.
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$method(r))
                }
            }

            /// Element-wise operation.
            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(l, r)| l.$assign_method(r));
                }
            }
        )+
    };
}
elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// Both element-wise and vector-scalar multiplication are supported, which rules out a more generic
// `Mul<U> for Vector<T, N> where T: Mul<U>`.

macro_rules! scalar {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident);+ $(;)?) => {
        $(
            /// Vector-scalar operation (scaling).
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$method(rhs))
                }
            }

            /// Vector-scalar operation (scaling).
            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|elem| elem.$assign_method(rhs));
                }
            }
        )+
    };
}
scalar! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}
