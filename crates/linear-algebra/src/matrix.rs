use std::{array, fmt, mem};

use crate::{
    approx::eq_within, validate::validate_divisor, Error, Float, Number, One, Result, Trig,
    Vector, Zero,
};

mod ops;

macro_rules! square_aliases {
    ($($n:literal: $name:ident, $f32:ident;)+) => {
        $(
            #[doc = concat!("A square ", stringify!($n), "x", stringify!($n), " matrix.")]
            pub type $name<T> = Matrix<T, $n, $n>;
            #[doc = concat!("A [`", stringify!($name), "`] of [`f32`].")]
            pub type $f32 = $name<f32>;
        )+
    };
}
square_aliases! {
    1: Mat1, Mat1f;
    2: Mat2, Mat2f;
    3: Mat3, Mat3f;
    4: Mat4, Mat4f;
}

macro_rules! rect_aliases {
    ($($name:ident = $r:literal x $c:literal),+ $(,)?) => {
        $(
            #[doc = concat!("A ", stringify!($r), "-row, ", stringify!($c), "-column matrix.")]
            pub type $name<T> = Matrix<T, $r, $c>;
        )+
    };
}
rect_aliases! {
    Mat2x3 = 2 x 3,
    Mat2x4 = 2 x 4,
    Mat3x2 = 3 x 2,
    Mat3x4 = 3 x 4,
    Mat4x2 = 4 x 2,
    Mat4x3 = 4 x 3,
}

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays or [`Vector`]s.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_diagonal`] creates a square matrix that is zero outside of its diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] create 2D rotation
///   matrices.
/// - [`Matrix::ZERO`] has every element set to 0, [`Matrix::IDENTITY`] has 1 on its diagonal.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use linear_algebra::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Determinants and Inverses
///
/// Closed-form determinants are available for sizes up to 4x4 and work for any [`Number`],
/// including integers. [`Matrix::triangular_determinant`] works for any square float matrix.
/// Inversion ([`Matrix::try_invert`]) uses the adjugate and is available up to 4x4.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Builds a matrix from its rows, given as arrays or [`Vector`]s.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let by_rows = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let by_columns = Mat2x3::from_columns([vec2(1, 4), vec2(2, 5), vec2(3, 6)]);
    /// assert_eq!(by_rows, by_columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Builds a matrix from its columns.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Builds a matrix whose element at `(row, col)` is `cb(row, col)`.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let hilbert: Mat2<f64> = Matrix::from_fn(|i, j| 1.0 / (i + j + 1) as f64);
    /// assert_eq!(hilbert.row(1), vec2(0.5, 1.0 / 3.0));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies `f` to every element.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Reflects the matrix over its main diagonal, turning rows into columns.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let m = Mat3x2::from_rows([[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(m.transpose(), Mat2x3::from_rows([[1, 3, 5], [2, 4, 6]]));
    /// assert_eq!(m.transpose().transpose(), m);
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        // Column `i` of the result is made of the `i`-th element of every column of `self`.
        let mut columns = self.0.map(|column| column.into_iter());
        Matrix(array::from_fn(|_| {
            columns.each_mut().map(|column| match column.next() {
                Some(elem) => elem,
                // every column yields exactly `R` elements
                None => unreachable!(),
            })
        }))
    }

    /// Checked element access; `None` when `(row, col)` lies outside the matrix.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let m = Mat2x3::from_rows([[7, 8, 9], [10, 11, 12]]);
    /// assert_eq!(m.get(0, 2), Some(&9));
    /// assert_eq!(m.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(row < R, "row index {row} out of bounds for matrix with {R} rows");
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < R && b < R,
            "row indices {a} and {b} out of bounds for matrix with {R} rows"
        );
        for column in &mut self.0 {
            column.swap(a, b);
        }
    }

    /// Swaps columns `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// By-value version of [`Matrix::swap_rows`].
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let m = Mat3x2::from_rows([[1, 2], [3, 4], [5, 6]]).swapped_rows(0, 2);
    /// assert_eq!(m.row(0), vec2(5, 6));
    /// assert_eq!(m.row(2), vec2(1, 2));
    /// ```
    pub fn swapped_rows(mut self, a: usize, b: usize) -> Self {
        self.swap_rows(a, b);
        self
    }

    /// By-value version of [`Matrix::swap_columns`].
    pub fn swapped_columns(mut self, a: usize, b: usize) -> Self {
        self.swap_columns(a, b);
        self
    }

    /// Copies the overlapping top-left block into a matrix of another size, padding with zeros.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.resize::<3, 2>(), Mat3x2::from_rows([[1, 2], [4, 5], [0, 0]]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| match self.get_mut(row, col) {
            Some(elem) => mem::replace(elem, T::ZERO),
            None => T::ZERO,
        })
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// Returns `true` if every element is exactly zero.
    pub fn is_zero(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.0.iter().flatten().all(|elem| *elem == T::ZERO)
    }

    /// Returns `true` if the matrix is square and every element outside of its diagonal is within
    /// [`Float::epsilon`] of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert!(Mat3f::IDENTITY.is_diagonal());
    /// assert!(Matrix::from_diagonal([1.0, 0.0, 2.0]).is_diagonal());
    /// assert!(!Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).is_diagonal());
    /// ```
    pub fn is_diagonal(&self) -> bool
    where
        T: Float,
    {
        self.is_square()
            && (0..R).all(|row| {
                (0..C).all(|col| row == col || eq_within(self[(row, col)], T::ZERO, T::epsilon()))
            })
    }

    /// Returns whether every element of `self` differs from the one in `other` by strictly less
    /// than `eps`.
    pub fn eq_within(&self, other: &Self, eps: T) -> bool
    where
        T: Float,
    {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(&a, &b)| eq_within(a, b, eps))
    }

    /// Like [`Matrix::eq_within`], using the configured tolerance ([`Float::epsilon`]).
    pub fn eq_approx(&self, other: &Self) -> bool
    where
        T: Float,
    {
        self.eq_within(other, T::epsilon())
    }

    /// Computes the product of `self` and the vector-column `v` (`self * v`).
    #[inline]
    pub fn mul_col(self, v: Vector<T, C>) -> Vector<T, R>
    where
        T: Number,
    {
        self * v
    }

    /// Computes the product of the vector-row `v` and `self` (`v * self`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.mul_row(vec2(1, -1)), vec3(-3, -3, -3));
    /// assert_eq!(mat.mul_row(vec2(1, -1)), mat.transpose() * vec2(1, -1));
    /// ```
    pub fn mul_row(self, v: Vector<T, R>) -> Vector<T, C>
    where
        T: Number,
    {
        Vector::from_fn(|col| (0..R).fold(T::ZERO, |acc, row| acc + v[row] * self[(row, col)]))
    }

    /// Divides each element by `divisor`, or fails with [`Error::ZeroDivisor`] if `divisor` is
    /// within [`Float::epsilon`] of zero.
    pub fn try_div(self, divisor: T) -> Result<Self>
    where
        T: Float,
    {
        validate_divisor(divisor)?;
        Ok(self / divisor)
    }

    /// Brings this matrix into upper triangular form using Gaussian elimination.
    ///
    /// Row swaps are used when a pivot is (approximately) zero. If an odd number of swaps was
    /// needed, the first row is negated so that the product of the diagonal stays equal to the
    /// determinant of the original matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mut mat = Matrix::from_rows([
    ///     [2.0, -1.0, 1.0],
    ///     [1.0, 2.0, -1.0],
    ///     [2.0, -1.0, 1.0],
    /// ]);
    /// mat.triangulate();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [2.0, -1.0, 1.0],
    ///     [0.0, 2.5, -1.5],
    ///     [0.0, 0.0, 0.0],
    /// ]));
    /// ```
    pub fn triangulate(&mut self)
    where
        T: Float,
    {
        let eps = T::epsilon();
        let mut swaps = 0;
        for i in 0..Self::MIN_DIMENSION {
            if eq_within(self[(i, i)], T::ZERO, eps) {
                let Some(pivot_row) =
                    (i + 1..R).find(|&row| !eq_within(self[(row, i)], T::ZERO, eps))
                else {
                    continue;
                };
                log::trace!("zero pivot in column {i}, swapping rows {i} and {pivot_row}");
                self.swap_rows(i, pivot_row);
                swaps += 1;
            }

            let pivot = self[(i, i)];
            for row in i + 1..R {
                let coefficient = -(self[(row, i)] / pivot);
                for col in i..C {
                    self[(row, col)] = self[(row, col)] + coefficient * self[(i, col)];
                }
            }
        }

        if swaps % 2 == 1 {
            for col in 0..C {
                self[(0, col)] = -self[(0, col)];
            }
        }
    }

    /// Returns a copy of `self` in upper triangular form.
    ///
    /// See [`Matrix::triangulate`].
    pub fn triangulated(mut self) -> Self
    where
        T: Float,
    {
        self.triangulate();
        self
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                for col in 0..C {
                    list.entry(&self.0[(self.1, col)]);
                }
                list.finish()
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Framed, row-wise output.
///
/// Each element is left-aligned in a field of width 5 and printed with 6 decimal places, unless a
/// precision is given (`{:.2}`). Precision is ignored for integers.
///
/// ```
/// # use linear_algebra::*;
/// let mat = Matrix::from_rows([
///     [1.0, 2.0],
///     [3.0, 4.0],
///     [5.0, 6.0],
/// ]);
/// assert_eq!(format!("{mat:.1}"), "⎡1.0   2.0   ⎤\n⎢3.0   4.0   ⎥\n⎣5.0   6.0   ⎦");
/// assert_eq!(format!("{}", Matrix::from_rows([[1, 20]])), "[1     20    ]");
/// ```
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        for row in 0..R {
            let (open, close) = brackets(row, R);
            if row != 0 {
                writeln!(f)?;
            }
            write!(f, "{open}")?;
            for col in 0..C {
                write!(f, "{:<5.*} ", precision, self[(row, col)])?;
            }
            write!(f, "{close}")?;
        }
        Ok(())
    }
}

/// Returns the opening and closing bracket for row `row` of a matrix with `rows` rows.
pub(crate) fn brackets(row: usize, rows: usize) -> (char, char) {
    match (row, rows) {
        (_, 1) => ('[', ']'),
        (0, _) => ('⎡', '⎤'),
        (r, n) if r + 1 == n => ('⎣', '⎦'),
        _ => ('⎢', '⎥'),
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with it returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this.0[i][i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sum of the diagonal elements.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// assert_eq!(Matrix::from_diagonal([1, 2, 3]).trace(), 6);
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }

    /// Computes the determinant as the product of the diagonal of [`Matrix::triangulated`].
    ///
    /// Unlike [`determinant()`], this works for square matrices of any size, but only for float
    /// elements and only approximately.
    ///
    /// [`determinant()`]: Matrix::<T, 3, 3>::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 12.0, 6.0],
    ///     [7.0, 8.0, 9.0],
    /// ]);
    /// assert_approx_eq!(mat.triangular_determinant(), -84.0).abs(1e-9);
    /// assert_eq!(mat.determinant(), -84.0);
    /// ```
    pub fn triangular_determinant(&self) -> T
    where
        T: Float,
    {
        let triangular = self.triangulated();
        (0..N).fold(T::ONE, |acc, i| acc * triangular[(i, i)])
    }

    /// Returns the square matrix that remains after removing row `row` and column `col`.
    ///
    /// `M` must be `N - 1`. Callers are the size-specific `minor` methods.
    fn submatrix<const M: usize>(&self, row: usize, col: usize) -> Matrix<T, M, M>
    where
        T: Copy,
    {
        debug_assert_eq!(M + 1, N);
        assert!(
            row < N && col < N,
            "minor ({row}, {col}) out of bounds for {N}x{N} matrix"
        );
        Matrix::from_fn(|r, c| self[(r + usize::from(r >= row), c + usize::from(c >= col))])
    }
}

impl<T: Number> Matrix<T, 1, 1> {
    /// The determinant of a 1x1 matrix is its only element.
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Inverts this 1x1 matrix, or fails with [`Error::Singular`] if its element is zero.
    ///
    /// For integer matrices the division truncates, so the result is only exact for an element of
    /// 1 or -1.
    pub fn try_invert(&self) -> Result<Self> {
        if self.determinant() == T::ZERO {
            log::trace!("attempt to invert singular 1x1 matrix");
            return Err(Error::Singular);
        }
        Ok(Matrix([[T::ONE / self[(0, 0)]]]))
    }

    /// Panicking version of [`try_invert`](Self::try_invert).
    pub fn invert(&self) -> Self {
        match self.try_invert() {
            Ok(inverse) => inverse,
            Err(_) => panic!("attempt to invert a non-invertible matrix"),
        }
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// `ad - bc` for the matrix `[[a, b], [c, d]]`.
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }

    /// Rotation by `radians` in the clockwise direction, with Y pointing up.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (s, c) = (radians.sin(), radians.cos());
        Matrix([[c, -s], [s, c]])
    }

    /// Rotation by `radians` in the counterclockwise direction, the transpose of
    /// [`Matrix::rotation_clockwise`].
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_clockwise(radians).transpose()
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Determinant by the rule of Sarrus.
    pub fn determinant(&self) -> T {
        let [c0, c1, c2] = self.0;
        let diagonals = c0[0] * c1[1] * c2[2] + c1[0] * c2[1] * c0[2] + c2[0] * c0[1] * c1[2];
        let antidiagonals = c2[0] * c1[1] * c0[2] + c1[0] * c0[1] * c2[2] + c0[0] * c2[1] * c1[2];
        diagonals - antidiagonals
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = Matrix::from_rows([
    ///     [2, 6, -2, 1],
    ///     [3, -1, 5, -3],
    ///     [1, 7, 4, -1],
    ///     [2, 3, -3, 1],
    /// ]);
    /// assert_eq!(mat.determinant(), 3);
    /// ```
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| acc + self[(0, col)] * self.cofactor(0, col))
    }
}

macro_rules! square_impls {
    ($($n:literal => $m:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Returns the minor matrix obtained by removing row `row` and column `col`.
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is out of bounds.
                pub fn minor(&self, row: usize, col: usize) -> Matrix<T, $m, $m> {
                    self.submatrix(row, col)
                }

                /// Returns the cofactor of the element at `(row, col)`: the determinant of its
                /// [minor](Self::minor), negated if `row + col` is odd.
                pub fn cofactor(&self, row: usize, col: usize) -> T {
                    let det = self.minor(row, col).determinant();
                    if (row + col) % 2 == 0 {
                        det
                    } else {
                        -det
                    }
                }

                /// Returns the matrix of all [cofactors](Self::cofactor).
                pub fn cofactor_matrix(&self) -> Self {
                    Self::from_fn(|row, col| self.cofactor(row, col))
                }

                /// Returns the adjugate, the transposed [cofactor matrix](Self::cofactor_matrix).
                pub fn adjugate(&self) -> Self {
                    self.cofactor_matrix().transpose()
                }

                /// Inverts this matrix, or fails with [`Error::Singular`] if its determinant is
                /// zero.
                ///
                /// The inverse is computed as the [adjugate](Self::adjugate) divided by the
                /// determinant. For integer matrices the division truncates, so the result is
                /// only exact for matrices with a determinant of 1 or -1.
                pub fn try_invert(&self) -> Result<Self> {
                    let det = self.determinant();
                    if det == T::ZERO {
                        log::trace!("attempt to invert singular {}x{} matrix", $n, $n);
                        return Err(Error::Singular);
                    }
                    Ok(self.adjugate().map(|elem| elem / det))
                }

                /// Inverts this matrix.
                ///
                /// # Panics
                ///
                /// This method will panic if `self` is not invertible (ie. if its
                /// [`determinant()`](Self::determinant) is zero). Use
                /// [`try_invert`](Self::try_invert) to handle that case.
                pub fn invert(&self) -> Self {
                    match self.try_invert() {
                        Ok(inverse) => inverse,
                        Err(_) => panic!("attempt to invert a non-invertible matrix"),
                    }
                }
            }
        )+
    };
}
square_impls!(2 => 1, 3 => 2, 4 => 3);

macro_rules! embed_impls {
    ($($n:literal => $m:literal),+) => {
        $(
            impl<T: Zero + One + Copy> Matrix<T, $n, $n> {
                /// Embeds this matrix into a larger one by inserting a row at index `row` and a
                /// column at index `col`.
                ///
                /// The inserted row and column are zero, except for a 1 where they intersect.
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is greater than the dimension of `self`.
                pub fn embed(&self, row: usize, col: usize) -> Matrix<T, $m, $m> {
                    assert!(
                        row <= $n && col <= $n,
                        "insertion position ({row}, {col}) out of bounds for {}x{} matrix",
                        $n,
                        $n,
                    );
                    Matrix::from_fn(|r, c| match (r == row, c == col) {
                        (true, true) => T::ONE,
                        (true, false) | (false, true) => T::ZERO,
                        (false, false) => {
                            self[(r - usize::from(r > row), c - usize::from(c > col))]
                        }
                    })
                }

                /// Embeds this matrix into the upper left corner of a larger one, with 1 in the
                /// new lower right corner.
                ///
                /// This turns a linear transform into the equivalent transform on homogeneous
                /// coordinates.
                pub fn to_homogeneous(&self) -> Matrix<T, $m, $m> {
                    self.embed($n, $n)
                }
            }
        )+
    };
}
embed_impls!(2 => 3, 3 => 4);

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, vec2, vec3, vec4};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn debug_fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [
        0,
        1,
    ],
    [
        2,
        3,
    ],
]
"
            .trim()
        );
    }

    #[test]
    fn display_fmt() {
        let mat = Matrix::from_rows([[1.0, -2.0], [0.5, 4.0]]);
        assert_eq!(
            format!("{mat}"),
            "⎡1.000000 -2.000000 ⎤\n⎣0.500000 4.000000 ⎦"
        );
        assert_eq!(format!("{:.0}", Mat1f::IDENTITY), "[1     ]");
        assert_eq!(
            format!("{:.0}", Mat3f::IDENTITY),
            "⎡1     0     0     ⎤\n⎢0     1     0     ⎥\n⎣0     0     1     ⎦"
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[rustfmt::skip]
    #[test]
    fn swap() {
        let mat = Matrix::from_rows([
            [3, 2, 1],
            [6, 5, 4],
            [9, 8, 7],
            [1, 2, 3],
        ]);
        assert_eq!(mat.swapped_rows(0, 2), Matrix::from_rows([
            [9, 8, 7],
            [6, 5, 4],
            [3, 2, 1],
            [1, 2, 3],
        ]));

        let mut mat = Matrix::from_rows([
            [1, 2, 3, 3],
            [4, 5, 6, 4],
            [7, 8, 9, 0],
        ]);
        mat.swap_columns(0, 2);
        assert_eq!(mat, Matrix::from_rows([
            [3, 2, 1, 3],
            [6, 5, 4, 4],
            [9, 8, 7, 0],
        ]));
        assert_eq!(mat.swapped_columns(2, 0).swapped_columns(1, 1).row(0), vec4(1, 2, 3, 3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn swap_out_of_bounds() {
        Mat2f::IDENTITY.swapped_rows(0, 2);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
        assert_eq!(mat.mul_col(vec), out);
        assert_eq!(mat.mul_row(vec), [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);
    }

    #[rustfmt::skip]
    #[test]
    fn mat_mat_mul() {
        let a = Matrix::from_rows([
            [1, 2, 3, 3],
            [4, 5, 6, 4],
            [7, 8, 9, 0],
        ]);
        let b = Matrix::from_rows([
            [3, 2, 1],
            [6, 5, 4],
            [9, 8, 7],
            [1, 2, 3],
        ]);
        assert_eq!(a * b, Matrix::from_rows([
            [45, 42, 39],
            [100, 89, 78],
            [150, 126, 102],
        ]));
        assert_eq!(b * a, Matrix::from_rows([
            [18, 24, 30, 17],
            [54, 69, 84, 38],
            [90, 114, 138, 59],
            [30, 36, 42, 11],
        ]));
    }

    #[rustfmt::skip]
    #[test]
    fn scalar_ops() {
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0, 3.0],
            [4.0, 5.0, 6.0, 4.0],
            [7.0, 8.0, 9.0, 0.0],
        ]);
        let doubled = Matrix::from_rows([
            [2.0, 4.0, 6.0, 6.0],
            [8.0, 10.0, 12.0, 8.0],
            [14.0, 16.0, 18.0, 0.0],
        ]);
        assert_eq!(mat * 2.0, doubled);
        assert_eq!(mat + mat, doubled);
        assert_eq!(doubled - mat, mat);
        assert_eq!(doubled / 2.0, mat);
        assert_eq!(doubled.try_div(2.0), Ok(mat));
        assert_eq!(doubled.try_div(0.0), Err(Error::ZeroDivisor));
        assert_eq!(-mat + mat, Mat3x4::ZERO);

        let mut acc = mat;
        acc += mat;
        assert_eq!(acc, doubled);
        acc -= mat;
        assert_eq!(acc, mat);
        acc *= 2.0;
        assert_eq!(acc, doubled);
        acc /= 2.0;
        assert_eq!(acc, mat);
    }

    #[test]
    fn predicates() {
        assert!(Mat3f::ZERO.is_zero());
        assert!(!Mat3f::IDENTITY.is_zero());
        assert!(Mat3f::IDENTITY.is_diagonal());
        assert!(Mat3f::ZERO.is_diagonal());
        assert!(Matrix::from_rows([[1.0, 1e-7], [0.0, 2.0]]).is_diagonal());
        assert!(!Matrix::from_rows([[1.0, 1e-3], [0.0, 2.0]]).is_diagonal());
        assert!(!Mat2x3::<f32>::IDENTITY.is_diagonal());
        assert!(Mat4f::ZERO.is_square());
        assert!(!Mat4x2::<f32>::ZERO.is_square());
    }

    #[rustfmt::skip]
    #[test]
    fn triangulate() {
        let mat = Matrix::from_rows([
            [2.0, -1.0, 1.0],
            [1.0, 2.0, -1.0],
            [2.0, -1.0, 1.0],
        ]);
        assert_eq!(mat.triangulated(), Matrix::from_rows([
            [2.0, -1.0, 1.0],
            [0.0, 2.5, -1.5],
            [0.0, 0.0, 0.0],
        ]));
        assert_eq!(mat.triangular_determinant(), 0.0);

        // Zero pivot, one row swap.
        let mat = Matrix::from_rows([
            [0.0, 1.0],
            [2.0, 3.0],
        ]);
        assert_eq!(mat.triangulated(), Matrix::from_rows([
            [-2.0, -3.0],
            [0.0, 1.0],
        ]));
        assert_eq!(mat.triangular_determinant(), mat.determinant());

        // Non-square.
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 7.0],
        ]);
        assert_eq!(mat.triangulated(), Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 0.0, 1.0],
        ]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        assert_eq!(Matrix::from_rows([[3, 2], [6, 5]]).determinant(), 3);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [2.0, 6.0, -2.0, 1.0],
            [3.0, -1.0, 5.0, -3.0],
            [1.0, 7.0, 4.0, -1.0],
            [2.0, 3.0, -3.0, 1.0],
        ]);
        assert_eq!(testmat.determinant(), 3.0);
        assert_approx_eq!(testmat.triangular_determinant(), 3.0).abs(1e-9);
    }

    #[rustfmt::skip]
    #[test]
    fn minors_and_cofactors() {
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 12, 6],
            [7, 8, 9],
        ]);
        assert_eq!(mat.minor(0, 0), Matrix::from_rows([[12, 6], [8, 9]]));
        assert_eq!(mat.minor(1, 1), Matrix::from_rows([[1, 3], [7, 9]]));
        assert_eq!(mat.minor(2, 2), Matrix::from_rows([[1, 2], [4, 12]]));
        assert_eq!(mat.cofactor(0, 0), 60);
        assert_eq!(mat.cofactor(0, 1), 6);
        assert_eq!(mat.cofactor_matrix().row(0), vec3(60, 6, -52));
        assert_eq!(mat.adjugate().column(0), vec3(60, 6, -52));
    }

    #[rustfmt::skip]
    #[test]
    fn invert() {
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 12.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        let expected = Matrix::from_rows([
            [-5.0 / 7.0, -1.0 / 14.0, 2.0 / 7.0],
            [-1.0 / 14.0, 1.0 / 7.0, -1.0 / 14.0],
            [13.0 / 21.0, -1.0 / 14.0, -1.0 / 21.0],
        ]);
        assert_approx_eq!(mat.invert(), expected).abs(1e-12);
        assert_approx_eq!(mat * mat.invert(), Mat3::IDENTITY).abs(1e-12);

        assert_eq!(Mat1::<i32>::IDENTITY.invert(), Mat1::<i32>::IDENTITY);
        assert_eq!(Mat2::<i32>::IDENTITY.invert(), Mat2::<i32>::IDENTITY);
        assert_eq!(Mat4f::IDENTITY.invert(), Mat4f::IDENTITY);

        let singular = Matrix::from_rows([
            [2.0, -1.0, 1.0],
            [1.0, 2.0, -1.0],
            [2.0, -1.0, 1.0],
        ]);
        assert_eq!(singular.try_invert(), Err(Error::Singular));
        assert_eq!(Mat1f::ZERO.try_invert(), Err(Error::Singular));
        assert_eq!(Mat4f::ZERO.try_invert(), Err(Error::Singular));

        // integer inverses truncate
        assert_eq!(Mat1::<i32>::from_rows([[2]]).try_invert(), Ok(Mat1::from_rows([[0]])));
        assert_eq!(Mat1::<i32>::from_rows([[-1]]).try_invert(), Ok(Mat1::from_rows([[-1]])));
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular() {
        Mat2f::ZERO.invert();
    }

    #[test]
    fn invert_random() {
        let mut rng = fastrand::Rng::with_seed(0x5eed_1a6e_b7a5_0001);
        for _ in 0..100 {
            let mat = Mat4::<f64>::from_fn(|_, _| rng.f64() * 20.0 - 10.0);
            if mat.determinant().abs() < 1.0 {
                continue;
            }
            assert_approx_eq!(mat * mat.invert(), Mat4::IDENTITY).abs(1e-8);
            assert_approx_eq!(mat.invert() * mat, Mat4::IDENTITY).abs(1e-8);
            assert_approx_eq!(mat.triangular_determinant(), mat.determinant())
                .abs(1e-6)
                .rel(1e-6);
        }
    }

    #[rustfmt::skip]
    #[test]
    fn embed() {
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(mat.to_homogeneous(), Matrix::from_rows([
            [1, 2, 3, 0],
            [4, 5, 6, 0],
            [7, 8, 9, 0],
            [0, 0, 0, 1],
        ]));
        assert_eq!(mat.embed(1, 0), Matrix::from_rows([
            [0, 1, 2, 3],
            [1, 0, 0, 0],
            [0, 4, 5, 6],
            [0, 7, 8, 9],
        ]));
        assert_eq!(Mat2::<i32>::IDENTITY.to_homogeneous(), Mat3::IDENTITY);

        // Homogeneous transforms leave the extra coordinate alone.
        let scale = Matrix::from_diagonal([2, 3]).to_homogeneous();
        assert_eq!(scale * vec2(1, 1).to_homogeneous(), vec3(2, 3, 1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn embed_out_of_bounds() {
        Mat2f::IDENTITY.embed(3, 0);
    }

    #[test]
    fn approx_eq() {
        let a = Mat2f::IDENTITY;
        let b = Matrix::from_rows([[1.0 + 1e-7, 0.0], [0.0, 1.0]]);
        assert!(a.eq_approx(&b));
        assert!(!a.eq_within(&b, 1e-8));
        assert!(!a.eq_approx(&Matrix::from_rows([[1.0, 0.0], [0.01, 1.0]])));
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.invert());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, ccw.invert());

        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert()).abs(1e-6);
    }
}
