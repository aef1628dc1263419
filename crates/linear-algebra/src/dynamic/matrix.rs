use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

use crate::{
    approx::{eq_within, ApproxEq},
    error::Shape,
    matrix::brackets,
    validate::{validate_divisor, validate_matrix_sizes, validate_square},
    DVector, Error, Float, Matrix, Number, One, Result, Zero,
};

/// A matrix with dimensions determined at run time.
///
/// Elements are stored in row-major order. Like [`Matrix`], elements are indexed with
/// `(row, column)` tuples.
///
/// Operations that require specific dimensions check them and fail with an [`Error`] describing
/// the mismatch.
///
/// # Examples
///
/// ```
/// # use linear_algebra::*;
/// let a = DMatrix::from_rows(vec![
///     vec![1.0, 2.0],
///     vec![3.0, 4.0],
/// ])?;
/// let inv = a.try_invert()?;
/// assert!(a.try_mul(&inv)?.eq_approx(&DMatrix::identity(2))?);
///
/// let wide = DMatrix::<f64>::zeros(2, 3);
/// assert!(wide.try_invert().is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> DMatrix<T> {
    /// Creates a matrix by invoking a closure with the position (row and column) of each element.
    pub fn from_fn<F>(rows: usize, cols: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(cb(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a `rows x cols` matrix with every element set to 0.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            rows,
            cols,
            data: vec![T::ZERO; rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(n, n, |row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// Fails with [`Error::Empty`] if no rows are given or every row is empty, and with
    /// [`Error::Ragged`] if the rows have different lengths (including an empty row next to
    /// non-empty ones).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = DMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!((mat.rows(), mat.cols()), (2, 3));
    /// assert_eq!(mat[(1, 0)], 4);
    ///
    /// assert_eq!(
    ///     DMatrix::from_rows(vec![vec![1, 2], vec![3]]),
    ///     Err(Error::Ragged { expected: 2, found: 1, index: 1 }),
    /// );
    /// assert_eq!(DMatrix::<i32>::from_rows(vec![]), Err(Error::Empty));
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        if rows.iter().all(Vec::is_empty) {
            return Err(Error::Empty);
        }
        let cols = rows[0].len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::Ragged {
                expected: cols,
                found: row.len(),
                index,
            });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a matrix whose rows are the given vectors.
    pub fn from_row_vectors(rows: &[DVector<T>]) -> Result<Self>
    where
        T: Clone,
    {
        Self::from_rows(rows.iter().map(|row| row.as_slice().to_vec()).collect())
    }

    /// Creates a matrix whose columns are the given vectors.
    pub fn from_column_vectors(columns: &[DVector<T>]) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self::from_row_vectors(columns)?.transpose())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the `(rows, columns)` pair of this matrix.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape(self.rows, self.cols)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns row `row` as a [`DVector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> DVector<T>
    where
        T: Clone,
    {
        self.row_slice(row).to_vec().into()
    }

    /// Returns column `col` as a [`DVector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> DVector<T>
    where
        T: Clone,
    {
        assert!(
            col < self.cols,
            "column index {col} out of bounds for matrix with {} columns",
            self.cols
        );
        (0..self.rows)
            .map(|row| self[(row, col)].clone())
            .collect::<Vec<_>>()
            .into()
    }

    fn row_slice(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row index {row} out of bounds for matrix with {} rows",
            self.rows
        );
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut elems: Vec<Option<T>> = self.data.into_iter().map(Some).collect();
        let mut data = Vec::with_capacity(elems.len());
        for col in 0..cols {
            for row in 0..rows {
                if let Some(elem) = elems[row * cols + col].take() {
                    data.push(elem);
                }
            }
        }
        Self {
            rows: cols,
            cols: rows,
            data,
        }
    }

    /// Transposes a square matrix in place.
    ///
    /// Fails with [`Error::NotSquare`] for non-square matrices, leaving them unchanged.
    pub fn transpose_in_place(&mut self) -> Result<()> {
        validate_square("Transposition", self.shape())?;
        for row in 0..self.rows {
            for col in row + 1..self.cols {
                self.data.swap(row * self.cols + col, col * self.cols + row);
            }
        }
        Ok(())
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.rows && b < self.rows,
            "row indices {a} and {b} out of bounds for matrix with {} rows",
            self.rows
        );
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Swaps columns `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        assert!(
            a < self.cols && b < self.cols,
            "column indices {a} and {b} out of bounds for matrix with {} columns",
            self.cols
        );
        for row in 0..self.rows {
            self.data.swap(row * self.cols + a, row * self.cols + b);
        }
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns `true` if every element is exactly zero.
    pub fn is_zero(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.data.iter().all(|elem| *elem == T::ZERO)
    }

    /// Returns `true` if the matrix is square and every element outside of its diagonal is within
    /// [`Float::epsilon`] of zero.
    pub fn is_diagonal(&self) -> bool
    where
        T: Float,
    {
        self.is_square()
            && (0..self.rows).all(|row| {
                (0..self.cols).all(|col| {
                    row == col || eq_within(self[(row, col)], T::ZERO, T::epsilon())
                })
            })
    }

    /// Returns whether every element of `self` differs from the one in `other` by strictly less
    /// than `eps`.
    ///
    /// Fails with [`Error::MatrixSizeMismatch`] if the matrices have different shapes.
    pub fn eq_within(&self, other: &Self, eps: T) -> Result<bool>
    where
        T: Float,
    {
        validate_matrix_sizes("Equalization", self.shape(), other.shape())?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| eq_within(a, b, eps)))
    }

    /// Like [`DMatrix::eq_within`], using the configured tolerance ([`Float::epsilon`]).
    pub fn eq_approx(&self, other: &Self) -> Result<bool>
    where
        T: Float,
    {
        self.eq_within(other, T::epsilon())
    }

    /// Element-wise addition.
    pub fn try_add(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        self.zip_with("Matrix addition", other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    pub fn try_sub(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        self.zip_with("Matrix subtraction", other, |a, b| a - b)
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

    /// Divides each element by `divisor`, or fails with [`Error::ZeroDivisor`] if `divisor` is
    /// within [`Float::epsilon`] of zero.
    pub fn try_div(&self, divisor: T) -> Result<Self>
    where
        T: Float,
    {
        validate_divisor(divisor)?;
        Ok(self.map(|elem| elem / divisor))
    }

    /// Computes the matrix product `self * other`.
    ///
    /// Fails with [`Error::ProductShape`] unless the column count of `self` equals the row count
    /// of `other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self>
    where
        T: Number,
    {
        if self.cols != other.rows {
            return Err(Error::ProductShape {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self::from_fn(self.rows, other.cols, |i, j| {
            (0..self.cols).fold(T::ZERO, |acc, k| acc + self[(i, k)] * other[(k, j)])
        }))
    }

    /// Computes the product of `self` and the vector-column `v` (`self * v`).
    ///
    /// Fails with [`Error::ColumnProductShape`] unless the column count of `self` equals the
    /// length of `v`.
    pub fn try_mul_col(&self, v: &DVector<T>) -> Result<DVector<T>>
    where
        T: Number,
    {
        if self.cols != v.len() {
            return Err(Error::ColumnProductShape {
                width: self.cols,
                len: v.len(),
            });
        }
        Ok((0..self.rows)
            .map(|row| {
                (0..self.cols).fold(T::ZERO, |acc, col| acc + self[(row, col)] * v[col])
            })
            .collect::<Vec<_>>()
            .into())
    }

    /// Computes the product of the vector-row `v` and `self` (`v * self`).
    ///
    /// Fails with [`Error::RowProductShape`] unless the row count of `self` equals the length of
    /// `v`.
    pub fn try_mul_row(&self, v: &DVector<T>) -> Result<DVector<T>>
    where
        T: Number,
    {
        if self.rows != v.len() {
            return Err(Error::RowProductShape {
                height: self.rows,
                len: v.len(),
            });
        }
        Ok((0..self.cols)
            .map(|col| {
                (0..self.rows).fold(T::ZERO, |acc, row| acc + v[row] * self[(row, col)])
            })
            .collect::<Vec<_>>()
            .into())
    }

    /// Brings this matrix into upper triangular form using Gaussian elimination.
    ///
    /// This works like [`Matrix::triangulate`]: zero pivots are replaced by swapping in a lower
    /// row, and the first row is negated after an odd number of swaps.
    pub fn triangulate(&mut self)
    where
        T: Float,
    {
        let eps = T::epsilon();
        let mut swaps = 0;
        for i in 0..self.rows.min(self.cols) {
            if eq_within(self[(i, i)], T::ZERO, eps) {
                let Some(pivot_row) =
                    (i + 1..self.rows).find(|&row| !eq_within(self[(row, i)], T::ZERO, eps))
                else {
                    continue;
                };
                log::trace!("zero pivot in column {i}, swapping rows {i} and {pivot_row}");
                self.swap_rows(i, pivot_row);
                swaps += 1;
            }

            let pivot = self[(i, i)];
            for row in i + 1..self.rows {
                let coefficient = -(self[(row, i)] / pivot);
                for col in i..self.cols {
                    self[(row, col)] = self[(row, col)] + coefficient * self[(i, col)];
                }
            }
        }

        if swaps % 2 == 1 {
            for elem in &mut self.data[..self.cols] {
                *elem = -*elem;
            }
        }
    }

    /// Returns a copy of `self` in upper triangular form.
    pub fn triangulated(mut self) -> Self
    where
        T: Float,
    {
        self.triangulate();
        self
    }

    /// Computes the determinant as the product of the diagonal of [`DMatrix::triangulated`].
    ///
    /// Fails with [`Error::NotSquare`] for non-square matrices.
    pub fn determinant(&self) -> Result<T>
    where
        T: Float,
    {
        validate_square("Determinant calculation", self.shape())?;
        let triangular = self.clone().triangulated();
        Ok((0..self.rows).fold(T::ONE, |acc, i| acc * triangular[(i, i)]))
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// This is exact for integer elements, but takes time factorial in the size of the matrix.
    /// The determinant of the empty 0x0 matrix is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_algebra::*;
    /// let mat = DMatrix::from_rows(vec![
    ///     vec![1, 4, 3, 6, 6],
    ///     vec![4, 9, 8, 9, 4],
    ///     vec![4, 6, 4, 2, 3],
    ///     vec![3, 5, 5, 7, 1],
    ///     vec![3, 3, 9, 6, 5],
    /// ])?;
    /// assert_eq!(mat.cofactor_determinant()?, 1616);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cofactor_determinant(&self) -> Result<T>
    where
        T: Number,
    {
        validate_square("Determinant calculation", self.shape())?;
        Ok(self.expand_determinant())
    }

    /// Cofactor expansion of a matrix known to be square.
    fn expand_determinant(&self) -> T
    where
        T: Number,
    {
        let m = |row, col| self[(row, col)];
        match self.rows {
            0 => T::ONE,
            1 => m(0, 0),
            2 => m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
            3 => {
                m(0, 0) * m(1, 1) * m(2, 2)
                    + m(0, 1) * m(1, 2) * m(2, 0)
                    + m(0, 2) * m(1, 0) * m(2, 1)
                    - m(0, 2) * m(1, 1) * m(2, 0)
                    - m(0, 0) * m(1, 2) * m(2, 1)
                    - m(0, 1) * m(1, 0) * m(2, 2)
            }
            n => (0..n).fold(T::ZERO, |acc, col| {
                acc + m(0, col) * self.square_cofactor(0, col)
            }),
        }
    }

    fn square_minor(&self, row: usize, col: usize) -> Self
    where
        T: Copy,
    {
        assert!(
            row < self.rows && col < self.cols,
            "minor ({row}, {col}) out of bounds for {} matrix",
            self.shape()
        );
        Self::from_fn(self.rows - 1, self.cols - 1, |r, c| {
            self[(r + usize::from(r >= row), c + usize::from(c >= col))]
        })
    }

    fn square_cofactor(&self, row: usize, col: usize) -> T
    where
        T: Number,
    {
        let det = self.square_minor(row, col).expand_determinant();
        if (row + col) % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Returns the minor matrix obtained by removing row `row` and column `col`.
    ///
    /// Fails with [`Error::NotSquare`] for non-square matrices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self>
    where
        T: Copy,
    {
        validate_square("Minor calculation", self.shape())?;
        Ok(self.square_minor(row, col))
    }

    /// Returns the cofactor of the element at `(row, col)`: the determinant of its
    /// [minor](Self::minor), negated if `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T>
    where
        T: Number,
    {
        validate_square("Cofactor calculation", self.shape())?;
        Ok(self.square_cofactor(row, col))
    }

    /// Returns the matrix of all [cofactors](Self::cofactor).
    pub fn cofactor_matrix(&self) -> Result<Self>
    where
        T: Number,
    {
        validate_square("Cofactor calculation", self.shape())?;
        Ok(Self::from_fn(self.rows, self.cols, |row, col| {
            self.square_cofactor(row, col)
        }))
    }

    /// Inverts this matrix.
    ///
    /// The inverse is the transposed cofactor matrix divided by the determinant, which is
    /// computed by cofactor expansion along the first row. Fails with [`Error::NotSquare`] for
    /// non-square matrices and with [`Error::Singular`] if the determinant is zero.
    ///
    /// For integer matrices the division truncates, so the result is only exact for matrices with
    /// a determinant of 1 or -1.
    pub fn try_invert(&self) -> Result<Self>
    where
        T: Number,
    {
        validate_square("Matrix inversion", self.shape())?;
        let cofactors = self.cofactor_matrix()?;
        let det = (0..self.cols).fold(T::ZERO, |acc, col| {
            acc + self[(0, col)] * cofactors[(0, col)]
        });
        if det == T::ZERO {
            log::trace!("attempt to invert singular {} matrix", self.shape());
            return Err(Error::Singular);
        }
        Ok(cofactors.transpose().map(|elem| elem / det))
    }

    fn map<F>(&self, f: F) -> Self
    where
        T: Copy,
        F: FnMut(T) -> T,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    fn zip_with<F>(&self, op: &'static str, other: &Self, mut f: F) -> Result<Self>
    where
        T: Copy,
        F: FnMut(T, T) -> T,
    {
        validate_matrix_sizes(op, self.shape(), other.shape())?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

impl<T> Index<(usize, usize)> for DMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!(
                "index ({row}, {col}) out of bounds for {} matrix",
                self.shape()
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for DMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let shape = self.shape();
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => panic!("index ({row}, {col}) out of bounds for {shape} matrix"),
        }
    }
}

/// Scaling by a scalar.
impl<T: Number> Mul<T> for DMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Copy, const R: usize, const C: usize> From<Matrix<T, R, C>> for DMatrix<T> {
    fn from(value: Matrix<T, R, C>) -> Self {
        Self::from_fn(R, C, |row, col| value[(row, col)])
    }
}

/// Fails with [`Error::DimensionMismatch`] unless the matrix has exactly `R` rows and `C`
/// columns.
impl<T: Copy, const R: usize, const C: usize> TryFrom<DMatrix<T>> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(value: DMatrix<T>) -> Result<Self> {
        if value.shape() != Shape(R, C) {
            return Err(Error::DimensionMismatch {
                expected: Shape(R, C),
                found: value.shape(),
            });
        }
        Ok(Matrix::from_fn(|row, col| value[(row, col)]))
    }
}

impl<T> ApproxEq for DMatrix<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape() && self.data[..].abs_diff_eq(&other.data[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape() && self.data[..].rel_diff_eq(&other.data[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.shape() == other.shape()
            && self.data[..].ulps_diff_eq(&other.data[..], ulps_tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for DMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|row| self.row_slice(row)))
            .finish()
    }
}

/// Framed, row-wise output, in the same layout as [`Matrix`].
impl<T: fmt::Display> fmt::Display for DMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        for row in 0..self.rows {
            let (open, close) = brackets(row, self.rows);
            if row != 0 {
                writeln!(f)?;
            }
            write!(f, "{open}")?;
            for elem in self.row_slice(row) {
                write!(f, "{:<5.*} ", precision, elem)?;
            }
            write!(f, "{close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Mat2, Mat3};

    use super::*;

    fn mat<T, const C: usize>(rows: impl IntoIterator<Item = [T; C]>) -> DMatrix<T> {
        let rows = rows.into_iter().map(Vec::from).collect();
        match DMatrix::from_rows(rows) {
            Ok(mat) => mat,
            Err(e) => panic!("invalid test matrix: {e}"),
        }
    }

    fn a() -> DMatrix<i32> {
        mat([[1, 2, 3, 3], [4, 5, 6, 4], [7, 8, 9, 0]])
    }

    fn b() -> DMatrix<i32> {
        mat([[3, 2, 1], [6, 5, 4], [9, 8, 7], [1, 2, 3]])
    }

    #[test]
    fn construction() {
        assert_eq!(DMatrix::<i32>::identity(2), mat([[1, 0], [0, 1]]));
        assert_eq!(DMatrix::<i32>::zeros(1, 2), mat([[0, 0]]));
        assert_eq!(
            DMatrix::<i32>::from_rows(vec![vec![]]),
            Err(Error::Empty)
        );
        assert_eq!(
            DMatrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]),
            Err(Error::Ragged {
                expected: 2,
                found: 1,
                index: 2,
            })
        );

        let rows = [DVector::from(vec![1, 2]), DVector::from(vec![3, 4])];
        assert_eq!(
            DMatrix::from_row_vectors(&rows),
            Ok(mat([[1, 2], [3, 4]]))
        );
        assert_eq!(
            DMatrix::from_column_vectors(&rows),
            Ok(mat([[1, 3], [2, 4]]))
        );
        assert_eq!(DMatrix::<i32>::from_row_vectors(&[]), Err(Error::Empty));
    }

    #[test]
    fn empty_rows() {
        assert_eq!(
            DMatrix::<i32>::from_rows(vec![vec![], vec![]]),
            Err(Error::Empty)
        );
        assert_eq!(
            DMatrix::from_rows(vec![vec![], vec![1]]),
            Err(Error::Ragged {
                expected: 0,
                found: 1,
                index: 1,
            })
        );
        assert_eq!(
            DMatrix::from_rows(vec![vec![1], vec![]]),
            Err(Error::Ragged {
                expected: 1,
                found: 0,
                index: 1,
            })
        );
    }

    #[test]
    fn access() {
        let m = b();
        assert_eq!(m.shape(), Shape(4, 3));
        assert_eq!(m[(3, 2)], 3);
        assert_eq!(m.get(4, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(1), DVector::from(vec![6, 5, 4]));
        assert_eq!(m.column(1), DVector::from(vec![2, 5, 8, 2]));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        let _ = b()[(0, 3)];
    }

    #[test]
    fn transpose() {
        assert_eq!(
            mat([[1, 2, 3], [4, 5, 6]]).transpose(),
            mat([[1, 4], [2, 5], [3, 6]])
        );
        assert_eq!(b().transpose().transpose(), b());

        let mut square = mat([[1, 2], [3, 4]]);
        square.transpose_in_place().unwrap();
        assert_eq!(square, mat([[1, 3], [2, 4]]));

        let mut wide = a();
        assert_eq!(
            wide.transpose_in_place(),
            Err(Error::NotSquare {
                op: "Transposition",
                shape: Shape(3, 4),
            })
        );
        assert_eq!(wide, a());
    }

    #[test]
    fn swap() {
        let mut m = b();
        m.swap_rows(0, 2);
        assert_eq!(m, mat([[9, 8, 7], [6, 5, 4], [3, 2, 1], [1, 2, 3]]));

        let mut m = a();
        m.swap_columns(0, 2);
        assert_eq!(m, mat([[3, 2, 1, 3], [6, 5, 4, 4], [9, 8, 7, 0]]));
    }

    #[test]
    fn arithmetic() {
        let doubled = mat([[2, 4, 6, 6], [8, 10, 12, 8], [14, 16, 18, 0]]);
        assert_eq!(a() * 2, doubled);
        assert_eq!(a().try_add(&a()), Ok(doubled.clone()));
        assert_eq!(doubled.try_sub(&a()), Ok(a()));

        let mut acc = a();
        acc.try_add_assign(&a()).unwrap();
        assert_eq!(acc, doubled);
        assert_eq!(
            acc.try_sub_assign(&b()),
            Err(Error::MatrixSizeMismatch {
                op: "Matrix subtraction",
                left: Shape(3, 4),
                right: Shape(4, 3),
            })
        );
        assert_eq!(acc, doubled);

        let halved = mat([[0.5, 1.0]]);
        assert_eq!(mat([[1.0, 2.0]]).try_div(2.0), Ok(halved));
        assert_eq!(mat([[1.0, 2.0]]).try_div(1e-7), Err(Error::ZeroDivisor));
    }

    #[test]
    fn product() {
        assert_eq!(
            a().try_mul(&b()),
            Ok(mat([[45, 42, 39], [100, 89, 78], [150, 126, 102]]))
        );
        assert_eq!(
            b().try_mul(&a()),
            Ok(mat([
                [18, 24, 30, 17],
                [54, 69, 84, 38],
                [90, 114, 138, 59],
                [30, 36, 42, 11],
            ]))
        );

        let tall = mat([[1, 2], [3, 4], [5, 6], [7, 8]]);
        let err = tall.try_mul(&a()).unwrap_err();
        assert_eq!(
            err,
            Error::ProductShape {
                left: Shape(4, 2),
                right: Shape(3, 4),
            }
        );
        assert_eq!(
            err.to_string(),
            "Matrix product denied: matrices with sizes 4x2 and 3x4"
        );

        let v = DVector::from(vec![1, 2, 4]);
        assert_eq!(b().try_mul_col(&v), Ok(DVector::from(vec![11, 32, 53, 17])));
        assert_eq!(
            a().try_mul_row(&v),
            Ok(DVector::from(vec![37, 44, 51, 11]))
        );
        assert!(a().try_mul_col(&v).is_err());
    }

    #[test]
    fn triangulate() {
        let m = mat([[2.0, -1.0, 1.0], [1.0, 2.0, -1.0], [2.0, -1.0, 1.0]]);
        assert_eq!(
            m.clone().triangulated(),
            mat([[2.0, -1.0, 1.0], [0.0, 2.5, -1.5], [0.0, 0.0, 0.0]])
        );
        assert_eq!(m.determinant(), Ok(0.0));
        assert_eq!(m.cofactor_determinant(), Ok(0.0));

        assert_eq!(
            mat([[0.0, 1.0], [2.0, 3.0]]).triangulated(),
            mat([[-2.0, -3.0], [0.0, 1.0]])
        );
    }

    #[test]
    fn determinant() {
        assert_eq!(mat([[3, 2], [6, 5]]).cofactor_determinant(), Ok(3));
        assert_eq!(
            mat([[1, 2, 3], [4, 12, 6], [7, 8, 9]]).cofactor_determinant(),
            Ok(-84)
        );
        assert_eq!(
            mat([[2, 6, -2, 1], [3, -1, 5, -3], [1, 7, 4, -1], [2, 3, -3, 1]])
                .cofactor_determinant(),
            Ok(3)
        );

        let five = mat([
            [1.0, 4.0, 3.0, 6.0, 6.0],
            [4.0, 9.0, 8.0, 9.0, 4.0],
            [4.0, 6.0, 4.0, 2.0, 3.0],
            [3.0, 5.0, 5.0, 7.0, 1.0],
            [3.0, 3.0, 9.0, 6.0, 5.0],
        ]);
        assert_eq!(five.cofactor_determinant(), Ok(1616.0));
        assert_approx_eq!(five.determinant().unwrap(), 1616.0).abs(1e-9);

        assert_eq!(
            a().cofactor_determinant(),
            Err(Error::NotSquare {
                op: "Determinant calculation",
                shape: Shape(3, 4),
            })
        );
        assert!(mat([[1.0, 2.0]]).determinant().is_err());
    }

    #[test]
    fn determinant_random() {
        let mut rng = fastrand::Rng::with_seed(0x1a9e_d37e_4111_0002);
        for n in 1..=6 {
            let m = DMatrix::from_fn(n, n, |_, _| rng.f64() * 10.0 - 5.0);
            let cofactor = m.cofactor_determinant().unwrap();
            assert_approx_eq!(m.determinant().unwrap(), cofactor)
                .abs(1e-6)
                .rel(1e-6);
        }
    }

    #[test]
    fn minors_and_cofactors() {
        let m = mat([[1, 2, 3], [4, 12, 6], [7, 8, 9]]);
        assert_eq!(m.minor(0, 0), Ok(mat([[12, 6], [8, 9]])));
        assert_eq!(m.minor(1, 1), Ok(mat([[1, 3], [7, 9]])));
        assert_eq!(m.minor(2, 2), Ok(mat([[1, 2], [4, 12]])));
        assert_eq!(m.cofactor(0, 0), Ok(60));
        assert_eq!(m.cofactor(0, 1), Ok(6));
        assert_eq!(
            m.cofactor_matrix().map(|c| c.row(0)),
            Ok(DVector::from(vec![60, 6, -52]))
        );
        assert!(a().minor(0, 0).is_err());

        // The minor of a 1x1 matrix is empty and has a determinant of 1.
        assert_eq!(mat([[5]]).cofactor(0, 0), Ok(1));
    }

    #[test]
    fn invert() {
        let m = mat([[1.0, 2.0, 3.0], [4.0, 12.0, 6.0], [7.0, 8.0, 9.0]]);
        let expected = mat([
            [-5.0 / 7.0, -1.0 / 14.0, 2.0 / 7.0],
            [-1.0 / 14.0, 1.0 / 7.0, -1.0 / 14.0],
            [13.0 / 21.0, -1.0 / 14.0, -1.0 / 21.0],
        ]);
        let inv = m.try_invert().unwrap();
        assert_approx_eq!(inv, expected).abs(1e-12);
        assert_eq!(
            m.try_mul(&inv).unwrap().eq_within(&DMatrix::identity(3), 1e-12),
            Ok(true)
        );

        assert_eq!(mat([[4.0]]).try_invert(), Ok(mat([[0.25]])));
        assert_eq!(
            mat([[2.0, -1.0, 1.0], [1.0, 2.0, -1.0], [2.0, -1.0, 1.0]]).try_invert(),
            Err(Error::Singular)
        );
        assert!(matches!(
            a().try_invert(),
            Err(Error::NotSquare {
                op: "Matrix inversion",
                ..
            })
        ));
    }

    #[test]
    fn predicates() {
        assert!(DMatrix::<f64>::identity(3).is_diagonal());
        assert!(!mat([[1.0, 0.5], [0.0, 1.0]]).is_diagonal());
        assert!(!DMatrix::<f64>::zeros(2, 3).is_diagonal());
        assert!(DMatrix::<f64>::zeros(2, 3).is_zero());
        assert!(!DMatrix::<f64>::identity(1).is_zero());
        assert!(mat([[1, 2], [3, 4]]).is_square());
        assert!(!a().is_square());
        assert!(matches!(
            DMatrix::<f64>::identity(2).eq_approx(&DMatrix::identity(3)),
            Err(Error::MatrixSizeMismatch {
                op: "Equalization",
                ..
            })
        ));
    }

    #[test]
    fn conversion() {
        let fixed = Mat2::from_rows([[1, 2], [3, 4]]);
        let dynamic = DMatrix::from(fixed);
        assert_eq!(dynamic, mat([[1, 2], [3, 4]]));
        assert_eq!(Mat2::try_from(dynamic.clone()), Ok(fixed));
        assert_eq!(
            Mat3::<i32>::try_from(dynamic),
            Err(Error::DimensionMismatch {
                expected: Shape(3, 3),
                found: Shape(2, 2),
            })
        );
    }

    #[test]
    fn fmt() {
        let m = mat([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(
            format!("{m:.1}"),
            "⎡1.0   2.0   ⎤\n⎢3.0   4.0   ⎥\n⎣5.0   6.0   ⎦"
        );
        assert_eq!(format!("{}", mat([[1, 20]])), "[1     20    ]");
        assert_eq!(format!("{:?}", mat([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
    }
}
