// ============================================================================
// Fixed-Size Matrix
// R×C matrix with compile-time dimensions, row-major storage
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::{Real, Scalar};
use super::vector::Vector;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Matrix with `R` rows and `C` columns, stored row-major as `[[T; C]; R]`.
///
/// Indexing uses row-column order: `m[(i, j)]` is row `i`, column `j`.
///
/// # Example
/// ```rust
/// use rpn_stack::numeric::{Matrix, Vector};
///
/// let m = Matrix::new([[1, 2], [3, 4]]);
/// assert_eq!(m.determinant(), -2);
/// assert_eq!(m * Vector::new([1, 1]), Vector::new([3, 7]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

pub type Matrix2u = Matrix<u32, 2, 2>;
pub type Matrix3u = Matrix<u32, 3, 3>;
pub type Matrix4u = Matrix<u32, 4, 4>;
pub type Matrix2i = Matrix<i32, 2, 2>;
pub type Matrix3i = Matrix<i32, 3, 3>;
pub type Matrix4i = Matrix<i32, 4, 4>;
pub type Matrix2f = Matrix<f32, 2, 2>;
pub type Matrix3f = Matrix<f32, 3, 3>;
pub type Matrix4f = Matrix<f32, 4, 4>;
pub type Matrix2d = Matrix<f64, 2, 2>;
pub type Matrix3d = Matrix<f64, 3, 3>;
pub type Matrix4d = Matrix<f64, 4, 4>;

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Build from row-major element arrays.
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub fn zero() -> Self {
        Self([[T::ZERO; C]; R])
    }

    /// Each vector becomes one row.
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self(rows.map(Vector::into_array))
    }

    /// Each vector becomes one column.
    pub fn from_columns(columns: [Vector<T, R>; C]) -> Self {
        let mut m = Self::zero();
        for (j, column) in columns.iter().enumerate() {
            for i in 0..R {
                m.0[i][j] = column[i];
            }
        }
        m
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Element at row `i`, column `j`, or `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.0.get(i)?.get(j).copied()
    }

    pub fn row(&self, i: usize) -> Option<Vector<T, C>> {
        self.0.get(i).map(|row| Vector::new(*row))
    }

    pub fn column(&self, j: usize) -> Option<Vector<T, R>> {
        if j >= C {
            return None;
        }
        Some(Vector::new(self.0.map(|row| row[j])))
    }

    /// Convert each element to another scalar type.
    pub fn cast<S: Scalar + From<T>>(self) -> Matrix<S, R, C> {
        Matrix(self.0.map(|row| row.map(S::from)))
    }

    // ========================================================================
    // Products
    // ========================================================================

    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut t = Matrix::<T, C, R>::zero();
        for (i, row) in self.0.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                t.0[j][i] = *value;
            }
        }
        t
    }

    /// Multiply every element by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self(self.0.map(|row| row.map(|v| v * factor)))
    }

    /// `(R×C) · (C×K) → (R×K)`
    pub fn mul_matrix<const K: usize>(&self, rhs: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut out = Matrix::<T, R, K>::zero();
        for i in 0..R {
            for j in 0..K {
                out.0[i][j] = (0..C).fold(T::ZERO, |acc, k| acc + self.0[i][k] * rhs.0[k][j]);
            }
        }
        out
    }

    /// `(R×C) · C → R`
    pub fn mul_vector(&self, v: &Vector<T, C>) -> Vector<T, R> {
        Vector::new(self.0.map(|row| Vector::new(row).dot(v)))
    }
}

// ============================================================================
// Square Matrices
// ============================================================================

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = T::ONE;
        }
        m
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Matrix<T, N, N> {
    /// Determinant by fraction-free (Bareiss) elimination.
    ///
    /// Every intermediate division is exact, so integer matrices produce
    /// exact results. The determinant of a 0×0 matrix is 1.
    pub fn determinant(&self) -> T {
        if N == 0 {
            return T::ONE;
        }

        let mut m = self.0;
        let mut negate = false;
        let mut previous_pivot = T::ONE;

        for k in 0..N - 1 {
            if m[k][k].is_zero() {
                match (k + 1..N).find(|&i| !m[i][k].is_zero()) {
                    Some(i) => {
                        m.swap(k, i);
                        negate = !negate;
                    },
                    None => return T::ZERO,
                }
            }

            let pivot_row = m[k];
            for row in m.iter_mut().skip(k + 1) {
                let lead = row[k];
                for j in k + 1..N {
                    row[j] = (row[j] * pivot_row[k] - lead * pivot_row[j]) / previous_pivot;
                }
            }
            previous_pivot = pivot_row[k];
        }

        let det = m[N - 1][N - 1];
        if negate {
            -det
        } else {
            det
        }
    }
}

impl<T: Real, const N: usize> Matrix<T, N, N> {
    /// Inverse by Gauss–Jordan elimination with partial pivoting.
    ///
    /// # Errors
    /// Returns `Singular` if a pivot column is entirely zero.
    pub fn inverse(&self) -> NumericResult<Self> {
        let mut a = self.0;
        let mut inv = Self::identity().0;

        for col in 0..N {
            let mut pivot = col;
            for r in col + 1..N {
                if a[r][col].abs() > a[pivot][col].abs() {
                    pivot = r;
                }
            }
            if a[pivot][col].is_zero() {
                return Err(NumericError::Singular);
            }
            a.swap(col, pivot);
            inv.swap(col, pivot);

            let p = a[col][col];
            for j in 0..N {
                a[col][j] = a[col][j] / p;
                inv[col][j] = inv[col][j] / p;
            }

            let (a_pivot, inv_pivot) = (a[col], inv[col]);
            for r in 0..N {
                if r == col {
                    continue;
                }
                let factor = a[r][col];
                if factor.is_zero() {
                    continue;
                }
                for j in 0..N {
                    a[r][j] = a[r][j] - factor * a_pivot[j];
                    inv[r][j] = inv[r][j] - factor * inv_pivot[j];
                }
            }
        }

        Ok(Self(inv))
    }
}

// ============================================================================
// Vector Conversions
// ============================================================================

impl<T, const R: usize> From<Vector<T, R>> for Matrix<T, R, 1> {
    /// Column matrix from a vector.
    fn from(v: Vector<T, R>) -> Self {
        Self(v.into_array().map(|x| [x]))
    }
}

impl<T: Copy, const R: usize> Matrix<T, R, 1> {
    pub fn column_vector(&self) -> Vector<T, R> {
        Vector::new(self.0.map(|[x]| x))
    }
}

impl<T: Copy, const C: usize> Matrix<T, 1, C> {
    pub fn row_vector(&self) -> Vector<T, C> {
        let [row] = self.0;
        Vector::new(row)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.0[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.0[i][j]
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|row| row.map(|v| -v)))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C, K>) -> Self::Output {
        self.mul_matrix(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        self.mul_vector(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self(self.0.map(|row| row.map(|v| v / rhs)))
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.0.iter_mut().zip(rhs.0) {
            for (a, b) in row.iter_mut().zip(rhs_row) {
                *a = *a + b;
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.0.iter_mut().zip(rhs.0) {
            for (a, b) in row.iter_mut().zip(rhs_row) {
                *a = *a - b;
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// Scalar on the left: `2.0 * m`. Orphan rules need one impl per primitive.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i32, i64, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::vector::{Vector2i, Vector3i};
    use proptest::prelude::*;

    fn assert_close<const N: usize>(actual: Matrix<f64, N, N>, expected: Matrix<f64, N, N>) {
        for i in 0..N {
            for j in 0..N {
                assert!(
                    (actual[(i, j)] - expected[(i, j)]).abs() < 1e-9,
                    "mismatch at ({}, {}): {:?} vs {:?}",
                    i,
                    j,
                    actual,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_construction() {
        let m = Matrix::from_rows([Vector::new([1, 2, 3]), Vector::new([4, 5, 6])]);
        assert_eq!(m, Matrix::new([[1, 2, 3], [4, 5, 6]]));

        let n = Matrix::from_columns([Vector::new([1, 4]), Vector::new([2, 5]), Vector::new([3, 6])]);
        assert_eq!(n, m);

        assert_eq!(Matrix2i::identity(), Matrix::new([[1, 0], [0, 1]]));
        assert_eq!(Matrix2i::default(), Matrix2i::zero());
    }

    #[test]
    fn test_accessors() {
        let mut m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(m.get(2, 1), Some(6));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.row(1), Some(Vector::new([3, 4])));
        assert_eq!(m.column(0), Some(Vector::new([1, 3, 5])));
        assert_eq!(m.column(2), None);

        m[(0, 0)] = 10;
        assert_eq!(m[(0, 0)], 10);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.transpose(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a = Matrix2i::new([[1, 2], [3, 4]]);
        let b = Matrix2i::new([[4, 3], [2, 1]]);

        assert_eq!(a + b, Matrix::new([[5, 5], [5, 5]]));
        assert_eq!(a - b, Matrix::new([[-3, -1], [1, 3]]));
        assert_eq!(-a, Matrix::new([[-1, -2], [-3, -4]]));
        assert_eq!(a.scale(3), Matrix::new([[3, 6], [9, 12]]));
        assert_eq!(3 * a, a.scale(3));
        assert_eq!(a * 3, a.scale(3));
        assert_eq!(a.scale(2) / 2, a);

        let mut c = a;
        c += b;
        c -= b;
        c *= 2;
        c /= 2;
        assert_eq!(c, a);
    }

    #[test]
    fn test_matrix_product() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::new([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a * b, Matrix::new([[58, 64], [139, 154]]));

        let i = Matrix3i::identity();
        let m = Matrix3i::new([[2, 0, 1], [1, 3, 2], [1, 1, 1]]);
        assert_eq!(m * i, m);
        assert_eq!(i * m, m);
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let v = Vector3i::new([1, 0, -1]);
        assert_eq!(m * v, Vector2i::new([-2, -2]));
    }

    #[test]
    fn test_vector_conversions() {
        let column: Matrix<i32, 3, 1> = Vector::new([1, 2, 3]).into();
        assert_eq!(column, Matrix::new([[1], [2], [3]]));
        assert_eq!(column.column_vector(), Vector::new([1, 2, 3]));
        assert_eq!(column.transpose().row_vector(), Vector::new([1, 2, 3]));
    }

    #[test]
    fn test_determinant_closed_forms() {
        assert_eq!(Matrix2i::new([[3, 8], [4, 6]]).determinant(), -14);
        assert_eq!(
            Matrix3i::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]).determinant(),
            -306
        );
        assert_eq!(Matrix3i::new([[2, 0, 1], [1, 3, 2], [1, 1, 1]]).determinant(), 0);
    }

    #[test]
    fn test_determinant_with_row_swap() {
        assert_eq!(Matrix2i::new([[0, 1], [1, 0]]).determinant(), -1);
        assert_eq!(
            Matrix3i::new([[0, 2, 1], [0, 0, 3], [4, 1, 1]]).determinant(),
            24
        );
    }

    #[test]
    fn test_determinant_larger_and_trivial() {
        let m = Matrix4i::new([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
        assert_eq!(m.determinant(), 30);
        assert_eq!(Matrix4i::identity().determinant(), 1);
        assert_eq!(Matrix::<i32, 1, 1>::new([[7]]).determinant(), 7);
        assert_eq!(Matrix::<i32, 0, 0>::new([]).determinant(), 1);
        assert_eq!(Matrix3i::identity().trace(), 3);
    }

    #[test]
    fn test_inverse() {
        let m = Matrix2d::new([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert_close(inv, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
        assert_close(m * inv, Matrix2d::identity());

        let needs_pivot = Matrix3d::new([[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]);
        let inv = needs_pivot.inverse().unwrap();
        assert_close(needs_pivot * inv, Matrix3d::identity());
    }

    #[test]
    fn test_inverse_singular() {
        let m = Matrix2d::new([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(m.inverse(), Err(NumericError::Singular));
        assert_eq!(Matrix3d::zero().inverse(), Err(NumericError::Singular));
    }

    proptest! {
        #[test]
        fn prop_determinant_is_multiplicative(
            a in prop::array::uniform3(prop::array::uniform3(-9i64..=9)),
            b in prop::array::uniform3(prop::array::uniform3(-9i64..=9)),
        ) {
            let (a, b) = (Matrix::new(a), Matrix::new(b));
            prop_assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
        }

        #[test]
        fn prop_transpose_preserves_determinant(
            a in prop::array::uniform4(prop::array::uniform4(-20i64..=20)),
        ) {
            let a = Matrix::new(a);
            prop_assert_eq!(a.transpose().determinant(), a.determinant());
        }
    }
}
