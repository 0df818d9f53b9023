// ============================================================================
// Fixed-Size Vector
// N-dimensional vector with compile-time length
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::{Real, Scalar};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Vector of `N` elements of type `T`, stored inline as `[T; N]`.
///
/// # Example
/// ```rust
/// use rpn_stack::numeric::Vector;
///
/// let a = Vector::new([1, 0, 0]);
/// let b = Vector::new([0, 1, 0]);
/// assert_eq!(a.cross(&b), Vector::new([0, 0, 1]));
/// assert_eq!(a.dot(&b), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

pub type Vector2u = Vector<u32, 2>;
pub type Vector3u = Vector<u32, 3>;
pub type Vector4u = Vector<u32, 4>;
pub type Vector2i = Vector<i32, 2>;
pub type Vector3i = Vector<i32, 3>;
pub type Vector4i = Vector<i32, 4>;
pub type Vector2f = Vector<f32, 2>;
pub type Vector3f = Vector<f32, 3>;
pub type Vector4f = Vector<f32, 4>;
pub type Vector2d = Vector<f64, 2>;
pub type Vector3d = Vector<f64, 3>;
pub type Vector4d = Vector<f64, 4>;

impl<T, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Apply `f` to every element.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub fn zero() -> Self {
        Self([T::ZERO; N])
    }

    /// Build from a slice of any length: missing trailing elements are zero
    /// and surplus elements are ignored.
    pub fn from_partial(values: &[T]) -> Self {
        let mut elements = [T::ZERO; N];
        for (slot, value) in elements.iter_mut().zip(values) {
            *slot = *value;
        }
        Self(elements)
    }

    /// Build from a slice that must hold exactly `N` elements.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `values.len() != N`.
    pub fn try_from_slice(values: &[T]) -> NumericResult<Self> {
        if values.len() != N {
            return Err(NumericError::DimensionMismatch {
                expected: N,
                found: values.len(),
            });
        }
        Ok(Self::from_partial(values))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Element `i`, or `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.0.get(i).copied()
    }

    /// Convert each element to another scalar type.
    pub fn cast<S: Scalar + From<T>>(self) -> Vector<S, N> {
        self.map(S::from)
    }

    /// Truncate or zero-pad to `M` elements.
    pub fn resize<const M: usize>(&self) -> Vector<T, M> {
        Vector::from_partial(&self.0)
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Scalar (dot) product.
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + *a * *b)
    }

    /// Squared magnitude.
    #[inline]
    pub fn norm(&self) -> T {
        self.dot(self)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product, only defined in three dimensions.
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        Self([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.norm().sqrt()
    }

    /// Unit vector in the same direction. A zero vector yields NaN elements.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// # Errors
    /// Returns `DivisionByZero` for a zero vector.
    pub fn checked_normalize(&self) -> NumericResult<Self> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(*self / magnitude)
    }

    /// Projection of `v` onto `self`.
    pub fn project(&self, v: &Self) -> Self {
        *self * (self.dot(v) / self.norm())
    }

    /// Angle between `self` and `v`, in radians.
    pub fn angle(&self, v: &Self) -> T {
        (self.dot(v) / (self.magnitude() * v.magnitude())).acos()
    }
}

// ============================================================================
// Component Accessors
// ============================================================================

impl<T: Copy> Vector<T, 2> {
    #[inline]
    pub const fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.0[1]
    }
}

impl<T: Copy> Vector<T, 3> {
    #[inline]
    pub const fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.0[2]
    }
}

impl<T: Copy> Vector<T, 4> {
    #[inline]
    pub const fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub const fn w(&self) -> T {
        self.0[3]
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|v| v / rhs)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::consts::PI_2;
    use quickcheck::quickcheck;
    use rust_decimal::Decimal;

    #[test]
    fn test_construction() {
        let v = Vector3i::new([1, 2, 3]);
        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
        assert_eq!(v.z(), 3);
        assert_eq!(v.len(), 3);
        assert_eq!(Vector3i::zero(), Vector::new([0, 0, 0]));
        assert_eq!(Vector3i::default(), Vector3i::zero());
    }

    #[test]
    fn test_from_partial() {
        assert_eq!(Vector4i::from_partial(&[1, 2]), Vector::new([1, 2, 0, 0]));
        assert_eq!(Vector2i::from_partial(&[1, 2, 3]), Vector::new([1, 2]));
    }

    #[test]
    fn test_try_from_slice() {
        assert_eq!(Vector2i::try_from_slice(&[4, 5]), Ok(Vector::new([4, 5])));
        assert_eq!(
            Vector2i::try_from_slice(&[4]),
            Err(NumericError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector4u::new([1, 2, 3, 4]);
        v[3] = 40;
        assert_eq!(v[3], 40);
        assert_eq!(v.w(), 40);
        assert_eq!(v.get(4), None);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3d::new([1.0, 2.0, 3.0]);
        let b = Vector3d::new([0.5, 0.5, 0.5]);

        assert_eq!(a + b, Vector::new([1.5, 2.5, 3.5]));
        assert_eq!(a - b, Vector::new([0.5, 1.5, 2.5]));
        assert_eq!(-a, Vector::new([-1.0, -2.0, -3.0]));
        assert_eq!(a * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(a / 2.0, Vector::new([0.5, 1.0, 1.5]));

        let mut c = a;
        c += b;
        c -= a;
        c *= 4.0;
        c /= 2.0;
        assert_eq!(c, Vector::new([1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3i::new([1, 2, 3]);
        let b = Vector3i::new([4, 5, 6]);

        assert_eq!(a.dot(&b), 32);
        assert_eq!(a.norm(), 14);
        assert_eq!(a.cross(&b), Vector::new([-3, 6, -3]));
        assert_eq!(a.cross(&a), Vector3i::zero());
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vector2d::new([3.0, 4.0]);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.normalize(), Vector::new([0.6, 0.8]));
        assert_eq!(
            Vector2d::zero().checked_normalize(),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_project_and_angle() {
        let axis = Vector2d::new([2.0, 0.0]);
        let v = Vector2d::new([3.0, 4.0]);
        assert_eq!(axis.project(&v), Vector::new([3.0, 0.0]));

        let up = Vector2d::new([0.0, 1.0]);
        assert!((axis.angle(&up) - PI_2).abs() < 1e-12);
        assert!(axis.angle(&axis).abs() < 1e-12);
    }

    #[test]
    fn test_resize_and_cast() {
        let v = Vector3i::new([1, 2, 3]);
        assert_eq!(v.resize::<2>(), Vector::new([1, 2]));
        assert_eq!(v.resize::<4>(), Vector::new([1, 2, 3, 0]));

        let d: Vector3d = v.cast();
        assert_eq!(d, Vector::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_decimal_elements() {
        let a = Vector::new([Decimal::new(15, 1), Decimal::new(2, 0)]);
        let b = Vector::new([Decimal::new(2, 0), Decimal::new(25, 2)]);
        assert_eq!(a.dot(&b), Decimal::new(35, 1));
    }

    quickcheck! {
        fn qc_dot_is_symmetric(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
            let u = Vector::new([a.0 as i64, a.1 as i64, a.2 as i64]);
            let v = Vector::new([b.0 as i64, b.1 as i64, b.2 as i64]);
            u.dot(&v) == v.dot(&u)
        }

        fn qc_cross_is_orthogonal(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
            let u = Vector::new([a.0 as i64, a.1 as i64, a.2 as i64]);
            let v = Vector::new([b.0 as i64, b.1 as i64, b.2 as i64]);
            let w = u.cross(&v);
            w.dot(&u) == 0 && w.dot(&v) == 0
        }
    }
}
