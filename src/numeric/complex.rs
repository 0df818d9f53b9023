// ============================================================================
// Complex Numbers
// Generic complex value type with transcendental operations
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::{Real, Scalar};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex number `re + im·i` over a [`Scalar`] element type.
///
/// Arithmetic operators follow the semantics of `T`: for floats a division
/// by zero yields infinities or NaN, for integers it panics. Use
/// [`Complex::checked_div`] when the divisor may be zero.
///
/// # Example
/// ```rust
/// use rpn_stack::numeric::Complex;
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.modulus(), 5.0);
/// assert_eq!(z * z.conjugate(), Complex::new(25.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Scalar> Complex<T> {
    // ========================================================================
    // Construction and Accessors
    // ========================================================================

    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// The imaginary unit `i`.
    #[inline]
    pub const fn i() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    #[inline]
    pub const fn real(&self) -> T {
        self.re
    }

    #[inline]
    pub const fn imag(&self) -> T {
        self.im
    }

    #[inline]
    pub fn set(&mut self, re: T, im: T) {
        self.re = re;
        self.im = im;
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// `self²`, cheaper than a general multiplication.
    pub fn square(&self) -> Self {
        let cross = self.re * self.im;
        Self::new(self.re * self.re - self.im * self.im, cross + cross)
    }

    /// Multiply both parts by a real factor.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Division that reports a zero divisor instead of producing NaN or
    /// panicking.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.norm().is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self / rhs)
    }
}

impl<T: Scalar + Neg<Output = T>> Complex<T> {
    /// `re - im·i`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// `1 / self`
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `self` is zero.
    pub fn checked_reciprocal(&self) -> NumericResult<Self> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.conjugate() / norm)
    }
}

impl<T: Real> Complex<T> {
    // ========================================================================
    // Polar Form
    // ========================================================================

    /// Build `r·(cos θ + i·sin θ)`.
    pub fn from_polar(r: T, theta: T) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Magnitude `|z|`.
    #[inline]
    pub fn modulus(&self) -> T {
        self.norm().sqrt()
    }

    /// Phase angle in `(-π, π]`.
    #[inline]
    pub fn argument(&self) -> T {
        self.im.atan2(self.re)
    }

    // ========================================================================
    // Transcendental Functions
    // ========================================================================

    /// `1 / self` with IEEE semantics for zero.
    pub fn reciprocal(&self) -> Self {
        self.conjugate() / self.norm()
    }

    /// `self^exponent` for a complex exponent, using the principal branch.
    ///
    /// `0^0` is 1 and `0^w` is 0 for any other `w`.
    pub fn powc(&self, exponent: Self) -> Self {
        if self.norm().is_zero() {
            return if exponent.norm().is_zero() {
                Self::new(T::ONE, T::ZERO)
            } else {
                Self::new(T::ZERO, T::ZERO)
            };
        }

        let ln_r = self.modulus().ln();
        let theta = self.argument();
        let phi = exponent.im * ln_r + exponent.re * theta;
        let r = (exponent.re * ln_r - exponent.im * theta).exp();
        Self::from_polar(r, phi)
    }

    /// `self^exponent` for a real exponent.
    pub fn powf(&self, exponent: T) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_polar(self.norm().powf(exponent / two), self.argument() * exponent)
    }

    /// Principal square root.
    pub fn sqrt(&self) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_polar(self.modulus().sqrt(), self.argument() / two)
    }

    /// `e^self`
    pub fn exp(&self) -> Self {
        Self::from_polar(self.re.exp(), self.im)
    }

    /// Principal natural logarithm.
    pub fn ln(&self) -> Self {
        Self::new(self.modulus().ln(), self.argument())
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl<T: Scalar> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Self {
        Self::new(re, T::ZERO)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Scalar> Div for Complex<T> {
    type Output = Self;

    /// `(a + bi) / (c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)`
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        let norm = rhs.norm();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / norm,
            (self.im * rhs.re - self.re * rhs.im) / norm,
        )
    }
}

impl<T: Scalar> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar> Div<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl<T: Scalar> AddAssign for Complex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Complex<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign for Complex<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Complex<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Real + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < T::ZERO {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
