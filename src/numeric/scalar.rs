// ============================================================================
// Scalar Traits
// Element types accepted by Complex, Vector and Matrix
// ============================================================================

use rust_decimal::Decimal;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Closed arithmetic over a copyable element type.
///
/// Integer implementations panic on overflow in debug builds, exactly like
/// the primitive operators they forward to.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Floating-point scalar with the transcendental functions needed for
/// magnitudes, angles and complex powers.
pub trait Real: Scalar + Neg<Output = Self> + PartialOrd {
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_scalar! {
    i32 => 0, 1;
    i64 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    Decimal => Decimal::ZERO, Decimal::ONE;
}

macro_rules! impl_real {
    ($($t:ident),*) => {
        $(
            impl Real for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    $t::sqrt(self)
                }

                #[inline]
                fn abs(self) -> Self {
                    $t::abs(self)
                }

                #[inline]
                fn sin(self) -> Self {
                    $t::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    $t::cos(self)
                }

                #[inline]
                fn acos(self) -> Self {
                    $t::acos(self)
                }

                #[inline]
                fn atan2(self, x: Self) -> Self {
                    $t::atan2(self, x)
                }

                #[inline]
                fn exp(self) -> Self {
                    $t::exp(self)
                }

                #[inline]
                fn ln(self) -> Self {
                    $t::ln(self)
                }

                #[inline]
                fn powf(self, exponent: Self) -> Self {
                    $t::powf(self, exponent)
                }
            }
        )*
    };
}

impl_real!(f32, f64);
