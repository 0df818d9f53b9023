// ============================================================================
// Numeric Module
// Fixed-size value types for small-dimension linear algebra
// ============================================================================
//
// This module provides:
// - Scalar/Real: element traits for integers, floats and rust_decimal::Decimal
// - Complex<T>: complex numbers with polar and transcendental operations
// - Vector<T, N>: N-dimensional vectors with const-generic length
// - Matrix<T, R, C>: R×C matrices with determinant and inverse
// - NumericError: error types for checked operations
// - consts: mathematical constants
//
// Design principles:
// - Stack-allocated, Copy value types; no heap allocation
// - Dimensions checked at compile time via const generics
// - Operators follow element semantics, checked_* methods return Result

pub mod consts;

mod complex;
mod errors;
mod matrix;
mod scalar;
mod vector;

pub use complex::{Complex, Complex32, Complex64};
pub use errors::{NumericError, NumericResult};
pub use matrix::{
    Matrix, Matrix2d, Matrix2f, Matrix2i, Matrix2u, Matrix3d, Matrix3f, Matrix3i, Matrix3u,
    Matrix4d, Matrix4f, Matrix4i, Matrix4u,
};
pub use scalar::{Real, Scalar};
pub use vector::{
    Vector, Vector2d, Vector2f, Vector2i, Vector2u, Vector3d, Vector3f, Vector3i, Vector3u,
    Vector4d, Vector4f, Vector4i, Vector4u,
};
