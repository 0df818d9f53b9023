// ============================================================================
// RPN Stack Library
// Bounded LIFO stack with Forth-style primitives and numeric value types
// ============================================================================

//! # RPN Stack
//!
//! A capacity-bounded stack for stack-based evaluators, plus the small
//! fixed-size numeric types such evaluators usually push around.
//!
//! ## Features
//!
//! - **Explicit capacity**: pushes never reallocate, `allocate` is the only
//!   growth path
//! - **RPN primitives**: `dup`, `drop`, `swap`, `over`, `rot`, `nip`, `tuck`
//!   on top of `pick` and `roll`
//! - **Errors as values**: overflow and underflow are `Result`s, checked
//!   before any mutation
//! - **Numeric value types**: `Complex<T>`, `Vector<T, N>`, `Matrix<T, R, C>`
//!
//! ## Example
//!
//! ```rust
//! use rpn_stack::prelude::*;
//!
//! // ( 1 2 3 -- 2 3 1 )
//! let mut stack = Stack::new(8);
//! for v in [1, 2, 3] {
//!     stack.push(v).unwrap();
//! }
//! stack.rot().unwrap();
//! assert_eq!(stack.as_slice(), &[2, 3, 1]);
//!
//! // Complex values work as elements too
//! let mut zs: Stack<Complex64> = Stack::new(2);
//! zs.push(Complex::new(0.0, 1.0)).unwrap();
//! zs.dup().unwrap();
//! let product = zs.pop().unwrap() * zs.pop().unwrap();
//! assert_eq!(product, Complex::new(-1.0, 0.0));
//! ```

pub mod numeric;
pub mod stack;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        Complex, Complex32, Complex64, Matrix, NumericError, NumericResult, Real, Scalar, Vector,
    };
    pub use crate::stack::{Stack, StackError, StackResult};
}
