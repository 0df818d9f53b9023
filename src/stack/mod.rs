// ============================================================================
// Stack Module
// Capacity-bounded LIFO stack with RPN manipulation primitives
// ============================================================================
//
// This module provides:
// - Stack<T>: contiguous, exclusively owned buffer with explicit capacity
// - StackError: overflow/underflow reported as values, never panics
// - RPN primitives (dup, drop, swap, over, rot, nip, tuck) on top of pick/roll
//
// Design principles:
// - No implicit growth: only `allocate` changes the capacity
// - Every bounds check runs before mutation
// - Depth 0 is the top of the stack

mod bounded;
mod errors;
mod primitives;

pub use bounded::Stack;
pub use errors::{StackError, StackResult};
