// ============================================================================
// Bounded Stack
// Contiguous LIFO buffer with an explicit, caller-managed capacity
// ============================================================================

use super::errors::{StackError, StackResult};
use std::fmt;
use std::slice;

/// Generic LIFO stack over a contiguous, exclusively owned buffer.
///
/// The buffer is allocated for exactly `capacity` slots and never grows on
/// its own: `push` fails with [`StackError::Overflow`] once the stack is
/// full, and only [`Stack::allocate`] changes the capacity.
///
/// Elements are addressed by *depth*, the distance from the top, so depth 0
/// is the most recently pushed value.
///
/// # Example
/// ```rust
/// use rpn_stack::stack::{Stack, StackError};
///
/// let mut stack = Stack::new(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert_eq!(stack.push(3), Err(StackError::Overflow { capacity: 2 }));
///
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.peek(), Ok(&1));
/// ```
pub struct Stack<T> {
    /// Valid elements, bottom first. `buffer.len()` is the logical size.
    buffer: Vec<T>,
    /// Number of slots the caller asked for
    capacity: usize,
}

impl<T> Stack<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty stack with room for exactly `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    // ========================================================================
    // Capacity Management
    // ========================================================================

    /// Reallocate the buffer to hold exactly `new_capacity` elements.
    ///
    /// The valid elements are moved into the new buffer in order, starting
    /// from the bottom. When `new_capacity` is smaller than the current size,
    /// the top `size - new_capacity` elements are dropped and the size is
    /// clamped, so `size() <= capacity()` holds afterwards.
    pub fn allocate(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity;
        let size = self.buffer.len();
        let keep = size.min(new_capacity);

        if keep < size {
            tracing::debug!(
                size,
                new_capacity,
                discarded = size - keep,
                "shrinking stack below its size, discarding top elements"
            );
            self.buffer.truncate(keep);
        }

        let mut memory = Vec::with_capacity(new_capacity);
        memory.append(&mut self.buffer);

        self.buffer = memory;
        self.capacity = new_capacity;

        tracing::trace!(old_capacity, new_capacity, "stack buffer reallocated");
    }

    /// Discard every element. The capacity is left unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of valid elements on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Total number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pushes left before the stack overflows.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Push `value` onto the top of the stack.
    ///
    /// # Errors
    /// Returns `Overflow` if `size() == capacity()`. The stack never grows
    /// implicitly; call [`Stack::allocate`] first.
    pub fn push(&mut self, value: T) -> StackResult<()> {
        self.ensure_room()?;
        self.buffer.push(value);
        Ok(())
    }

    /// Remove and return the top value.
    ///
    /// # Errors
    /// Returns `Underflow` if the stack is empty.
    pub fn pop(&mut self) -> StackResult<T> {
        match self.buffer.pop() {
            Some(value) => Ok(value),
            None => Err(self.underflow(1)),
        }
    }

    /// Return the top value without removing it.
    ///
    /// # Errors
    /// Returns `Underflow` if the stack is empty.
    pub fn peek(&self) -> StackResult<&T> {
        match self.buffer.last() {
            Some(value) => Ok(value),
            None => Err(self.underflow(1)),
        }
    }

    // ========================================================================
    // Read-only Access
    // ========================================================================

    /// Element at `depth` from the top, or `None` if the stack is too shallow.
    pub fn get(&self, depth: usize) -> Option<&T> {
        let top = self.buffer.len().checked_sub(1)?;
        self.buffer.get(top.checked_sub(depth)?)
    }

    /// Valid elements from bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Iterate over the valid elements from bottom to top.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }

    // ========================================================================
    // Bounds Checks
    // ========================================================================

    #[inline]
    pub(super) fn buffer_mut(&mut self) -> &mut Vec<T> {
        &mut self.buffer
    }

    /// Buffer index of the element at `depth`.
    pub(super) fn depth_index(&self, depth: usize) -> StackResult<usize> {
        let size = self.buffer.len();
        if size <= depth {
            return Err(self.underflow(depth.saturating_add(1)));
        }
        Ok(size - 1 - depth)
    }

    pub(super) fn ensure_room(&self) -> StackResult<()> {
        if self.is_full() {
            let err = StackError::Overflow {
                capacity: self.capacity,
            };
            tracing::trace!(%err, "stack operation rejected");
            return Err(err);
        }
        Ok(())
    }

    fn underflow(&self, required: usize) -> StackError {
        let err = StackError::Underflow {
            required,
            available: self.buffer.len(),
        };
        tracing::trace!(%err, "stack operation rejected");
        err
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> Default for Stack<T> {
    /// An empty stack with zero capacity.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Independent copy with the same capacity and the same valid elements.
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend_from_slice(&self.buffer);
        Self {
            buffer,
            capacity: self.capacity,
        }
    }

    /// Replace `self` with a copy of `source`.
    ///
    /// The replacement is built completely before the old buffer is
    /// released, so a panicking `T::clone` leaves `self` intact.
    fn clone_from(&mut self, source: &Self) {
        let replacement = source.clone();
        *self = replacement;
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("size", &self.buffer.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.buffer)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}
