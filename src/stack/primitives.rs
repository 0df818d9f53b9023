// ============================================================================
// RPN Primitives
// Forth-style stack manipulation built on `pick` and `roll`
// ============================================================================
//
// Stack effects use `( before -- after )` notation with the top rightmost.
// Every primitive validates depth and room before mutating, so a failing
// call leaves the stack untouched.

use super::bounded::Stack;
use super::errors::StackResult;

impl<T> Stack<T> {
    /// Move the element at depth `n` to the top.
    ///
    /// The elements above it each shift one slot toward the bottom, and the
    /// size is unchanged. `roll(0)` is a no-op on a non-empty stack.
    ///
    /// Unlike [`Stack::pick`], this never needs a spare slot and works on a
    /// full stack.
    ///
    /// # Errors
    /// Returns `Underflow` if `size() <= n`.
    pub fn roll(&mut self, n: usize) -> StackResult<()> {
        let index = self.depth_index(n)?;
        self.buffer_mut()[index..].rotate_left(1);
        Ok(())
    }

    /// `( x -- )`
    pub fn drop(&mut self) -> StackResult<()> {
        self.pop().map(|_| ())
    }

    /// `( x y -- y x )`
    #[inline]
    pub fn swap(&mut self) -> StackResult<()> {
        self.roll(1)
    }

    /// `( x y z -- y z x )`
    #[inline]
    pub fn rot(&mut self) -> StackResult<()> {
        self.roll(2)
    }

    /// `( x y -- y )`
    pub fn nip(&mut self) -> StackResult<()> {
        self.swap()?;
        self.drop()
    }
}

impl<T: Clone> Stack<T> {
    /// Push a copy of the element at depth `n` (0 is the top).
    ///
    /// # Errors
    /// - `Underflow` if `size() <= n`
    /// - `Overflow` if the stack is full
    pub fn pick(&mut self, n: usize) -> StackResult<()> {
        let index = self.depth_index(n)?;
        self.ensure_room()?;
        let value = self.as_slice()[index].clone();
        self.buffer_mut().push(value);
        Ok(())
    }

    /// `( x -- x x )`
    #[inline]
    pub fn dup(&mut self) -> StackResult<()> {
        self.pick(0)
    }

    /// `( x y -- x y x )`
    #[inline]
    pub fn over(&mut self) -> StackResult<()> {
        self.pick(1)
    }

    /// `( x y -- y x y )`
    ///
    /// Both the depth and the free slot are checked up front, so an
    /// overflowing `tuck` does not leave the top two elements swapped.
    pub fn tuck(&mut self) -> StackResult<()> {
        self.depth_index(1)?;
        self.ensure_room()?;
        self.swap()?;
        self.over()
    }
}
