use crate::Vec;
use core::fmt;

/// A value stack with an optional size limit.
///
/// Used by [`Thread`](super::Thread) for value storage during execution.
/// Unlimited stacks grow like a `Vec`. A limit is checked on every push in
/// all build profiles.
///
/// # Examples
///
/// ```
/// use cinder_core::vm::Stack;
///
/// let mut stack = Stack::new(None);
/// stack.try_push(42).unwrap();
/// stack.try_push(17).unwrap();
/// assert_eq!(stack.pop(), Some(17));
/// assert_eq!(stack.peek(), Some(&42));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    items: Vec<T>,
    /// Maximum allowed stack size, if any.
    limit: Option<usize>,
}

impl<T> Stack<T> {
    /// Creates an empty stack holding at most `limit` elements, or any
    /// number of them when `limit` is `None`.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    /// Pushes a value onto the stack.
    ///
    /// Hands the value back if the stack has reached its limit.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Always false for an unlimited stack.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.items.len() >= limit)
    }

    /// The elements from bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("limit", &self.limit)
            .finish()
    }
}
