//! Configuration options for execution threads.

/// Configuration options for a [`Thread`](super::Thread).
///
/// # Example
///
/// ```
/// use cinder_core::vm::ThreadOptions;
///
/// let options = ThreadOptions {
///     start_pc: 4,
///     ..ThreadOptions::default()
/// };
/// assert_eq!(options.max_stack_size, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadOptions {
    /// Program counter the thread starts at.
    ///
    /// Default: 0
    pub start_pc: isize,

    /// Maximum number of values on the thread's stack.
    ///
    /// Default: `None` (the stack grows without bound)
    pub max_stack_size: Option<usize>,
}

impl Default for ThreadOptions {
    fn default() -> Self {
        Self {
            start_pc: 0,
            max_stack_size: None,
        }
    }
}
