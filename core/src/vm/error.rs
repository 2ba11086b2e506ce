//! Thread execution errors.
//!
//! # Error Categories
//!
//! - **End of program**: [`ExecutionError::BytecodeOverflow`] is how a thread
//!   reports that its program counter ran off the code. It is the expected
//!   way for [`Thread::run`](super::Thread::run) to stop.
//!
//! - **Malformed bytecode**: truncated immediates and out-of-range immediate
//!   widths. Recoverable by the caller; no state was changed.
//!
//! - **Fatal**: [`ExecutionError::OperationUndefined`] means the instruction
//!   stream is corrupt or the dispatcher is incomplete. The thread should not
//!   be resumed, but the host is free to carry on.

use core::fmt;

use crate::bytecode::FetchError;
use crate::types::CastError;

/// Error raised while a thread fetches or executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// Fewer than `requested` immediate bytes remain at the program counter.
    NotEnoughBytes { requested: usize },

    /// An immediate width outside 1..=8 was requested.
    InvalidImmediateSize { requested: isize },

    /// No opcode left to fetch: the program counter is negative or at/after
    /// the end of the code.
    BytecodeOverflow,

    /// The opcode byte has no handler.
    OperationUndefined { opcode: u8 },

    /// Pushing would exceed the stack limit set in
    /// [`ThreadOptions::max_stack_size`](super::ThreadOptions::max_stack_size).
    StackOverflow { max_size: usize },

    /// A value conversion failed.
    Cast(CastError),
}

impl ExecutionError {
    /// True for the benign end-of-program signal.
    pub const fn is_end_of_program(&self) -> bool {
        matches!(self, ExecutionError::BytecodeOverflow)
    }

    /// True when the thread must not be resumed.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, ExecutionError::OperationUndefined { .. })
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::NotEnoughBytes { requested } => {
                write!(f, "not enough bytes to read: expected {} bytes", requested)
            }
            ExecutionError::InvalidImmediateSize { requested } => write!(
                f,
                "invalid immediate size: fetch byte count must be between 1 and 8 bytes, {} bytes were requested",
                requested
            ),
            ExecutionError::BytecodeOverflow => write!(f, "no more opcodes"),
            ExecutionError::OperationUndefined { opcode } => {
                write!(f, "operation undefined: opcode 0x{:02X}", opcode)
            }
            ExecutionError::StackOverflow { max_size } => {
                write!(f, "stack overflow: maximum size is {}", max_size)
            }
            ExecutionError::Cast(e) => write!(f, "{}", e),
        }
    }
}

impl From<FetchError> for ExecutionError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotEnoughBytes { requested } => {
                ExecutionError::NotEnoughBytes { requested }
            }
            FetchError::Overflow { requested } | FetchError::Underflow { requested } => {
                ExecutionError::InvalidImmediateSize { requested }
            }
        }
    }
}

impl From<CastError> for ExecutionError {
    fn from(e: CastError) -> Self {
        ExecutionError::Cast(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecutionError {}
