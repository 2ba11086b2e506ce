//! Immediate decoding errors.

use core::fmt;

/// Failure to read an immediate from a bytecode buffer.
///
/// A failed fetch never consumes bytes: the caller's cursor is left exactly
/// where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// Fewer than `requested` bytes remain at the cursor, or the cursor is
    /// negative.
    NotEnoughBytes { requested: usize },

    /// More than 8 bytes were requested.
    Overflow { requested: isize },

    /// A negative number of bytes was requested.
    Underflow { requested: isize },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotEnoughBytes { requested } => {
                write!(f, "not enough bytes to read: expected {} bytes", requested)
            }
            FetchError::Overflow { requested } => {
                write!(f, "fetch overflow: {} bytes requested, at most 8 allowed", requested)
            }
            FetchError::Underflow { requested } => {
                write!(f, "fetch underflow: {} bytes requested", requested)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FetchError {}
