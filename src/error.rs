//! Host-facing error type.
//!
//! Wraps every error the core can report, plus the I/O errors of the write
//! side, so embedders and the CLI deal with a single type that renders
//! through `miette`.

use cinder_core::bytecode::FetchError;
use cinder_core::opcode::UnknownOpcode;
use cinder_core::types::CastError;
use cinder_core::vm::ExecutionError;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// An immediate could not be read from a raw buffer.
    #[error("immediate fetch failed: {0}")]
    #[diagnostic(code(cinder::fetch))]
    Fetch(#[from] FetchError),

    /// A thread stopped on something other than the end of its code.
    #[error("execution failed: {0}")]
    #[diagnostic(
        code(cinder::execution),
        help("the bytecode is truncated or uses an opcode this build cannot execute")
    )]
    Execution(#[from] ExecutionError),

    #[error("{0}")]
    #[diagnostic(code(cinder::cast))]
    Cast(#[from] CastError),

    #[error("{0}")]
    #[diagnostic(code(cinder::opcode))]
    UnknownOpcode(#[from] UnknownOpcode),

    /// The byte sink failed.
    #[error("I/O error: {0}")]
    #[diagnostic(code(cinder::io))]
    Io(#[from] std::io::Error),

    #[error("invalid hex digit {digit:?} at offset {offset}")]
    #[diagnostic(code(cinder::hex), help("bytecode text must only contain 0-9, a-f and A-F"))]
    InvalidHex { digit: char, offset: usize },

    #[error("hex input has {len} digits")]
    #[diagnostic(code(cinder::hex), help("every byte needs exactly two hex digits"))]
    OddHexLength { len: usize },
}
