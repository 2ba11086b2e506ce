//! Cinder - the execution core of a small stack machine.
//!
//! This crate is the host-facing entry point. It re-exports the
//! [`cinder_core`] layers and adds what an embedder needs on top of them: a
//! single [`Error`] type and a couple of helpers for loading and running
//! bytecode.
//!
//! # Quick Start
//!
//! ```
//! use cinder::{Thread, parse_hex, run_to_completion};
//!
//! let code = parse_hex("00 00 00").unwrap();
//! let mut thread = Thread::new(&code);
//! run_to_completion(&mut thread).unwrap();
//! assert_eq!(thread.pc(), 3);
//! ```
//!
//! # Writing immediates
//!
//! ```
//! use cinder::bytecode::{IoSink, Writer};
//!
//! let mut writer = Writer::new(IoSink(Vec::new()));
//! writer.write_var_int(0x1_0000).unwrap();
//! assert_eq!(writer.into_inner().0, [0x01, 0x00, 0x00]);
//! ```

mod error;

pub use error::{Error, Result};

pub use cinder_core::{bytecode, opcode, types, vm};

pub use cinder_core::bytecode::FetchError;
pub use cinder_core::opcode::{Opcode, UnknownOpcode};
pub use cinder_core::types::{CastError, StackValue, TypeId, Value};
pub use cinder_core::vm::{ExecutionError, Thread, ThreadOptions};

/// Runs `thread` until it stops.
///
/// Running off the end of the code is the normal way for a program to
/// finish and yields `Ok(())`. Any other stop is returned as
/// [`Error::Execution`].
pub fn run_to_completion(thread: &mut Thread<'_>) -> Result<()> {
    match thread.run() {
        e if e.is_end_of_program() => Ok(()),
        e => Err(e.into()),
    }
}

/// Parses bytecode written as hex text.
///
/// Whitespace is ignored anywhere, as is a leading `0x`. Digits are read in
/// pairs, high nibble first.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim_start();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    // Offsets are reported against `text`, not the stripped remainder
    let skipped = text.len() - digits.len();

    let mut nibbles = Vec::with_capacity(digits.len());
    for (index, digit) in digits.char_indices() {
        if digit.is_whitespace() {
            continue;
        }
        let nibble = digit.to_digit(16).ok_or(Error::InvalidHex {
            digit,
            offset: skipped + index,
        })?;
        nibbles.push(nibble as u8);
    }

    if nibbles.len() % 2 != 0 {
        return Err(Error::OddHexLength { len: nibbles.len() });
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Formats bytes as space-separated lowercase hex pairs.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
