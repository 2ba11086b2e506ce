//! Binary immediate codec.
//!
//! Immediates are unsigned integers stored inline in the bytecode as 1 to 8
//! big-endian bytes with no length prefix. The reader must already know the
//! width from the opcode's own contract. Signed immediates reuse the same
//! widths; their two's-complement interpretation lives on the
//! [`Thread`](crate::vm::Thread).
//!
//! All big-endian assembly and disassembly goes through [`bytes`], so the
//! fetch functions, the [`Writer`] and the host-facing helpers share one
//! implementation.

pub mod bytes;
mod error;
mod immediate;
mod writer;

pub use error::FetchError;
pub use immediate::{
    MAX_IMMEDIATE_SIZE, fetch_n, fetch_u8, fetch_u16, fetch_u24, fetch_u32, fetch_u40, fetch_u48,
    fetch_u56, fetch_u64,
};
pub(crate) use immediate::read_be;
#[cfg(feature = "std")]
pub use writer::IoSink;
pub use writer::{ByteSink, Writer, var_int_width};
