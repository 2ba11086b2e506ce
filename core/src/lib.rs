//! Execution core of the Cinder stack machine.
//!
//! The crate is split into four layers, leaves first:
//!
//! - [`bytecode`]: big-endian immediate codec (fixed-width fetches, the
//!   minimal-width `VarInt` writer and the byte assembly helpers).
//! - [`types`]: the closed numeric value system and its type identities.
//! - [`opcode`]: the instruction identifier table and its stack contracts.
//! - [`vm`]: the execution [`Thread`](vm::Thread) that fetches, advances and
//!   dispatches.
//!
//! The crate is `no_std` + `alloc`; enable the `std` feature for
//! `std::error::Error` impls and the `std::io::Write` sink adapter.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{vec, vec::Vec};

pub mod bytecode;
pub mod opcode;
pub mod types;
pub mod vm;
