//! Execution threads.
//!
//! A [`Thread`] fetches opcodes from borrowed bytecode, advances its program
//! counter and dispatches. Operand bytes are read through the thread's
//! `fetch_*` methods, which share the bounds discipline of
//! [`crate::bytecode`].

mod error;
mod fetch;
mod options;
mod stack;
mod thread;

pub use error::ExecutionError;
pub use fetch::{
    INT24_NEGATIVE_BIT, INT24_SIGN_EXTEND, INT40_NEGATIVE_BIT, INT40_SIGN_EXTEND,
    INT48_NEGATIVE_BIT, INT48_SIGN_EXTEND, INT56_NEGATIVE_BIT, INT56_SIGN_EXTEND,
};
pub use options::ThreadOptions;
pub use stack::Stack;
pub use thread::Thread;
