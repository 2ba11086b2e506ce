//! Numeric value system.
//!
//! [`Value`] is the closed set of numeric kinds a program can hold.
//! [`StackValue`] is the subset that may live on a thread's stack: the
//! widest member of each family (`Uint64`, `Int64`, `Float64`). Narrower
//! kinds only exist as payload or as the result of a
//! [`downcast`](StackValue::downcast).

mod error;
mod type_id;
mod value;

pub use error::CastError;
pub use type_id::TypeId;
pub use value::{StackValue, Value};
