use core::fmt;

use super::TypeId;

/// An illegal or unsupported value conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastError {
    pub from: TypeId,
    pub to: TypeId,
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to cast {} to {}", self.from, self.to)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CastError {}
