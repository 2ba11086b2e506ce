//! Type identities.
//!
//! The numbering is stable: ids are meant to appear in bytecode as cast
//! targets and in composite type descriptors.

use core::fmt;

/// Identity of a value kind.
///
/// Only the numeric kinds carry behavior. `Void` and the reserved kinds
/// (`Boolean` through `Method`) exist so that type descriptors can name
/// them; casting to any of them always fails.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeId {
    Void = 0,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    List,
    Map,
    Struct,
    Class,
    Function,
    Method,
}
static_assertions::assert_eq_size!(TypeId, u8);

impl TypeId {
    /// Every type id, in numbering order.
    pub const ALL: [TypeId; 19] = [
        TypeId::Void,
        TypeId::Uint8,
        TypeId::Uint16,
        TypeId::Uint32,
        TypeId::Uint64,
        TypeId::Int8,
        TypeId::Int16,
        TypeId::Int32,
        TypeId::Int64,
        TypeId::Float32,
        TypeId::Float64,
        TypeId::Boolean,
        TypeId::String,
        TypeId::List,
        TypeId::Map,
        TypeId::Struct,
        TypeId::Class,
        TypeId::Function,
        TypeId::Method,
    ];

    /// The kinds that have no numeric behavior and reject every cast.
    pub const RESERVED: [TypeId; 8] = [
        TypeId::Boolean,
        TypeId::String,
        TypeId::List,
        TypeId::Map,
        TypeId::Struct,
        TypeId::Class,
        TypeId::Function,
        TypeId::Method,
    ];

    /// Maps a raw id byte back to a type id.
    pub const fn from_u8(raw: u8) -> Option<TypeId> {
        if (raw as usize) < Self::ALL.len() {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            TypeId::Void => "void",
            TypeId::Uint8 => "uint8",
            TypeId::Uint16 => "uint16",
            TypeId::Uint32 => "uint32",
            TypeId::Uint64 => "uint64",
            TypeId::Int8 => "int8",
            TypeId::Int16 => "int16",
            TypeId::Int32 => "int32",
            TypeId::Int64 => "int64",
            TypeId::Float32 => "float32",
            TypeId::Float64 => "float64",
            TypeId::Boolean => "boolean",
            TypeId::String => "string",
            TypeId::List => "list",
            TypeId::Map => "map",
            TypeId::Struct => "struct",
            TypeId::Class => "class",
            TypeId::Function => "function",
            TypeId::Method => "method",
        }
    }

    /// Name for a raw id byte; bytes outside the table are `"unknown"`.
    pub const fn name_of(raw: u8) -> &'static str {
        match Self::from_u8(raw) {
            Some(id) => id.name(),
            None => "unknown",
        }
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            TypeId::Uint8 | TypeId::Uint16 | TypeId::Uint32 | TypeId::Uint64
        )
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            TypeId::Int8 | TypeId::Int16 | TypeId::Int32 | TypeId::Int64
        )
    }

    pub const fn is_integer(self) -> bool {
        self.is_unsigned() || self.is_signed()
    }

    pub const fn is_float(self) -> bool {
        matches!(self, TypeId::Float32 | TypeId::Float64)
    }

    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Whether values of this kind may be pushed onto a thread's stack.
    pub const fn is_canonical(self) -> bool {
        matches!(self, TypeId::Uint64 | TypeId::Int64 | TypeId::Float64)
    }

    pub const fn is_reserved(self) -> bool {
        !self.is_numeric() && !matches!(self, TypeId::Void)
    }

    /// Size in bytes of a value of this kind. `None` for non-numeric kinds.
    pub const fn byte_size(self) -> Option<usize> {
        match self {
            TypeId::Uint8 | TypeId::Int8 => Some(1),
            TypeId::Uint16 | TypeId::Int16 => Some(2),
            TypeId::Uint32 | TypeId::Int32 | TypeId::Float32 => Some(4),
            TypeId::Uint64 | TypeId::Int64 | TypeId::Float64 => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TypeId {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        TypeId::from_u8(raw).ok_or(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbering_is_stable() {
        for (index, id) in TypeId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, index);
            assert_eq!(TypeId::from_u8(index as u8), Some(*id));
        }
        assert_eq!(TypeId::from_u8(19), None);
        assert_eq!(TypeId::try_from(255), Err(255));
    }

    #[test]
    fn test_names() {
        assert_eq!(TypeId::Void.to_string(), "void");
        assert_eq!(TypeId::Uint16.to_string(), "uint16");
        assert_eq!(TypeId::Int64.to_string(), "int64");
        assert_eq!(TypeId::Float32.to_string(), "float32");
        assert_eq!(TypeId::Boolean.to_string(), "boolean");
        assert_eq!(TypeId::Method.to_string(), "method");
        assert_eq!(TypeId::name_of(10), "float64");
        assert_eq!(TypeId::name_of(255), "unknown");
    }

    #[test]
    fn test_classification() {
        let numeric: Vec<_> = TypeId::ALL.iter().filter(|id| id.is_numeric()).collect();
        assert_eq!(numeric.len(), 10);

        let reserved: Vec<_> = TypeId::ALL
            .iter()
            .copied()
            .filter(|id| id.is_reserved())
            .collect();
        assert_eq!(reserved, TypeId::RESERVED.to_vec());

        assert!(!TypeId::Void.is_numeric());
        assert!(!TypeId::Void.is_reserved());
        assert!(TypeId::Uint64.is_canonical());
        assert!(!TypeId::Uint32.is_canonical());
        assert!(TypeId::Int8.is_signed() && !TypeId::Int8.is_unsigned());
    }

    #[test]
    fn test_byte_size() {
        assert_eq!(TypeId::Uint8.byte_size(), Some(1));
        assert_eq!(TypeId::Int16.byte_size(), Some(2));
        assert_eq!(TypeId::Float32.byte_size(), Some(4));
        assert_eq!(TypeId::Float64.byte_size(), Some(8));
        assert_eq!(TypeId::String.byte_size(), None);
        assert_eq!(TypeId::Void.byte_size(), None);
    }
}
