//! Numeric values and the widening/narrowing rules between them.

use core::fmt;

use super::{CastError, TypeId};

/// A numeric value of any width.
///
/// Every kind knows its [`TypeId`], its size in bytes, and how to widen
/// itself to the canonical member of its family with [`Value::upcast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

/// A value that may be pushed onto a thread's stack.
///
/// These are the widest kinds of each family. Besides everything a
/// [`Value`] can do, a stack value can be [downcast](StackValue::downcast)
/// to any numeric kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackValue {
    Uint64(u64),
    Int64(i64),
    Float64(f64),
}

impl Value {
    pub const fn type_id(&self) -> TypeId {
        match self {
            Value::Uint8(_) => TypeId::Uint8,
            Value::Uint16(_) => TypeId::Uint16,
            Value::Uint32(_) => TypeId::Uint32,
            Value::Uint64(_) => TypeId::Uint64,
            Value::Int8(_) => TypeId::Int8,
            Value::Int16(_) => TypeId::Int16,
            Value::Int32(_) => TypeId::Int32,
            Value::Int64(_) => TypeId::Int64,
            Value::Float32(_) => TypeId::Float32,
            Value::Float64(_) => TypeId::Float64,
        }
    }

    /// Size of the value in bytes.
    pub const fn size(&self) -> usize {
        match self {
            Value::Uint8(_) | Value::Int8(_) => 1,
            Value::Uint16(_) | Value::Int16(_) => 2,
            Value::Uint32(_) | Value::Int32(_) | Value::Float32(_) => 4,
            Value::Uint64(_) | Value::Int64(_) | Value::Float64(_) => 8,
        }
    }

    /// Widens to the canonical kind of the same family.
    ///
    /// Unsigned kinds become `Uint64`, signed kinds `Int64` (sign preserved)
    /// and floats `Float64`. Canonical kinds are returned unchanged.
    pub fn upcast(self) -> StackValue {
        match self {
            Value::Uint8(v) => StackValue::Uint64(v.into()),
            Value::Uint16(v) => StackValue::Uint64(v.into()),
            Value::Uint32(v) => StackValue::Uint64(v.into()),
            Value::Uint64(v) => StackValue::Uint64(v),
            Value::Int8(v) => StackValue::Int64(v.into()),
            Value::Int16(v) => StackValue::Int64(v.into()),
            Value::Int32(v) => StackValue::Int64(v.into()),
            Value::Int64(v) => StackValue::Int64(v),
            Value::Float32(v) => StackValue::Float64(v.into()),
            Value::Float64(v) => StackValue::Float64(v),
        }
    }

    /// Returns the value as a [`StackValue`] if it already is one.
    ///
    /// Unlike [`upcast`](Value::upcast) this never widens.
    pub fn as_stack_value(self) -> Option<StackValue> {
        match self {
            Value::Uint64(v) => Some(StackValue::Uint64(v)),
            Value::Int64(v) => Some(StackValue::Int64(v)),
            Value::Float64(v) => Some(StackValue::Float64(v)),
            _ => None,
        }
    }
}

impl StackValue {
    pub const fn type_id(&self) -> TypeId {
        match self {
            StackValue::Uint64(_) => TypeId::Uint64,
            StackValue::Int64(_) => TypeId::Int64,
            StackValue::Float64(_) => TypeId::Float64,
        }
    }

    /// Always 8: every canonical kind is 64 bits wide.
    pub const fn size(&self) -> usize {
        8
    }

    /// Identity; a stack value is already canonical.
    pub fn upcast(self) -> StackValue {
        self
    }

    /// Converts to the numeric kind named by `to`.
    ///
    /// - Integer to integer keeps the low bits of the two's-complement
    ///   representation, so `Uint64(257)` becomes `Uint8(1)` and `Int64(-2)`
    ///   becomes `Uint8(254)`.
    /// - Integer to float is the nearest representable float.
    /// - Float to integer truncates toward zero, then wraps like an integer
    ///   conversion: `Float64(-1.0)` becomes `Uint8(255)`. NaN, infinities
    ///   and magnitudes of 2^127 or more have no low bits left and become 0.
    /// - Float to float rounds to the target precision.
    ///
    /// Fails with [`CastError`] when `to` is `Void` or one of the reserved
    /// non-numeric kinds.
    pub fn downcast(self, to: TypeId) -> Result<Value, CastError> {
        let converted = match self {
            StackValue::Uint64(v) => from_u64(v, to),
            StackValue::Int64(v) => from_i64(v, to),
            StackValue::Float64(v) => from_f64(v, to),
        };
        converted.ok_or(CastError {
            from: self.type_id(),
            to,
        })
    }
}

fn from_u64(v: u64, to: TypeId) -> Option<Value> {
    Some(match to {
        TypeId::Uint8 => Value::Uint8(v as u8),
        TypeId::Uint16 => Value::Uint16(v as u16),
        TypeId::Uint32 => Value::Uint32(v as u32),
        TypeId::Uint64 => Value::Uint64(v),
        TypeId::Int8 => Value::Int8(v as i8),
        TypeId::Int16 => Value::Int16(v as i16),
        TypeId::Int32 => Value::Int32(v as i32),
        TypeId::Int64 => Value::Int64(v as i64),
        TypeId::Float32 => Value::Float32(v as f32),
        TypeId::Float64 => Value::Float64(v as f64),
        _ => return None,
    })
}

fn from_i64(v: i64, to: TypeId) -> Option<Value> {
    match to {
        TypeId::Float32 => Some(Value::Float32(v as f32)),
        TypeId::Float64 => Some(Value::Float64(v as f64)),
        // Integer targets only look at the low bits, which are the same
        // whether the source is read as signed or unsigned.
        _ => from_u64(v as u64, to),
    }
}

/// 2^127; the smallest magnitude whose low 64 bits are always zero once it
/// is known not to fit an `i128`.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Low 64 bits of `v` truncated toward zero, in two's complement.
fn truncated_bits(v: f64) -> u64 {
    // Also rejects NaN and the infinities.
    if !(v > -I128_LIMIT && v < I128_LIMIT) {
        return 0;
    }
    // In range, `as i128` truncates toward zero without saturating.
    (v as i128) as u64
}

fn from_f64(v: f64, to: TypeId) -> Option<Value> {
    match to {
        TypeId::Float32 => Some(Value::Float32(v as f32)),
        TypeId::Float64 => Some(Value::Float64(v)),
        _ => from_u64(truncated_bits(v), to),
    }
}

impl From<StackValue> for Value {
    fn from(value: StackValue) -> Self {
        match value {
            StackValue::Uint64(v) => Value::Uint64(v),
            StackValue::Int64(v) => Value::Int64(v),
            StackValue::Float64(v) => Value::Float64(v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint8(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Uint16(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Uint32(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Uint64(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Int8(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Int16(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Int32(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Int64(v) => write!(f, "{}({})", self.type_id(), v),
            Value::Float32(v) => write!(f, "{}({:?})", self.type_id(), v),
            Value::Float64(v) => write!(f, "{}({:?})", self.type_id(), v),
        }
    }
}

impl fmt::Display for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(*self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NUMERIC: [TypeId; 10] = [
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
    ];

    #[test]
    fn test_identity_and_size() {
        let values = [
            (Value::Uint8(1), TypeId::Uint8, 1),
            (Value::Uint16(1), TypeId::Uint16, 2),
            (Value::Uint32(1), TypeId::Uint32, 4),
            (Value::Uint64(1), TypeId::Uint64, 8),
            (Value::Int8(1), TypeId::Int8, 1),
            (Value::Int16(1), TypeId::Int16, 2),
            (Value::Int32(1), TypeId::Int32, 4),
            (Value::Int64(1), TypeId::Int64, 8),
            (Value::Float32(1.0), TypeId::Float32, 4),
            (Value::Float64(1.0), TypeId::Float64, 8),
        ];
        for (value, id, size) in values {
            assert_eq!(value.type_id(), id);
            assert_eq!(value.size(), size);
            assert_eq!(id.byte_size(), Some(size));
        }
    }

    #[test]
    fn test_upcast_to_family() {
        assert_eq!(Value::Uint8(200).upcast(), StackValue::Uint64(200));
        assert_eq!(Value::Uint16(0xFFFF).upcast(), StackValue::Uint64(0xFFFF));
        assert_eq!(Value::Uint32(7).upcast(), StackValue::Uint64(7));
        assert_eq!(Value::Int8(-128).upcast(), StackValue::Int64(-128));
        assert_eq!(Value::Int16(-2).upcast(), StackValue::Int64(-2));
        assert_eq!(Value::Int32(i32::MIN).upcast(), StackValue::Int64(i32::MIN as i64));
        assert_eq!(Value::Float32(1.5).upcast(), StackValue::Float64(1.5));
        assert_eq!(Value::Float64(-0.25).upcast(), StackValue::Float64(-0.25));
    }

    #[test]
    fn test_canonical_values() {
        assert_eq!(Value::Uint64(3).as_stack_value(), Some(StackValue::Uint64(3)));
        assert_eq!(Value::Int64(-3).as_stack_value(), Some(StackValue::Int64(-3)));
        assert_eq!(Value::Uint8(3).as_stack_value(), None);
        assert_eq!(Value::Float32(3.0).as_stack_value(), None);

        for value in [
            StackValue::Uint64(9),
            StackValue::Int64(-9),
            StackValue::Float64(9.5),
        ] {
            assert_eq!(value.upcast(), value);
            assert_eq!(value.size(), 8);
            assert!(value.type_id().is_canonical());
        }
    }

    #[test]
    fn test_downcast_identity() {
        for value in [
            StackValue::Uint64(u64::MAX),
            StackValue::Int64(i64::MIN),
            StackValue::Float64(-12.75),
        ] {
            assert_eq!(value.downcast(value.type_id()), Ok(Value::from(value)));
        }
    }

    #[test]
    fn test_downcast_wraps_integers() {
        assert_eq!(StackValue::Uint64(257).downcast(TypeId::Uint8), Ok(Value::Uint8(1)));
        assert_eq!(StackValue::Int64(-2).downcast(TypeId::Uint8), Ok(Value::Uint8(254)));
        assert_eq!(
            StackValue::Uint64(0x1_0000_FFFF).downcast(TypeId::Uint32),
            Ok(Value::Uint32(0xFFFF))
        );
        assert_eq!(StackValue::Uint64(0xFF).downcast(TypeId::Int8), Ok(Value::Int8(-1)));
        assert_eq!(
            StackValue::Uint64(u64::MAX).downcast(TypeId::Int64),
            Ok(Value::Int64(-1))
        );
        assert_eq!(
            StackValue::Int64(-1).downcast(TypeId::Uint64),
            Ok(Value::Uint64(u64::MAX))
        );
        assert_eq!(
            StackValue::Int64(40_000).downcast(TypeId::Int16),
            Ok(Value::Int16(-25_536))
        );
    }

    #[test]
    fn test_downcast_integer_to_float() {
        assert_eq!(StackValue::Uint64(3).downcast(TypeId::Float64), Ok(Value::Float64(3.0)));
        assert_eq!(StackValue::Int64(-3).downcast(TypeId::Float32), Ok(Value::Float32(-3.0)));
        assert_eq!(
            StackValue::Uint64(u64::MAX).downcast(TypeId::Float64),
            Ok(Value::Float64(18_446_744_073_709_551_615.0))
        );
    }

    #[test]
    fn test_downcast_float_truncates_then_wraps() {
        assert_eq!(StackValue::Float64(-1.0).downcast(TypeId::Uint8), Ok(Value::Uint8(255)));
        assert_eq!(StackValue::Float64(2.9).downcast(TypeId::Int32), Ok(Value::Int32(2)));
        assert_eq!(StackValue::Float64(-2.9).downcast(TypeId::Int32), Ok(Value::Int32(-2)));
        assert_eq!(StackValue::Float64(256.5).downcast(TypeId::Uint8), Ok(Value::Uint8(0)));
        assert_eq!(StackValue::Float64(300.0).downcast(TypeId::Int8), Ok(Value::Int8(44)));
        // -129 wraps past i8::MIN to the top of the range
        assert_eq!(StackValue::Float64(-129.7).downcast(TypeId::Int8), Ok(Value::Int8(127)));
        assert_eq!(
            StackValue::Float64(-40_000.0).downcast(TypeId::Int16),
            Ok(Value::Int16(25_536))
        );
        assert_eq!(
            StackValue::Float64(-0.5).downcast(TypeId::Uint16),
            Ok(Value::Uint16(0))
        );
        // 2^64 + 2^12 keeps only the 2^12 bit
        assert_eq!(
            StackValue::Float64(18_446_744_073_709_555_712.0).downcast(TypeId::Uint64),
            Ok(Value::Uint64(4096))
        );
        assert_eq!(
            StackValue::Float64(-1.0).downcast(TypeId::Uint64),
            Ok(Value::Uint64(u64::MAX))
        );
    }

    #[test]
    fn test_downcast_float_without_low_bits() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e40, -1e40] {
            assert_eq!(StackValue::Float64(v).downcast(TypeId::Uint32), Ok(Value::Uint32(0)));
            assert_eq!(StackValue::Float64(v).downcast(TypeId::Int64), Ok(Value::Int64(0)));
        }
    }

    #[test]
    fn test_downcast_float_to_float() {
        assert_eq!(
            StackValue::Float64(0.1).downcast(TypeId::Float32),
            Ok(Value::Float32(0.1f64 as f32))
        );
    }

    #[test]
    fn test_downcast_rejects_reserved_kinds() {
        for value in [
            StackValue::Uint64(1),
            StackValue::Int64(1),
            StackValue::Float64(1.0),
        ] {
            for target in TypeId::RESERVED.iter().copied().chain([TypeId::Void]) {
                assert_eq!(
                    value.downcast(target),
                    Err(CastError {
                        from: value.type_id(),
                        to: target
                    })
                );
            }
        }
    }

    #[test]
    fn test_downcast_accepts_every_numeric_kind() {
        for target in NUMERIC {
            let value = StackValue::Int64(5).downcast(target).unwrap();
            assert_eq!(value.type_id(), target);
            assert_eq!(value.upcast().downcast(target), Ok(value));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Uint8(7).to_string(), "uint8(7)");
        assert_eq!(StackValue::Int64(-7).to_string(), "int64(-7)");
        assert_eq!(StackValue::Float64(1.0).to_string(), "float64(1.0)");
        assert_eq!(
            CastError {
                from: TypeId::Int64,
                to: TypeId::String
            }
            .to_string(),
            "unable to cast int64 to string"
        );
    }
}
