//! Cinder opcode table.
//!
//! Every instruction starts with a single opcode byte. Immediates, when an
//! opcode has any, follow inline and are read with the
//! [`bytecode`](crate::bytecode) codec at the width the opcode defines.
//!
//! # Stack Discipline
//!
//! Stack effect notation: `[..., a, b] -> [..., result]`, top of stack
//! rightmost. The contracts below are binding for any handler added to the
//! dispatcher; today only [`Opcode::NoOp`] has one.
//!
//! The numbering is stable and starts at `0x00` with `NoOp`, so zeroed
//! memory decodes as a run of no-ops.

use core::fmt;

/// A single opcode (exactly one byte).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // ========================================================================
    // Special (0x00)
    // ========================================================================
    /// Do nothing for one cycle.
    /// Stack: [...] -> [...]
    NoOp = 0x00,

    // ========================================================================
    // Stack manipulation (0x01 - 0x06)
    // ========================================================================
    /// Push an immediate value.
    /// Stack: [...] -> [..., v]
    Push = 0x01,

    /// Duplicate the top value.
    /// Stack: [..., v] -> [..., v, v]
    Dupe = 0x02,

    /// Discard the top value.
    /// Stack: [..., v] -> [...]
    Pop = 0x03,

    /// Swap the top two values.
    /// Stack: [..., a, b] -> [..., b, a]
    Swap = 0x04,

    /// Reverse the whole stack.
    /// Stack: [..., s0..sN] -> [..., sN..s0]
    Reverse = 0x05,

    /// Push the current stack length.
    /// Stack: [..., s0..sN] -> [..., s0..sN, N]
    Length = 0x06,

    // ========================================================================
    // Arithmetic (0x07 - 0x0D)
    //
    // `a` is the deeper operand and `b` the top; the top is the left-hand
    // side of the operation.
    // ========================================================================
    /// Stack: [..., a, b] -> [..., b + a]
    Add = 0x07,

    /// Stack: [..., a, b] -> [..., b - a]
    Sub = 0x08,

    /// Stack: [..., a, b] -> [..., b * a]
    Mul = 0x09,

    /// Stack: [..., a, b] -> [..., b / a]
    Div = 0x0A,

    /// Floor division.
    /// Stack: [..., a, b] -> [..., floor(b / a)]
    FDiv = 0x0B,

    /// Stack: [..., a, b] -> [..., b % a]
    Mod = 0x0C,

    /// Stack: [..., a, b] -> [..., floor(b / a), b % a]
    DivMod = 0x0D,

    // ========================================================================
    // Bitwise (0x0E - 0x11)
    // ========================================================================
    /// Stack: [..., a, b] -> [..., a & b]
    And = 0x0E,

    /// Stack: [..., a, b] -> [..., a | b]
    Or = 0x0F,

    /// Stack: [..., a, b] -> [..., a ^ b]
    Xor = 0x10,

    /// Stack: [..., v] -> [..., ~v]
    Not = 0x11,
    // 0x12-0xFF reserved
}
static_assertions::assert_eq_size!(Opcode, u8);

/// How many stack slots an opcode consumes or produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    /// Depends on the stack depth at run time.
    Variable,
}

/// Stack contract of an opcode: values popped, then values pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEffect {
    pub pops: Arity,
    pub pushes: Arity,
}

impl StackEffect {
    const fn fixed(pops: usize, pushes: usize) -> Self {
        Self {
            pops: Arity::Fixed(pops),
            pushes: Arity::Fixed(pushes),
        }
    }

    /// Minimum stack depth the opcode needs.
    pub const fn required_depth(&self) -> usize {
        match self.pops {
            Arity::Fixed(n) => n,
            Arity::Variable => 0,
        }
    }

    /// Change in stack depth, if it is known statically.
    pub const fn net(&self) -> Option<isize> {
        match (self.pops, self.pushes) {
            (Arity::Fixed(pops), Arity::Fixed(pushes)) => Some(pushes as isize - pops as isize),
            // Reverse pops and pushes the same values
            (Arity::Variable, Arity::Variable) => Some(0),
            _ => None,
        }
    }
}

impl Opcode {
    /// Every opcode, in numbering order.
    pub const ALL: [Opcode; 18] = [
        Opcode::NoOp,
        Opcode::Push,
        Opcode::Dupe,
        Opcode::Pop,
        Opcode::Swap,
        Opcode::Reverse,
        Opcode::Length,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::FDiv,
        Opcode::Mod,
        Opcode::DivMod,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Not,
    ];

    /// Decodes an opcode byte.
    pub const fn from_byte(byte: u8) -> Option<Opcode> {
        if (byte as usize) < Self::ALL.len() {
            Some(Self::ALL[byte as usize])
        } else {
            None
        }
    }

    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::NoOp => "NoOp",
            Self::Push => "Push",
            Self::Dupe => "Dupe",
            Self::Pop => "Pop",
            Self::Swap => "Swap",
            Self::Reverse => "Reverse",
            Self::Length => "Length",
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::FDiv => "FDiv",
            Self::Mod => "Mod",
            Self::DivMod => "DivMod",
            Self::And => "And",
            Self::Or => "Or",
            Self::Xor => "Xor",
            Self::Not => "Not",
        }
    }

    pub const fn stack_effect(&self) -> StackEffect {
        match self {
            Self::NoOp => StackEffect::fixed(0, 0),
            Self::Push => StackEffect::fixed(0, 1),
            Self::Dupe => StackEffect::fixed(1, 2),
            Self::Pop => StackEffect::fixed(1, 0),
            Self::Swap => StackEffect::fixed(2, 2),
            Self::Reverse => StackEffect {
                pops: Arity::Variable,
                pushes: Arity::Variable,
            },
            Self::Length => StackEffect::fixed(0, 1),
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::FDiv | Self::Mod => {
                StackEffect::fixed(2, 1)
            }
            Self::DivMod => StackEffect::fixed(2, 2),
            Self::And | Self::Or | Self::Xor => StackEffect::fixed(2, 1),
            Self::Not => StackEffect::fixed(1, 1),
        }
    }

    /// Whether the dispatcher has a handler for this opcode.
    pub const fn is_implemented(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.mnemonic(), *self as u8)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A byte that does not name any opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOpcode(pub u8);

impl fmt::Display for UnknownOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid opcode: 0x{:02X}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownOpcode {}

impl TryFrom<u8> for Opcode {
    type Error = UnknownOpcode;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(UnknownOpcode(byte))
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_opcode_size() {
        // Critical: opcodes must be exactly 1 byte
        assert_eq!(core::mem::size_of::<Opcode>(), 1);
    }

    #[test]
    fn test_numbering_is_dense_from_noop() {
        assert_eq!(Opcode::NoOp as u8, 0);
        for (index, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(u8::from(*op) as usize, index);
            assert_eq!(Opcode::try_from(index as u8), Ok(*op));
        }
        assert_eq!(Opcode::try_from(0x12), Err(UnknownOpcode(0x12)));
        assert_eq!(Opcode::from_byte(0xFF), None);
    }

    #[test]
    fn test_stack_effects() {
        assert_eq!(Opcode::NoOp.stack_effect().net(), Some(0));
        assert_eq!(Opcode::Push.stack_effect().net(), Some(1));
        assert_eq!(Opcode::Dupe.stack_effect().net(), Some(1));
        assert_eq!(Opcode::Pop.stack_effect().net(), Some(-1));
        assert_eq!(Opcode::Swap.stack_effect().net(), Some(0));
        assert_eq!(Opcode::Reverse.stack_effect().net(), Some(0));
        assert_eq!(Opcode::Length.stack_effect().net(), Some(1));
        assert_eq!(Opcode::DivMod.stack_effect().net(), Some(0));
        assert_eq!(Opcode::Not.stack_effect().net(), Some(0));

        for op in [Opcode::Add, Opcode::Sub, Opcode::Mul, Opcode::Div, Opcode::FDiv, Opcode::Mod] {
            assert_eq!(op.stack_effect(), StackEffect::fixed(2, 1), "{op}");
        }
        for op in [Opcode::And, Opcode::Or, Opcode::Xor] {
            assert_eq!(op.stack_effect().required_depth(), 2, "{op}");
        }
        assert_eq!(Opcode::Reverse.stack_effect().required_depth(), 0);
    }

    #[test]
    fn test_only_noop_is_implemented() {
        let implemented: Vec<_> = Opcode::ALL
            .iter()
            .filter(|op| op.is_implemented())
            .collect();
        assert_eq!(implemented, vec![&Opcode::NoOp]);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", Opcode::DivMod), "DivMod");
        assert_eq!(format!("{:?}", Opcode::Xor), "Xor(0x10)");
        assert_eq!(UnknownOpcode(0xAB).to_string(), "Invalid opcode: 0xAB");
    }
}
