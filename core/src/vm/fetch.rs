//! Immediate operand fetches on a [`Thread`].
//!
//! These read from the thread's code at its program counter and advance the
//! counter only when the read succeeds. Signed fetches reinterpret the same
//! big-endian bytes as two's complement.

use super::{ExecutionError, Thread};
use crate::bytecode::{MAX_IMMEDIATE_SIZE, read_be};

static_assertions::const_assert_eq!(MAX_IMMEDIATE_SIZE, 8);

/// Sign bit of a 3-byte immediate held in a `u32`.
pub const INT24_NEGATIVE_BIT: u32 = 0x0080_0000;
/// Fills the top byte of a `u32` holding a negative 3-byte immediate.
pub const INT24_SIGN_EXTEND: u32 = 0xFF00_0000;

pub const INT40_NEGATIVE_BIT: u64 = 0x0000_0080_0000_0000;
pub const INT40_SIGN_EXTEND: u64 = 0xFFFF_FF00_0000_0000;

pub const INT48_NEGATIVE_BIT: u64 = 0x0000_8000_0000_0000;
pub const INT48_SIGN_EXTEND: u64 = 0xFFFF_0000_0000_0000;

pub const INT56_NEGATIVE_BIT: u64 = 0x0080_0000_0000_0000;
pub const INT56_SIGN_EXTEND: u64 = 0xFF00_0000_0000_0000;

#[inline]
fn sign_extend(bits: u64, negative: u64, extend: u64) -> i64 {
    if bits & negative != 0 {
        (bits | extend) as i64
    } else {
        bits as i64
    }
}

impl Thread<'_> {
    #[inline]
    fn fetch_bits(&mut self, width: usize) -> Result<u64, ExecutionError> {
        let (pc, bits) = read_be(self.code, self.pc, width)?;
        self.pc = pc;
        Ok(bits)
    }

    pub fn fetch_u8(&mut self) -> Result<u8, ExecutionError> {
        self.fetch_bits(1).map(|bits| bits as u8)
    }

    pub fn fetch_u16(&mut self) -> Result<u16, ExecutionError> {
        self.fetch_bits(2).map(|bits| bits as u16)
    }

    pub fn fetch_u24(&mut self) -> Result<u32, ExecutionError> {
        self.fetch_bits(3).map(|bits| bits as u32)
    }

    pub fn fetch_u32(&mut self) -> Result<u32, ExecutionError> {
        self.fetch_bits(4).map(|bits| bits as u32)
    }

    pub fn fetch_u40(&mut self) -> Result<u64, ExecutionError> {
        self.fetch_bits(5)
    }

    pub fn fetch_u48(&mut self) -> Result<u64, ExecutionError> {
        self.fetch_bits(6)
    }

    pub fn fetch_u56(&mut self) -> Result<u64, ExecutionError> {
        self.fetch_bits(7)
    }

    pub fn fetch_u64(&mut self) -> Result<u64, ExecutionError> {
        self.fetch_bits(8)
    }

    /// Fetches a `count`-byte unsigned immediate.
    ///
    /// `count` must be in 1..=8; anything else, including 0, fails with
    /// [`ExecutionError::InvalidImmediateSize`].
    pub fn fetch_unsigned(&mut self, count: isize) -> Result<u64, ExecutionError> {
        match count {
            1..=8 => self.fetch_bits(count as usize),
            _ => Err(ExecutionError::InvalidImmediateSize { requested: count }),
        }
    }

    pub fn fetch_i8(&mut self) -> Result<i8, ExecutionError> {
        self.fetch_bits(1).map(|bits| bits as u8 as i8)
    }

    pub fn fetch_i16(&mut self) -> Result<i16, ExecutionError> {
        self.fetch_bits(2).map(|bits| bits as u16 as i16)
    }

    /// Fetches a 3-byte signed immediate, sign-extended into an `i32`.
    pub fn fetch_i24(&mut self) -> Result<i32, ExecutionError> {
        let bits = self.fetch_bits(3)? as u32;
        if bits & INT24_NEGATIVE_BIT != 0 {
            Ok((bits | INT24_SIGN_EXTEND) as i32)
        } else {
            Ok(bits as i32)
        }
    }

    pub fn fetch_i32(&mut self) -> Result<i32, ExecutionError> {
        self.fetch_bits(4).map(|bits| bits as u32 as i32)
    }

    /// Fetches a 5-byte signed immediate, sign-extended into an `i64`.
    pub fn fetch_i40(&mut self) -> Result<i64, ExecutionError> {
        let bits = self.fetch_bits(5)?;
        Ok(sign_extend(bits, INT40_NEGATIVE_BIT, INT40_SIGN_EXTEND))
    }

    /// Fetches a 6-byte signed immediate, sign-extended into an `i64`.
    pub fn fetch_i48(&mut self) -> Result<i64, ExecutionError> {
        let bits = self.fetch_bits(6)?;
        Ok(sign_extend(bits, INT48_NEGATIVE_BIT, INT48_SIGN_EXTEND))
    }

    /// Fetches a 7-byte signed immediate, sign-extended into an `i64`.
    pub fn fetch_i56(&mut self) -> Result<i64, ExecutionError> {
        let bits = self.fetch_bits(7)?;
        Ok(sign_extend(bits, INT56_NEGATIVE_BIT, INT56_SIGN_EXTEND))
    }

    pub fn fetch_i64(&mut self) -> Result<i64, ExecutionError> {
        self.fetch_bits(8).map(|bits| bits as i64)
    }

    /// Fetches a `count`-byte signed immediate widened to `i64`.
    ///
    /// `count` must be in 1..=8; anything else, including 0, fails with
    /// [`ExecutionError::InvalidImmediateSize`].
    pub fn fetch_signed(&mut self, count: isize) -> Result<i64, ExecutionError> {
        match count {
            1 => self.fetch_i8().map(i64::from),
            2 => self.fetch_i16().map(i64::from),
            3 => self.fetch_i24().map(i64::from),
            4 => self.fetch_i32().map(i64::from),
            5 => self.fetch_i40(),
            6 => self.fetch_i48(),
            7 => self.fetch_i56(),
            8 => self.fetch_i64(),
            _ => Err(ExecutionError::InvalidImmediateSize { requested: count }),
        }
    }
}
