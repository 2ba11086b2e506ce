//! Big-endian byte assembly.
//!
//! This is the single place where bytes are folded into integers and
//! integers are split back into bytes.

use smallvec::SmallVec;

/// Inline buffer large enough for any immediate.
pub type ImmediateBytes = SmallVec<[u8; 8]>;

/// Folds up to 8 bytes into a `u64`, most significant byte first.
///
/// An empty slice assembles to 0.
#[inline]
pub fn assemble(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "cannot assemble {} bytes", bytes.len());
    bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Returns the low `width` bytes of `value` in big-endian order.
///
/// Higher bytes that do not fit in `width` are dropped. `width` is clamped
/// to 8.
#[inline]
pub fn to_be_bytes(value: u64, width: usize) -> ImmediateBytes {
    let width = width.min(8);
    SmallVec::from_slice(&value.to_be_bytes()[8 - width..])
}

/// Returns how many bytes are needed to hold `value`.
///
/// Zero still takes one byte.
pub fn unsigned_byte_size(value: u64) -> usize {
    if value == 0 {
        return 1;
    }
    let bit_len = (u64::BITS - value.leading_zeros()) as usize;
    bit_len.div_ceil(8)
}

/// Returns the smallest big-endian byte representation of `value`.
pub fn unsigned_to_bytes(value: u64) -> ImmediateBytes {
    to_be_bytes(value, unsigned_byte_size(value))
}

/// Builds an unsigned integer from big-endian bytes.
///
/// An empty slice yields 0. Only the first 8 bytes of a longer slice are
/// used.
pub fn unsigned_from_bytes(data: &[u8]) -> u64 {
    assemble(&data[..data.len().min(8)])
}
