//! Fixed-width unsigned immediate fetches.
//!
//! Every fetch takes the buffer and a signed cursor and returns the advanced
//! cursor together with the value. A fetch either consumes exactly its width
//! or fails without consuming anything.

use core::ops::Range;

use super::{FetchError, bytes};

/// Widest immediate the codec can read, in bytes.
pub const MAX_IMMEDIATE_SIZE: usize = 8;

/// Byte range `[pc, pc + count)` if it lies inside `data`.
#[inline]
fn span(data: &[u8], pc: isize, count: usize) -> Option<Range<usize>> {
    let start = usize::try_from(pc).ok()?;
    let end = start.checked_add(count)?;
    (end <= data.len()).then_some(start..end)
}

/// Reads `count` bytes at `pc` as a big-endian unsigned integer.
///
/// `count` must not exceed [`MAX_IMMEDIATE_SIZE`].
#[inline]
pub(crate) fn read_be(data: &[u8], pc: isize, count: usize) -> Result<(isize, u64), FetchError> {
    debug_assert!(count <= MAX_IMMEDIATE_SIZE);
    let range = span(data, pc, count).ok_or(FetchError::NotEnoughBytes { requested: count })?;
    // `range.end <= data.len() <= isize::MAX`, so the new cursor cannot overflow.
    Ok((range.end as isize, bytes::assemble(&data[range])))
}

macro_rules! fixed_fetch {
    ($(#[$doc:meta])* $name:ident, $width:literal, $ty:ty) => {
        $(#[$doc])*
        ///
        /// Returns the cursor after the read together with the value. Fails
        /// with [`FetchError::NotEnoughBytes`] if `pc` is negative or fewer
        #[doc = concat!("than ", stringify!($width), " bytes remain.")]
        #[inline]
        pub fn $name(data: &[u8], pc: isize) -> Result<(isize, $ty), FetchError> {
            let (pc, value) = read_be(data, pc, $width)?;
            Ok((pc, value as $ty))
        }
    };
}

fixed_fetch!(
    /// Reads 1 byte starting at `pc`.
    fetch_u8, 1, u8
);
fixed_fetch!(
    /// Reads 2 bytes starting at `pc` as a `u16`.
    fetch_u16, 2, u16
);
fixed_fetch!(
    /// Reads 3 bytes starting at `pc`. There is no 24-bit integer, so the
    /// value is returned as a `u32`.
    fetch_u24, 3, u32
);
fixed_fetch!(
    /// Reads 4 bytes starting at `pc` as a `u32`.
    fetch_u32, 4, u32
);
fixed_fetch!(
    /// Reads 5 bytes starting at `pc`, returned as a `u64`.
    fetch_u40, 5, u64
);
fixed_fetch!(
    /// Reads 6 bytes starting at `pc`, returned as a `u64`.
    fetch_u48, 6, u64
);
fixed_fetch!(
    /// Reads 7 bytes starting at `pc`, returned as a `u64`.
    fetch_u56, 7, u64
);
fixed_fetch!(
    /// Reads 8 bytes starting at `pc` as a `u64`.
    fetch_u64, 8, u64
);

/// Reads `count` bytes starting at `pc` as a big-endian `u64`.
///
/// A negative `count` fails with [`FetchError::Underflow`] and a `count`
/// above 8 with [`FetchError::Overflow`]. Otherwise the usual bounds check
/// applies.
///
/// A `count` of 0 is accepted here: it reads nothing, returns 0 and leaves
/// the cursor where it was (provided the cursor itself is inside the
/// buffer or at its end). The thread-level dispatchers reject that width.
pub fn fetch_n(data: &[u8], pc: isize, count: isize) -> Result<(isize, u64), FetchError> {
    if count < 0 {
        return Err(FetchError::Underflow { requested: count });
    }
    if count > MAX_IMMEDIATE_SIZE as isize {
        return Err(FetchError::Overflow { requested: count });
    }
    read_be(data, pc, count as usize)
}
