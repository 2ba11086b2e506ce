//! Immediate encoding.
//!
//! [`Writer`] mirrors the fetch functions: fixed-width writers always emit
//! exactly their width, and [`Writer::write_var_int`] picks the smallest of
//! the eight widths that holds the value. Assemblers and disassemblers must
//! agree with [`var_int_width`] byte for byte.

use core::convert::Infallible;

use super::bytes;
use crate::Vec;

/// Largest value representable in 1..=7 bytes.
const VAR_INT_LIMITS: [u64; 7] = [
    0xFF,
    0xFFFF,
    0xFF_FFFF,
    0xFFFF_FFFF,
    0xFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF,
    0xFF_FFFF_FFFF_FFFF,
];

/// Width in bytes that [`Writer::write_var_int`] uses for `value`.
pub fn var_int_width(value: u64) -> usize {
    VAR_INT_LIMITS
        .iter()
        .position(|&limit| value <= limit)
        .map_or(8, |index| index + 1)
}

/// Destination for encoded bytes.
///
/// Each call hands over one complete immediate. Implementations report how
/// many bytes they accepted; the [`Writer`] passes that count and any error
/// straight back to its caller without retrying.
pub trait ByteSink {
    type Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        (**self).write_bytes(bytes)
    }
}

/// Adapts any [`std::io::Write`] into a [`ByteSink`].
///
/// Uses a single `write` call per immediate, so a short write shows up as a
/// count smaller than the immediate's width.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    type Error = std::io::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.0.write(bytes)
    }
}

/// Writes immediates as big-endian bytes to a [`ByteSink`].
///
/// # Examples
///
/// ```
/// use cinder_core::bytecode::Writer;
///
/// let mut writer = Writer::new(Vec::new());
/// assert_eq!(writer.write_var_int(0x1234), Ok(2));
/// assert_eq!(writer.write_u24(0x56), Ok(3));
/// assert_eq!(writer.into_inner(), vec![0x12, 0x34, 0x00, 0x00, 0x56]);
/// ```
#[derive(Debug, Default)]
pub struct Writer<S> {
    sink: S,
}

impl<S: ByteSink> Writer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    #[inline]
    fn write_be(&mut self, value: u64, width: usize) -> Result<usize, S::Error> {
        self.sink.write_bytes(&bytes::to_be_bytes(value, width))
    }

    /// Writes `value` using the fewest bytes that can hold it.
    pub fn write_var_int(&mut self, value: u64) -> Result<usize, S::Error> {
        self.write_be(value, var_int_width(value))
    }

    /// Writes `value` as 1 byte.
    pub fn write_u8(&mut self, value: u8) -> Result<usize, S::Error> {
        self.write_be(value.into(), 1)
    }

    /// Writes `value` as 2 bytes.
    pub fn write_u16(&mut self, value: u16) -> Result<usize, S::Error> {
        self.write_be(value.into(), 2)
    }

    /// Writes the low 3 bytes of `value`; the most significant byte is
    /// ignored.
    pub fn write_u24(&mut self, value: u32) -> Result<usize, S::Error> {
        self.write_be(value.into(), 3)
    }

    /// Writes `value` as 4 bytes.
    pub fn write_u32(&mut self, value: u32) -> Result<usize, S::Error> {
        self.write_be(value.into(), 4)
    }

    /// Writes the low 5 bytes of `value`.
    pub fn write_u40(&mut self, value: u64) -> Result<usize, S::Error> {
        self.write_be(value, 5)
    }

    /// Writes the low 6 bytes of `value`.
    pub fn write_u48(&mut self, value: u64) -> Result<usize, S::Error> {
        self.write_be(value, 6)
    }

    /// Writes the low 7 bytes of `value`.
    pub fn write_u56(&mut self, value: u64) -> Result<usize, S::Error> {
        self.write_be(value, 7)
    }

    /// Writes `value` as 8 bytes.
    pub fn write_u64(&mut self, value: u64) -> Result<usize, S::Error> {
        self.write_be(value, 8)
    }
}
