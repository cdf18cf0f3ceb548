//! Variable-length integer (vint) parsing for RAR5.
//!
//! RAR5 uses variable-length integers where each byte contributes 7 bits
//! of data, and the high bit indicates if more bytes follow.
//!
//! Format:
//! - Bits 0-6: Data bits, least significant group first
//! - Bit 7: Continuation flag (1 = more bytes follow)

/// Longest accepted encoding. Ten 7-bit groups cover a `u64`.
pub const MAX_VINT_LEN: usize = 10;

/// Read a variable-length integer from a byte slice.
/// Returns the value and the number of bytes consumed, or `None` when the
/// slice ends mid-value or the value runs past [`MAX_VINT_LEN`] bytes.
#[inline]
pub fn read_vint(data: &[u8]) -> Option<(u64, usize)> {
    let mut result = 0u64;
    let mut shift = 0;

    for (i, &byte) in data.iter().take(MAX_VINT_LEN).enumerate() {
        result |= u64::from(byte & 0x7F) << shift;

        if byte & 0x80 == 0 {
            return Some((result, i + 1));
        }

        shift += 7;
    }

    None
}

/// Cursor for reading consecutive fields out of one header.
pub struct VintReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> VintReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Read the next vint from the buffer.
    #[inline]
    pub fn read(&mut self) -> Option<u64> {
        let (value, consumed) = read_vint(self.remaining())?;
        self.offset += consumed;
        Some(value)
    }

    /// Read a fixed number of bytes.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Option<&'a [u8]> {
        let end = self.offset.checked_add(count)?;
        let slice = self.data.get(self.offset..end)?;
        self.offset = end;
        Some(slice)
    }

    /// Read a u32 in little-endian format.
    #[inline]
    pub fn read_u32_le(&mut self) -> Option<u32> {
        let bytes = self.read_bytes(4)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Current position in the buffer.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Remaining bytes in the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    /// Skip ahead by a number of bytes.
    pub fn skip(&mut self, count: usize) -> bool {
        self.read_bytes(count).is_some()
    }
}
