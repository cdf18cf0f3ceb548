//! RAR4 block header parser.
//!
//! Every RAR4 block starts with the same 7 bytes:
//! CRC16 (2), type (1), flags (2), header size (2).
//! Blocks with `LONG_BLOCK` set carry a 32-bit payload size at +7.

use super::read_u32_le;

/// Marker block (the signature itself reads as one).
pub const MARK_HEADER: u8 = 0x72;
/// Main archive header.
pub const MAIN_HEADER: u8 = 0x73;
/// File header.
pub const FILE_HEADER: u8 = 0x74;
/// End of archive.
pub const END_OF_ARCHIVE: u8 = 0x7B;

/// Payload of `add_size` bytes follows the header.
pub const LONG_BLOCK: u16 = 0x8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Header CRC16; informational only.
    pub crc: u16,
    pub header_type: u8,
    pub flags: u16,
    /// Size of the whole header including these 7 bytes.
    pub size: u16,
    /// Trailing payload size, 0 unless `LONG_BLOCK` is set.
    pub add_size: u32,
}

impl BlockHeader {
    pub fn has_long_block(&self) -> bool {
        self.flags & LONG_BLOCK != 0
    }

    /// Bytes to skip from the start of this header to the next one.
    pub fn skip_len(&self) -> u64 {
        u64::from(self.size) + u64::from(self.add_size)
    }
}

pub struct BlockHeaderParser;

impl BlockHeaderParser {
    pub const HEADER_SIZE: usize = 7;

    /// Parse the common block header at the start of `buffer`.
    ///
    /// Returns `None` when fewer than 7 bytes remain.
    pub fn parse(buffer: &[u8]) -> Option<BlockHeader> {
        if buffer.len() < Self::HEADER_SIZE {
            return None;
        }

        let crc = u16::from_le_bytes([buffer[0], buffer[1]]);
        let header_type = buffer[2];
        let flags = u16::from_le_bytes([buffer[3], buffer[4]]);
        let size = u16::from_le_bytes([buffer[5], buffer[6]]);

        let add_size = if flags & LONG_BLOCK != 0 && usize::from(size) >= Self::HEADER_SIZE + 4 {
            read_u32_le(buffer, Self::HEADER_SIZE).unwrap_or(0)
        } else {
            0
        };

        Some(BlockHeader {
            crc,
            header_type,
            flags,
            size,
            add_size,
        })
    }
}
