//! RAR4 file header parser.
//!
//! Each file in a RAR4 archive has a file header (block type `0x74`) that
//! describes the file's name, sizes and compression method. Layout relative
//! to the start of the block:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 7 | common block header |
//! | 7 | 4 | packed size (low) |
//! | 11 | 4 | unpacked size (low) |
//! | 15 | 1 | host OS |
//! | 16 | 4 | file CRC32 |
//! | 20 | 4 | DOS modification time |
//! | 24 | 1 | version needed |
//! | 25 | 1 | method |
//! | 26 | 2 | name size |
//! | 28 | 4 | attributes |
//! | 32 | 8 | high packed / unpacked size (`LHD_LARGE` only) |
//! | 32/40 | n | file name |

use super::{read_u16_le, read_u32_le, unicode_name::decode_file_name, BlockHeader};
use crate::entry::normalize_path;
use crate::error::{RarError, Result};

pub const LHD_PASSWORD: u16 = 0x0004;
pub const LHD_LARGE: u16 = 0x0100;
pub const LHD_UNICODE: u16 = 0x0200;
/// Dictionary-size bits all set marks a directory.
pub const LHD_WINDOWMASK: u16 = 0x00E0;
pub const LHD_DIRECTORY: u16 = 0x00E0;

/// DOS/Windows directory attribute.
pub const ATTR_DIRECTORY: u32 = 0x10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub flags: u16,
    pub packed_size: u64,
    pub unpacked_size: u64,
    pub host_os: u8,
    pub file_crc: u32,
    pub timestamp: u32,
    pub method: u8,
    pub attributes: u32,
    /// Decoded, slash-normalized path.
    pub name: String,
    // Parsed flags
    pub is_encrypted: bool,
    pub has_high_size: bool,
    pub has_unicode_name: bool,
    pub is_directory: bool,
}

pub struct FileHeaderParser;

impl FileHeaderParser {
    /// Fixed part of the header before the optional high sizes and the name.
    pub const MIN_HEADER_SIZE: usize = 32;

    /// Parse a file header.
    ///
    /// `block` must span exactly the header (`block.len() == head_size`) and
    /// `offset` is its position in the archive, used for error reporting.
    pub fn parse(block: &[u8], common: &BlockHeader, offset: usize) -> Result<FileHeader> {
        if block.len() < Self::MIN_HEADER_SIZE {
            return Err(RarError::malformed(offset, "file header shorter than 32 bytes"));
        }
        let field = |pos: usize| {
            read_u32_le(block, pos)
                .ok_or_else(|| RarError::malformed(offset, "file header field out of bounds"))
        };

        let flags = common.flags;
        let mut packed_size = u64::from(field(7)?);
        let mut unpacked_size = u64::from(field(11)?);
        let host_os = block[15];
        let file_crc = field(16)?;
        let timestamp = field(20)?;
        let method = block[25];
        let name_size = read_u16_le(block, 26)
            .ok_or_else(|| RarError::malformed(offset, "file header field out of bounds"))?;
        let attributes = field(28)?;

        let has_high_size = flags & LHD_LARGE != 0;
        let mut name_offset = Self::MIN_HEADER_SIZE;
        if has_high_size {
            let high_packed = u64::from(field(32)?);
            let high_unpacked = u64::from(field(36)?);
            packed_size += high_packed << 32;
            unpacked_size += high_unpacked << 32;
            name_offset += 8;
        }

        let name_end = name_offset + usize::from(name_size);
        if name_end > block.len() {
            return Err(RarError::malformed(offset, "file name exceeds header"));
        }
        let name_bytes = &block[name_offset..name_end];

        let has_unicode_name = flags & LHD_UNICODE != 0;
        let decoded = if has_unicode_name {
            decode_file_name(name_bytes)
        } else {
            String::from_utf8_lossy(name_bytes).into_owned()
        };
        let name = normalize_path(&decoded);
        if name.is_empty() {
            return Err(RarError::malformed(offset, "empty file name"));
        }

        let is_directory = attributes & ATTR_DIRECTORY != 0
            || flags & LHD_WINDOWMASK == LHD_DIRECTORY
            || name.ends_with('/');

        Ok(FileHeader {
            flags,
            packed_size,
            unpacked_size,
            host_os,
            file_crc,
            timestamp,
            method,
            attributes,
            name,
            is_encrypted: flags & LHD_PASSWORD != 0,
            has_high_size,
            has_unicode_name,
            is_directory,
        })
    }
}
