//! RAR5 file header parser.
//!
//! The file header contains information about each file in the archive,
//! including name, size, compression method, and timestamps. Fields after
//! the common prefix, in order:
//!
//! ```text
//! file flags (vint) | unpacked size (vint) | attributes (vint)
//! | [mtime (u32)] | [data CRC32 (u32)] | compression info (vint)
//! | host OS (vint) | name length (vint) | name (UTF-8) | extra area
//! ```

use super::{Rar5BlockHeader, VintReader};
use crate::error::{RarError, Result};

/// Extra-area record type for file encryption.
pub const FHEXTRA_CRYPT: u64 = 0x01;

/// RAR5 file flags (specific to file header).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rar5FileFlags {
    /// File is a directory
    pub is_directory: bool,
    /// File modification time is present
    pub has_mtime: bool,
    /// File CRC32 is present
    pub has_crc32: bool,
}

impl From<u64> for Rar5FileFlags {
    fn from(flags: u64) -> Self {
        Self {
            is_directory: flags & 0x0001 != 0,
            has_mtime: flags & 0x0002 != 0,
            has_crc32: flags & 0x0004 != 0,
        }
    }
}

/// RAR5 compression information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rar5CompressionInfo {
    /// Compression method (0 = store, 1-5 = compression levels), bits 7-9
    pub method: u8,
}

impl From<u64> for Rar5CompressionInfo {
    fn from(info: u64) -> Self {
        Self {
            method: ((info >> 7) & 0x07) as u8,
        }
    }
}

/// Parsed RAR5 file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rar5FileHeader {
    /// File-specific flags
    pub file_flags: Rar5FileFlags,
    /// Unpacked (original) file size
    pub unpacked_size: u64,
    /// File attributes
    pub attributes: u64,
    /// Modification time (if present)
    pub mtime: Option<u32>,
    /// File CRC32 (if present)
    pub file_crc32: Option<u32>,
    pub compression: Rar5CompressionInfo,
    pub host_os: u64,
    /// File name (UTF-8, as stored)
    pub name: String,
    /// Whether the extra area carries an encryption record
    pub is_encrypted: bool,
}

impl Rar5FileHeader {
    pub fn is_directory(&self) -> bool {
        self.file_flags.is_directory
    }
}

/// Find a specific extra-area record by type.
///
/// Each record is `size (vint) | type (vint) | data`, where `size` counts the
/// type and data but not itself.
pub fn find_extra_field(extra: &[u8], field_type: u64) -> Option<&[u8]> {
    let mut pos = 0;
    while pos < extra.len() {
        let mut reader = VintReader::new(&extra[pos..]);
        let size = usize::try_from(reader.read()?).ok()?;
        let size_vint_len = reader.position();
        let ftype = reader.read()?;
        let header_consumed = reader.position();

        let record_end = pos.checked_add(size_vint_len)?.checked_add(size)?;
        if record_end > extra.len() || pos + header_consumed > record_end {
            return None;
        }
        if ftype == field_type {
            return Some(&extra[pos + header_consumed..record_end]);
        }
        pos = record_end;
    }
    None
}

/// Split the header body into its fields and its trailing extra area.
fn split_body<'h>(
    header: &'h [u8],
    block: &Rar5BlockHeader,
) -> Option<(&'h [u8], &'h [u8])> {
    let body = header.get(block.body_start..block.header_end)?;
    let extra_len = usize::try_from(block.extra_area_size)
        .ok()
        .filter(|&len| len <= body.len())?;
    Some(body.split_at(body.len() - extra_len))
}

pub struct Rar5FileHeaderParser;

impl Rar5FileHeaderParser {
    /// Whether the header's extra area carries an encryption record.
    ///
    /// Needs only the common prefix, so it holds even when the file fields
    /// themselves are unreadable.
    pub fn is_encrypted(header: &[u8], block: &Rar5BlockHeader) -> bool {
        split_body(header, block)
            .is_some_and(|(_, extra)| find_extra_field(extra, FHEXTRA_CRYPT).is_some())
    }

    /// Parse the file-specific part of a header.
    ///
    /// `header` starts at the header's CRC field and covers at least
    /// `block.header_end` bytes; `offset` is its archive position, used for
    /// error reporting.
    pub fn parse(
        header: &[u8],
        block: &Rar5BlockHeader,
        offset: usize,
    ) -> Result<Rar5FileHeader> {
        let malformed = |reason: &'static str| RarError::malformed(offset, reason);

        let (fields, extra) =
            split_body(header, block).ok_or_else(|| malformed("extra area exceeds header"))?;

        let truncated = || malformed("file header field past end of header");
        let mut reader = VintReader::new(fields);

        let file_flags = Rar5FileFlags::from(reader.read().ok_or_else(truncated)?);
        let unpacked_size = reader.read().ok_or_else(truncated)?;
        let attributes = reader.read().ok_or_else(truncated)?;

        let mtime = if file_flags.has_mtime {
            Some(reader.read_u32_le().ok_or_else(truncated)?)
        } else {
            None
        };

        let file_crc32 = if file_flags.has_crc32 {
            Some(reader.read_u32_le().ok_or_else(truncated)?)
        } else {
            None
        };

        let compression = Rar5CompressionInfo::from(reader.read().ok_or_else(truncated)?);
        let host_os = reader.read().ok_or_else(truncated)?;

        let name_len = reader.read().ok_or_else(truncated)?;
        let name_len = usize::try_from(name_len).map_err(|_| truncated())?;
        let name_bytes = reader.read_bytes(name_len).ok_or_else(truncated)?;
        if name_bytes.is_empty() {
            return Err(malformed("empty file name"));
        }
        let name = String::from_utf8_lossy(name_bytes).into_owned();

        Ok(Rar5FileHeader {
            file_flags,
            unpacked_size,
            attributes,
            mtime,
            file_crc32,
            compression,
            host_os,
            name,
            is_encrypted: find_extra_field(extra, FHEXTRA_CRYPT).is_some(),
        })
    }
}
