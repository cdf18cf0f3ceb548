//! RAR header parsing modules.
//!
//! Parsers work on slices that start at a header and never read past the end
//! of the slice they are given; short input is reported, not indexed.

pub mod archive_header;
pub mod block_header;
pub mod file_header;
pub mod rar5;
pub mod unicode_name;

pub use archive_header::{ArchiveHeader, ArchiveHeaderParser};
pub use block_header::{BlockHeader, BlockHeaderParser};
pub use file_header::{FileHeader, FileHeaderParser};
pub use unicode_name::decode_file_name;

#[inline]
pub(crate) fn read_u16_le(buf: &[u8], pos: usize) -> Option<u16> {
    let bytes = buf.get(pos..pos.checked_add(2)?)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

#[inline]
pub(crate) fn read_u32_le(buf: &[u8], pos: usize) -> Option<u32> {
    let bytes = buf.get(pos..pos.checked_add(4)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
