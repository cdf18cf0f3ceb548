//! RAR4 main archive header.
//!
//! The main header follows the marker and carries archive-level flags.
//! Only the flags matter for listing; `MHD_PASSWORD` means every following
//! header is encrypted.

use super::BlockHeader;

/// Main header flag: every following header is encrypted.
pub const MHD_PASSWORD: u16 = 0x0080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHeader {
    pub flags: u16,
    pub has_encrypted_headers: bool,
}

pub struct ArchiveHeaderParser;

impl ArchiveHeaderParser {
    pub fn parse(block: &BlockHeader) -> ArchiveHeader {
        ArchiveHeader {
            flags: block.flags,
            has_encrypted_headers: block.flags & MHD_PASSWORD != 0,
        }
    }
}
