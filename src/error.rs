//! Error types for RAR listing and stored-entry extraction.
//!
//! This module provides the [`RarError`] type which covers every failure the
//! header walkers and [`extract_stored`](crate::extract_stored) can report.
//!
//! ## Error Categories
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Format | [`NotRarArchive`], [`TruncatedOrCorrupt`] | Buffer is not a usable RAR archive |
//! | Encryption | [`PasswordRequiredOrIncorrect`] | Encrypted entries or headers |
//! | Compression | [`UnsupportedCompression`] | Entry is not stored |
//! | Parsing | [`MalformedEntry`] | One record is broken (never surfaces from `list`) |
//! | I/O | [`Io`] | Loading the archive file failed |
//!
//! ## Example
//!
//! ```rust
//! use rar_peek::{list, RarError};
//!
//! match list(b"PK\x03\x04 not a rar", None) {
//!     Ok(entries) => println!("Found {} entries", entries.len()),
//!     Err(RarError::NotRarArchive) => eprintln!("Not a RAR file"),
//!     Err(RarError::PasswordRequiredOrIncorrect) => eprintln!("Archive is encrypted"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! [`NotRarArchive`]: RarError::NotRarArchive
//! [`TruncatedOrCorrupt`]: RarError::TruncatedOrCorrupt
//! [`PasswordRequiredOrIncorrect`]: RarError::PasswordRequiredOrIncorrect
//! [`UnsupportedCompression`]: RarError::UnsupportedCompression
//! [`MalformedEntry`]: RarError::MalformedEntry
//! [`Io`]: RarError::Io

use std::io;
use thiserror::Error;

/// Error type for RAR operations.
#[derive(Debug, Error)]
pub enum RarError {
    /// The buffer does not start with a RAR4 or RAR5 signature.
    ///
    /// RAR files must start with either:
    /// - RAR4: `Rar!\x1a\x07\x00` (7 bytes)
    /// - RAR5: `Rar!\x1a\x07\x01\x00` (8 bytes)
    #[error("not a RAR archive")]
    NotRarArchive,

    /// A byte range described by the archive does not fit in the buffer.
    #[error("truncated or corrupt archive: need {needed} bytes at offset {offset}, buffer has {have}")]
    TruncatedOrCorrupt {
        /// Start of the requested range.
        offset: u64,
        /// Length of the requested range.
        needed: u64,
        /// Total length of the buffer.
        have: u64,
    },

    /// An entry or the archive headers are encrypted.
    ///
    /// Decryption is not implemented, so this is returned whether or not a
    /// password was supplied.
    #[error("incorrect password or password required")]
    PasswordRequiredOrIncorrect,

    /// The entry uses a real compression method and cannot be byte-copied.
    ///
    /// The `u8` is the RAR4-style method byte:
    /// - `0x30`: Store
    /// - `0x31`-`0x35`: Fastest .. Best
    #[error("unsupported compression method: 0x{0:02x}")]
    UnsupportedCompression(u8),

    /// A single record is malformed.
    ///
    /// The walkers drop the record and continue, so this never aborts a listing.
    #[error("malformed entry at offset {offset}: {reason}")]
    MalformedEntry {
        /// Offset of the record's header in the buffer.
        offset: u64,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// An I/O error occurred while loading the archive.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RarError {
    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        Self::MalformedEntry {
            offset: offset as u64,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, RarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(RarError::NotRarArchive.to_string(), "not a RAR archive");
        assert_eq!(
            RarError::UnsupportedCompression(0x33).to_string(),
            "unsupported compression method: 0x33"
        );
        assert_eq!(
            RarError::malformed(20, "name out of bounds").to_string(),
            "malformed entry at offset 20: name out of bounds"
        );
    }

    #[test]
    fn test_io_source() {
        use std::error::Error as _;
        let err = RarError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(RarError::NotRarArchive.source().is_none());
    }
}
