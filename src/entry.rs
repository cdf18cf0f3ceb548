//! Logical archive entries produced by the header walkers.

use crate::formats::RawTimestamp;

/// RAR4 method byte for stored (uncompressed) data.
pub const METHOD_STORE: u8 = 0x30;

/// How an entry's bytes are kept in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMethod {
    /// Raw copy of the file contents; extractable with [`extract_stored`](crate::extract_stored).
    Stored,
    /// Not byte-copyable, identified by its RAR4-style method byte. RAR4 uses
    /// `0x31..=0x35`; RAR5 entries always land here, store included (`0x30`).
    Compressed(u8),
}

impl StorageMethod {
    /// Map a RAR4 method byte.
    pub fn from_rar4(method: u8) -> Self {
        if method == METHOD_STORE {
            Self::Stored
        } else {
            Self::Compressed(method)
        }
    }

    /// Map a RAR5 compression method (0 = store, 1-5 = levels) onto RAR4
    /// numbering.
    ///
    /// RAR5 data areas are not resolved for extraction, so every RAR5 entry is
    /// `Compressed`; a stored RAR5 file reports `Compressed(0x30)`.
    pub fn from_rar5(method: u8) -> Self {
        Self::Compressed(METHOD_STORE.wrapping_add(method))
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored)
    }
}

/// Byte range of an entry's payload inside the archive buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataLocation {
    pub offset: u64,
    pub length: u64,
}

/// One file or directory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Forward-slash separated path.
    pub path: String,
    pub is_directory: bool,
    pub uncompressed_size: u64,
    /// Packed size; always 0 for RAR5 entries.
    pub compressed_size: u64,
    pub storage_method: StorageMethod,
    /// Set only for stored entries.
    pub data_location: Option<DataLocation>,
    pub modified: Option<RawTimestamp>,
    /// CRC32 of the unpacked data as recorded in the header. Not verified.
    pub crc32: Option<u32>,
    pub attributes: u64,
    pub host_os: u8,
}

impl Entry {
    pub fn is_stored(&self) -> bool {
        self.storage_method.is_stored()
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

/// Convert archive separators (`\`) to `/`.
pub fn normalize_path(raw: &str) -> String {
    raw.replace('\\', "/")
}
