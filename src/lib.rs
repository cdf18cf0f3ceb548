//! In-memory RAR archive listing.
//!
//! Walks the headers of a RAR4 (1.5-4.x) or RAR5 (5.0+) archive held in a
//! byte buffer, recovers the entry list and byte-copies RAR4 entries that are
//! stored without compression.
//!
//! Compressed entries are listed but not decoded. RAR5 entries report name,
//! sizes and metadata only and are never extractable. Encrypted entries are
//! reported as [`RarError::PasswordRequiredOrIncorrect`].
//!
//! ```rust
//! use rar_peek::{detect, list, ArchiveFormat, RarError};
//!
//! assert_eq!(detect(b"Rar!\x1a\x07\x01\x00"), ArchiveFormat::Rar5);
//! assert!(matches!(list(b"\x00\x01\x02\x03", None), Err(RarError::NotRarArchive)));
//! ```
//!
//! ## Features
//! - Core library depends only on `thiserror` and `tracing`
//! - `async` - Load archive files with tokio
//! - `parallel` - List many archives on the rayon pool

mod archive;
pub mod entry;
pub mod error;
mod file_media;
pub mod formats;
pub mod parsing;
pub mod walk;

#[cfg(test)]
mod fixtures;

pub use archive::{entries, extract_stored, list, list_with_options, ListOptions};
pub use entry::{DataLocation, Entry, StorageMethod};
pub use error::{RarError, Result};
pub use file_media::LocalFileMedia;
pub use formats::{detect, ArchiveFormat, RawTimestamp};
pub use walk::Entries;

#[cfg(feature = "parallel")]
pub use archive::list_many;
