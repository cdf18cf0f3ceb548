//! Listing and stored-entry extraction over an in-memory archive.
//!
//! The archive buffer is borrowed for the whole operation and never copied;
//! [`extract_stored`] hands back a sub-slice of it.

use crate::entry::{Entry, StorageMethod};
use crate::error::{RarError, Result};
use crate::walk::Entries;
use tracing::debug;

/// Options for [`list_with_options`].
#[derive(Default)]
pub struct ListOptions {
    /// Accepted for encrypted archives; decryption is not implemented, so
    /// encrypted entries still fail with
    /// [`PasswordRequiredOrIncorrect`](RarError::PasswordRequiredOrIncorrect).
    pub password: Option<String>,
    /// Filter function: receives the entry path and the index of its file
    /// header; return true to include the entry.
    pub filter: Option<Box<dyn Fn(&str, usize) -> bool + Send + Sync>>,
    /// Maximum number of entries to return. The walk stops once reached.
    pub max_entries: Option<usize>,
}

impl ListOptions {
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Self::default()
        }
    }
}

/// Start a lazy walk over `buffer`.
///
/// Fails only with [`RarError::NotRarArchive`]; everything else is reported
/// by the iterator.
pub fn entries(buffer: &[u8]) -> Result<Entries<'_>> {
    Entries::new(buffer)
}

/// List every entry of the archive in `buffer`, in archive order.
pub fn list(buffer: &[u8], password: Option<&str>) -> Result<Vec<Entry>> {
    let opts = ListOptions {
        password: password.map(str::to_owned),
        ..ListOptions::default()
    };
    list_with_options(buffer, &opts)
}

/// List entries with filtering and an optional limit.
///
/// A truncated archive is not an error: the entries found before the damaged
/// tail are returned.
pub fn list_with_options(buffer: &[u8], opts: &ListOptions) -> Result<Vec<Entry>> {
    let walk = Entries::new(buffer)?;
    let format = walk.format();
    if opts.password.is_some() {
        debug!(?format, "password supplied but decryption is not supported; ignoring it");
    }

    let mut kept = Vec::new();
    for (index, entry) in walk.enumerate() {
        if opts.max_entries.is_some_and(|max| kept.len() >= max) {
            break;
        }
        let entry = entry?;
        if let Some(filter) = &opts.filter {
            if !filter(&entry.path, index) {
                continue;
            }
        }
        kept.push(entry);
    }

    debug!(?format, entries = kept.len(), "listed archive");
    Ok(kept)
}

/// Borrow the payload of a stored entry from the archive buffer.
///
/// `entry` must come from a listing of the same `buffer`.
pub fn extract_stored<'a>(buffer: &'a [u8], entry: &Entry) -> Result<&'a [u8]> {
    if let StorageMethod::Compressed(method) = entry.storage_method {
        return Err(RarError::UnsupportedCompression(method));
    }

    let (offset, length) = entry
        .data_location
        .map_or((0, entry.compressed_size), |loc| (loc.offset, loc.length));
    let out_of_range = || RarError::TruncatedOrCorrupt {
        offset,
        needed: length,
        have: buffer.len() as u64,
    };

    let location = entry.data_location.ok_or_else(out_of_range)?;
    let start = usize::try_from(location.offset).map_err(|_| out_of_range())?;
    let len = usize::try_from(location.length).map_err(|_| out_of_range())?;
    let end = start.checked_add(len).ok_or_else(out_of_range)?;
    buffer.get(start..end).ok_or_else(out_of_range)
}

/// List several independent archives on the rayon thread pool.
///
/// Results are returned in input order.
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub fn list_many(buffers: &[&[u8]], opts: &ListOptions) -> Vec<Result<Vec<Entry>>> {
    use rayon::prelude::*;

    buffers
        .par_iter()
        .map(|buffer| list_with_options(buffer, opts))
        .collect()
}
