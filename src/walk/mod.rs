//! Header walkers.
//!
//! A walk is a single forward pass over an in-memory archive, one header per
//! step. Each format has its own walker; [`Entries`] picks one from the
//! signature and yields entries lazily, so a caller can stop early without
//! touching the rest of the archive.
//!
//! Truncated or out-of-bounds headers end a walk quietly. Malformed file
//! headers are skipped. Encryption ends the walk with an error, after which
//! the iterator is exhausted.

mod rar4;
mod rar5;


pub use rar4::Rar4Walker;
pub use rar5::Rar5Walker;

use crate::entry::Entry;
use crate::error::{RarError, Result};
use crate::formats::ArchiveFormat;
use std::iter::FusedIterator;

/// Outcome of one walker step.
enum Step {
    /// A file header produced an entry.
    Entry(Entry),
    /// A header was consumed without producing an entry.
    Continue,
    /// End marker or truncation.
    Stop,
    /// The walk cannot go on.
    Fail(RarError),
}

/// Advance `offset` by `len`, clamping to the buffer end so the next step stops.
fn advance(offset: usize, len: u64, buffer_len: usize) -> usize {
    usize::try_from(len)
        .ok()
        .and_then(|len| offset.checked_add(len))
        .map_or(buffer_len, |next| next.min(buffer_len))
}

/// Drive a step function until it yields something for the caller.
fn drive(done: &mut bool, mut step: impl FnMut() -> Step) -> Option<Result<Entry>> {
    while !*done {
        match step() {
            Step::Entry(entry) => return Some(Ok(entry)),
            Step::Continue => {}
            Step::Stop => *done = true,
            Step::Fail(err) => {
                *done = true;
                return Some(Err(err));
            }
        }
    }
    None
}

/// Lazy sequence of entries in archive order.
#[derive(Debug, Clone)]
pub enum Entries<'a> {
    Rar4(Rar4Walker<'a>),
    Rar5(Rar5Walker<'a>),
}

impl<'a> Entries<'a> {
    /// Detect the format of `buffer` and start a walk after its signature.
    pub fn new(buffer: &'a [u8]) -> Result<Self> {
        match ArchiveFormat::detect(buffer) {
            ArchiveFormat::Rar4 => Ok(Self::Rar4(Rar4Walker::new(buffer))),
            ArchiveFormat::Rar5 => Ok(Self::Rar5(Rar5Walker::new(buffer))),
            ArchiveFormat::NotRar => Err(RarError::NotRarArchive),
        }
    }

    pub fn format(&self) -> ArchiveFormat {
        match self {
            Self::Rar4(_) => ArchiveFormat::Rar4,
            Self::Rar5(_) => ArchiveFormat::Rar5,
        }
    }

    /// Offset of the next header to be read.
    pub fn offset(&self) -> usize {
        match self {
            Self::Rar4(w) => w.offset(),
            Self::Rar5(w) => w.offset(),
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Rar4(w) => w.next(),
            Self::Rar5(w) => w.next(),
        }
    }
}

impl FusedIterator for Entries<'_> {}
