//! RAR5 header walk.

use super::{advance, drive, Step};
use crate::entry::{normalize_path, Entry, StorageMethod};
use crate::error::{RarError, Result};
use crate::formats::{ArchiveFormat, RawTimestamp};
use crate::parsing::rar5::{
    Rar5BlockHeader, Rar5BlockHeaderParser, Rar5FileHeaderParser, Rar5HeaderType,
};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Walks RAR5 headers, starting right after the 8-byte signature.
#[derive(Debug, Clone)]
pub struct Rar5Walker<'a> {
    buffer: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Rar5Walker<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: ArchiveFormat::Rar5.signature_len(),
            done: false,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn step(&mut self) -> Step {
        let offset = self.offset;
        let buffer = self.buffer;
        let rest = buffer.get(offset..).unwrap_or_default();

        let Some(block) = Rar5BlockHeaderParser::parse(rest) else {
            debug!(
                offset,
                remaining = rest.len(),
                "rar5 walk ended: unreadable or truncated header"
            );
            return Step::Stop;
        };
        let Some(total_len) = block.total_len() else {
            return Step::Stop;
        };
        trace!(
            offset,
            header_type = block.header_type,
            header_size = block.header_size,
            data_size = block.data_size,
            "rar5 header"
        );

        match Rar5HeaderType::try_from(block.header_type) {
            Ok(Rar5HeaderType::End) => {
                debug!(offset, "rar5 walk ended: end of archive");
                Step::Stop
            }
            Ok(Rar5HeaderType::Encryption) => Step::Fail(RarError::PasswordRequiredOrIncorrect),
            Ok(Rar5HeaderType::File) => {
                let step = self.file_header(rest, &block);
                self.offset = advance(offset, total_len, buffer.len());
                step
            }
            _ => {
                self.offset = advance(offset, total_len, buffer.len());
                Step::Continue
            }
        }
    }

    fn file_header(&self, header: &[u8], block: &Rar5BlockHeader) -> Step {
        let offset = self.offset;
        if Rar5FileHeaderParser::is_encrypted(header, block) {
            return Step::Fail(RarError::PasswordRequiredOrIncorrect);
        }

        let file = match Rar5FileHeaderParser::parse(header, block, offset) {
            Ok(file) => file,
            Err(err) => {
                debug!(offset, %err, "skipping malformed file header");
                return Step::Continue;
            }
        };

        let path = normalize_path(&file.name);
        let is_directory = file.is_directory() || path.ends_with('/');

        // The data area is skipped, never resolved: RAR5 entries report no
        // packed size and cannot be extracted.
        Step::Entry(Entry {
            path,
            is_directory,
            uncompressed_size: file.unpacked_size,
            compressed_size: 0,
            storage_method: StorageMethod::from_rar5(file.compression.method),
            data_location: None,
            modified: file.mtime.map(RawTimestamp::from_unix_secs),
            crc32: file.file_crc32,
            attributes: file.attributes,
            host_os: u8::try_from(file.host_os).unwrap_or(u8::MAX),
        })
    }
}

impl Iterator for Rar5Walker<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut done = self.done;
        let item = drive(&mut done, || self.step());
        self.done = done;
        item
    }
}

impl FusedIterator for Rar5Walker<'_> {}
