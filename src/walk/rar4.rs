//! RAR4 header walk.

use super::{advance, drive, Step};
use crate::entry::{DataLocation, Entry, StorageMethod};
use crate::error::{RarError, Result};
use crate::formats::{ArchiveFormat, RawTimestamp};
use crate::parsing::block_header::{END_OF_ARCHIVE, FILE_HEADER, MAIN_HEADER};
use crate::parsing::file_header::LHD_PASSWORD;
use crate::parsing::{
    read_u32_le, ArchiveHeaderParser, BlockHeader, BlockHeaderParser, FileHeaderParser,
};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Walks RAR4 blocks, starting right after the 7-byte signature.
#[derive(Debug, Clone)]
pub struct Rar4Walker<'a> {
    buffer: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Rar4Walker<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: ArchiveFormat::Rar4.signature_len(),
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

        let Some(block) = BlockHeaderParser::parse(rest) else {
            debug!(offset, "rar4 walk ended: no room for a block header");
            return Step::Stop;
        };
        let size = usize::from(block.size);
        if size < BlockHeaderParser::HEADER_SIZE || size > rest.len() {
            debug!(
                offset,
                size,
                remaining = rest.len(),
                "rar4 walk ended: block exceeds buffer"
            );
            return Step::Stop;
        }
        trace!(offset, header_type = block.header_type, size, "rar4 block");

        match block.header_type {
            FILE_HEADER => self.file_block(&rest[..size], &block),
            END_OF_ARCHIVE => {
                debug!(offset, "rar4 walk ended: end of archive");
                Step::Stop
            }
            MAIN_HEADER if ArchiveHeaderParser::parse(&block).has_encrypted_headers => {
                Step::Fail(RarError::PasswordRequiredOrIncorrect)
            }
            _ => {
                self.skip(block.skip_len());
                Step::Continue
            }
        }
    }

    fn file_block(&mut self, header: &[u8], block: &BlockHeader) -> Step {
        let offset = self.offset;
        // Encryption wins over any other defect in the header.
        if block.flags & LHD_PASSWORD != 0 {
            return Step::Fail(RarError::PasswordRequiredOrIncorrect);
        }

        let file = match FileHeaderParser::parse(header, block, offset) {
            Ok(file) => file,
            Err(err) => {
                debug!(offset, %err, "skipping malformed file header");
                let packed = read_u32_le(header, 7).map_or(0, u64::from);
                self.skip(header.len() as u64 + packed);
                return Step::Continue;
            }
        };

        let data_offset = (offset + header.len()) as u64;
        self.skip(header.len() as u64 + file.packed_size);

        let storage_method = StorageMethod::from_rar4(file.method);
        let data_location = storage_method.is_stored().then_some(DataLocation {
            offset: data_offset,
            length: file.packed_size,
        });

        Step::Entry(Entry {
            path: file.name,
            is_directory: file.is_directory,
            uncompressed_size: file.unpacked_size,
            compressed_size: file.packed_size,
            storage_method,
            data_location,
            modified: (file.timestamp != 0).then(|| RawTimestamp::from_dos(file.timestamp)),
            crc32: Some(file.file_crc),
            attributes: u64::from(file.attributes),
            host_os: file.host_os,
        })
    }

    fn skip(&mut self, len: u64) {
        self.offset = advance(self.offset, len, self.buffer.len());
    }
}

impl Iterator for Rar4Walker<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut done = self.done;
        let item = drive(&mut done, || self.step());
        self.done = done;
        item
    }
}

impl FusedIterator for Rar4Walker<'_> {}
