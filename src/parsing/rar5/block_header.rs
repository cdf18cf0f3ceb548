//! RAR5 common header prefix.
//!
//! Every RAR5 header starts with:
//!
//! ```text
//! CRC32 (4) | header size (vint) | type (vint) | flags (vint)
//!           | [extra area size (vint)] | [data size (vint)] | type-specific fields
//! ```
//!
//! `header size` counts the bytes from the type field to the end of the
//! header, extra area included. A data area of `data size` bytes follows the
//! header when flag `0x0002` is set.

use super::{Rar5HeaderFlags, VintReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rar5BlockHeader {
    /// Header CRC32; informational only.
    pub crc32: u32,
    pub header_size: u64,
    pub header_type: u64,
    pub header_flags: Rar5HeaderFlags,
    pub extra_area_size: u64,
    /// Size of the data area after the header, 0 if absent.
    pub data_size: u64,
    /// Offset of the type field, relative to the start of the header.
    pub content_start: usize,
    /// Offset of the type-specific fields, relative to the start of the header.
    pub body_start: usize,
    /// Offset one past the header, relative to the start of the header.
    pub header_end: usize,
}

impl Rar5BlockHeader {
    /// Bytes from the start of this header to the next one.
    pub fn total_len(&self) -> Option<u64> {
        (self.header_end as u64).checked_add(self.data_size)
    }
}

pub struct Rar5BlockHeaderParser;

impl Rar5BlockHeaderParser {
    /// Parse the prefix of the header at the start of `buffer`.
    ///
    /// Returns `None` if the declared header does not fit in `buffer` or its
    /// prefix cannot be decoded within the declared size.
    pub fn parse(buffer: &[u8]) -> Option<Rar5BlockHeader> {
        let mut reader = VintReader::new(buffer);

        let crc32 = reader.read_u32_le()?;
        let header_size = reader.read()?;
        let content_start = reader.position();

        if header_size == 0 {
            return None;
        }
        let header_end = content_start.checked_add(usize::try_from(header_size).ok()?)?;
        let content = buffer.get(content_start..header_end)?;

        // Prefix fields must lie inside the declared header.
        let mut reader = VintReader::new(content);
        let header_type = reader.read()?;
        let header_flags = Rar5HeaderFlags::from(reader.read()?);

        let extra_area_size = if header_flags.has_extra_area {
            reader.read()?
        } else {
            0
        };

        let data_size = if header_flags.has_data_area {
            reader.read()?
        } else {
            0
        };

        Some(Rar5BlockHeader {
            crc32,
            header_size,
            header_type,
            header_flags,
            extra_area_size,
            data_size,
            content_start,
            body_start: content_start + reader.position(),
            header_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_end_header() {
        let header = [
            0x00, 0x00, 0x00, 0x00, // CRC32 (placeholder)
            0x03, // header_size = 3
            0x05, // type = 5 (end)
            0x00, // header_flags = 0
            0x00, // end_flags = 0
        ];

        let parsed = Rar5BlockHeaderParser::parse(&header).unwrap();
        assert_eq!(parsed.header_type, 5);
        assert_eq!(parsed.content_start, 5);
        assert_eq!(parsed.body_start, 7);
        assert_eq!(parsed.header_end, 8);
        assert_eq!(parsed.total_len(), Some(8));
    }

    #[test]
    fn test_extra_and_data_sizes() {
        let header = [
            0x01, 0x02, 0x03, 0x04, // CRC32
            0x06, // header_size
            0x02, // type = file
            0x03, // flags = extra + data
            0x02, // extra area size
            0x80, 0x01, // data size = 128
            0x00, // first body byte
        ];
        let parsed = Rar5BlockHeaderParser::parse(&header).unwrap();
        assert_eq!(parsed.crc32, 0x0403_0201);
        assert_eq!(parsed.extra_area_size, 2);
        assert_eq!(parsed.data_size, 128);
        assert_eq!(parsed.body_start, 10);
        assert_eq!(parsed.total_len(), Some(11 + 128));
    }

    #[test]
    fn test_header_size_past_buffer() {
        let header = [0x00, 0x00, 0x00, 0x00, 0x7F, 0x02, 0x00];
        assert!(Rar5BlockHeaderParser::parse(&header).is_none());
    }

    #[test]
    fn test_prefix_overruns_declared_size() {
        // header_size = 1 covers only the type; flags lie outside
        let header = [0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00];
        assert!(Rar5BlockHeaderParser::parse(&header).is_none());
    }

    #[test]
    fn test_zero_header_size() {
        let header = [0x00, 0x00, 0x00, 0x00, 0x00, 0x05, 0x00];
        assert!(Rar5BlockHeaderParser::parse(&header).is_none());
    }
}
