//! RAR4 Unicode file name decoding.
//!
//! With `LHD_UNICODE` set, the name field holds an 8-bit base name, a NUL,
//! then a compact encoding of the real UTF-16 name:
//!
//! ```text
//! base name bytes | 0x00 | high byte | flag byte | operands... | flag byte | ...
//! ```
//!
//! Each flag byte describes up to four characters, two bits each, most
//! significant pair first:
//!
//! | Bits | Output character | Consumes |
//! |------|------------------|----------|
//! | `00` | next base byte | 1 base byte |
//! | `01` | `high << 8 \| next base byte` | 1 base byte |
//! | `10` | `high << 8 \| next encoded byte` | 1 encoded byte, 1 base position |
//! | `11` | explicit `low`, `high` pair; `high` becomes the running high byte | 2 encoded bytes, 1 base position |
//!
//! The high byte persists from one character to the next until a `11` pair
//! replaces it. Decoding ends when the base name is used up.

/// Decode a raw RAR4 name field.
///
/// Without a NUL the field is taken as UTF-8. An encoded part that yields
/// nothing falls back to the base name.
pub fn decode_file_name(raw: &[u8]) -> String {
    let Some(nul) = raw.iter().position(|&b| b == 0) else {
        return String::from_utf8_lossy(raw).into_owned();
    };

    let base = &raw[..nul];
    let units = decode_wide(base, &raw[nul + 1..]);
    if units.is_empty() {
        String::from_utf8_lossy(base).into_owned()
    } else {
        String::from_utf16_lossy(&units)
    }
}

/// Expand the encoded stream against `base` into UTF-16 code units.
fn decode_wide(base: &[u8], encoded: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(base.len());
    let Some((&first, rest)) = encoded.split_first() else {
        return out;
    };

    let mut high = u16::from(first);
    let mut stream = rest.iter().copied();
    let mut flags = 0u8;
    let mut flag_slots = 0u8;
    let mut base_pos = 0usize;

    while base_pos < base.len() {
        if flag_slots == 0 {
            let Some(next) = stream.next() else { break };
            flags = next;
            flag_slots = 4;
        }

        let unit = match flags >> 6 {
            0 => u16::from(base[base_pos]),
            1 => (high << 8) | u16::from(base[base_pos]),
            2 => {
                let Some(low) = stream.next() else { break };
                (high << 8) | u16::from(low)
            }
            _ => {
                let (Some(low), Some(new_high)) = (stream.next(), stream.next()) else {
                    break;
                };
                high = u16::from(new_high);
                (high << 8) | u16::from(low)
            }
        };

        out.push(unit);
        base_pos += 1;
        flags <<= 2;
        flag_slots -= 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_nul_is_utf8() {
        assert_eq!(decode_file_name(b"docs\\readme.txt"), "docs\\readme.txt");
        assert_eq!(decode_file_name("caf\u{e9}.txt".as_bytes()), "caf\u{e9}.txt");
    }

    #[test]
    fn test_high_byte_with_base_low_bytes() {
        // "ab", NUL, high 0x04, flags 01 01 -> U+0461 U+0462
        let raw = [b'a', b'b', 0x00, 0x04, 0b0101_0000];
        assert_eq!(decode_file_name(&raw), "\u{0461}\u{0462}");
    }

    #[test]
    fn test_verbatim_copy() {
        // flags 00 00 00 -> copy "abc" as-is
        let raw = [b'a', b'b', b'c', 0x00, 0x30, 0x00];
        assert_eq!(decode_file_name(&raw), "abc");
    }

    #[test]
    fn test_encoded_low_byte() {
        // "x_y": x copied, '_' replaced by high 0x30 | 0x42, y copied
        let raw = [b'x', b'_', b'y', 0x00, 0x30, 0b0010_0000, 0x42];
        assert_eq!(decode_file_name(&raw), "x\u{3042}y");
    }

    #[test]
    fn test_explicit_pair_updates_high_byte() {
        // high starts at 0x04; op 11 sets it to 0x30, op 01 then uses 0x30
        let raw = [b'?', b'A', 0x00, 0x04, 0b1101_0000, 0x42, 0x30];
        assert_eq!(decode_file_name(&raw), "\u{3042}\u{3041}");
    }

    #[test]
    fn test_multiple_flag_bytes() {
        // 5 characters need two flag bytes
        let raw = [b'a', b'b', b'c', b'd', b'e', 0x00, 0x00, 0x00, 0x00];
        assert_eq!(decode_file_name(&raw), "abcde");
    }

    #[test]
    fn test_stops_when_stream_runs_out() {
        // one flag byte covers 4 chars; the fifth has no flag
        let raw = [b'a', b'b', b'c', b'd', b'e', 0x00, 0x00, 0x00];
        assert_eq!(decode_file_name(&raw), "abcd");
    }

    #[test]
    fn test_empty_encoding_falls_back_to_base() {
        assert_eq!(decode_file_name(b"plain.txt\0"), "plain.txt");
        // high byte only, no flags
        assert_eq!(decode_file_name(b"plain.txt\0\x04"), "plain.txt");
    }

    #[test]
    fn test_truncated_operand_falls_back() {
        // op 10 without its operand byte
        let raw = [b'a', 0x00, 0x04, 0b1000_0000];
        assert_eq!(decode_file_name(&raw), "a");
    }
}
