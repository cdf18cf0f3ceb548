#![no_main]
use libfuzzer_sys::fuzz_target;
use rar_peek::parsing::rar5::{
    read_vint, Rar5BlockHeaderParser, Rar5FileHeaderParser, VintReader, MAX_VINT_LEN,
};

fuzz_target!(|data: &[u8]| {
    if let Some((_, consumed)) = read_vint(data) {
        assert!(consumed <= MAX_VINT_LEN);
    }
    let mut reader = VintReader::new(data);
    while reader.read().is_some() {}

    if let Some(block) = Rar5BlockHeaderParser::parse(data) {
        assert!(block.header_end <= data.len());
        let _ = Rar5FileHeaderParser::is_encrypted(data, &block);
        let _ = Rar5FileHeaderParser::parse(data, &block, 0);
    }
});
