#![no_main]
use libfuzzer_sys::fuzz_target;
use rar_peek::parsing::{
    decode_file_name, ArchiveHeaderParser, BlockHeaderParser, FileHeaderParser,
};

fuzz_target!(|data: &[u8]| {
    let _ = decode_file_name(data);

    if let Some(block) = BlockHeaderParser::parse(data) {
        let _ = ArchiveHeaderParser::parse(&block);
        let _ = FileHeaderParser::parse(data, &block, 0);
    }
});
