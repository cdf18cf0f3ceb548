#![no_main]
use libfuzzer_sys::fuzz_target;
use rar_peek::{entries, extract_stored, ArchiveFormat};

fuzz_target!(|data: &[u8]| {
    let mut buffer = ArchiveFormat::RAR5_SIGNATURE.to_vec();
    buffer.extend_from_slice(data);

    let Ok(walk) = entries(&buffer) else {
        return;
    };
    for entry in walk.flatten() {
        let _ = extract_stored(&buffer, &entry);
    }
});
