#![no_main]
use libfuzzer_sys::fuzz_target;
use rar_peek::{extract_stored, list, ArchiveFormat};

fuzz_target!(|data: &[u8]| {
    // Prefix the signature so every input reaches the block walk.
    let mut buffer = ArchiveFormat::RAR4_SIGNATURE.to_vec();
    buffer.extend_from_slice(data);

    if let Ok(entries) = list(&buffer, None) {
        for entry in &entries {
            let _ = extract_stored(&buffer, entry);
        }
    }
});
