//! List a RAR archive and copy its stored entries to disk.
//!
//! Usage:
//!   cargo run --release --example list -- archive.rar [output_dir/]

use rar_peek::{extract_stored, list, LocalFileMedia, StorageMethod};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: list <archive.rar> [output_dir]");
        eprintln!("  list ./backup.rar ./out/");
        std::process::exit(1);
    }

    let media = LocalFileMedia::new(&args[1])?;
    let buffer = media.read_all()?;
    let entries = list(&buffer, None)?;

    println!("{} entries in {}:", entries.len(), media.name());
    for e in &entries {
        let kind = if e.is_directory {
            "dir".to_string()
        } else {
            match e.storage_method {
                StorageMethod::Stored => "stored".to_string(),
                StorageMethod::Compressed(m) => format!("m0x{m:02x}"),
            }
        };
        println!(
            "  {kind:<6} {:>12} {:>12}  {}",
            e.uncompressed_size, e.compressed_size, e.path
        );
    }

    let Some(output_dir) = args.get(2).map(Path::new) else {
        return Ok(());
    };
    for e in entries.iter().filter(|e| e.is_stored() && !e.is_directory) {
        let out_path = output_dir.join(&e.path);
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = extract_stored(&buffer, e)?;
        std::fs::write(&out_path, content)?;
        println!("Extracted {} ({} bytes)", e.path, content.len());
    }

    Ok(())
}
