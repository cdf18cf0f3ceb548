//! Loading archive files into memory.
//!
//! The header walkers work on a borrowed byte buffer; this is the one place
//! that does I/O, reading the whole archive up front.

use crate::error::{RarError, Result};
use std::path::{Path, PathBuf};

/// Local file implementation.
#[derive(Debug, Clone)]
pub struct LocalFileMedia {
    path: PathBuf,
    name: String,
    length: u64,
}

impl LocalFileMedia {
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            length: metadata.len(),
        })
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        self.check_addressable()?;
        Ok(std::fs::read(&self.path)?)
    }

    /// Read the whole file without blocking the async runtime.
    #[cfg(feature = "async")]
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn read_all_async(&self) -> Result<Vec<u8>> {
        self.check_addressable()?;
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn check_addressable(&self) -> Result<()> {
        if usize::try_from(self.length).is_err() {
            return Err(RarError::TruncatedOrCorrupt {
                offset: 0,
                needed: self.length,
                have: usize::MAX as u64,
            });
        }
        Ok(())
    }
}
