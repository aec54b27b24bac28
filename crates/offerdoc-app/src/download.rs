//! Where exported documents go.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// A delivered download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    /// Human-readable location, a path for file downloads.
    pub location: String,
    pub bytes: usize,
}

pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> Result<Delivered, AppError>;
}

/// Writes downloads into a directory, creating it on first use.
///
/// Each file is written to a hidden `.part` sibling and renamed into place,
/// so a failed write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloads {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> Result<Delivered, AppError> {
        let path = self.dir.join(filename);
        let io_err = |source| AppError::Download {
            path: path.display().to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;

        let tmp_path = self.dir.join(format!(".{filename}.part"));
        if let Err(e) = std::fs::write(&tmp_path, bytes) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }
        std::fs::rename(&tmp_path, &path).map_err(io_err)?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "download written");
        Ok(Delivered {
            location: path.display().to_string(),
            bytes: bytes.len(),
        })
    }
}

/// Keeps downloads in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDownloads {
    pub files: Vec<(String, Vec<u8>)>,
}

impl MemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadSink for MemoryDownloads {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> Result<Delivered, AppError> {
        self.files.push((filename.to_string(), bytes.to_vec()));
        Ok(Delivered {
            location: filename.to_string(),
            bytes: bytes.len(),
        })
    }
}
