// file: src/exporter/saver.rs
// description: writes downloaded export payloads to disk
// reference: https://docs.rs/tempfile

use crate::error::{ClientError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Destination for a finished download.
pub trait DownloadSink {
    /// Stores `bytes` under `filename` and returns where they ended up.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Saves into a directory, created on first save. The payload is staged in a
/// temporary file next to the target and renamed into place, so a failed
/// write never leaves a partial `results.*` behind and the staging file is
/// gone once `save` returns.
#[derive(Debug, Clone)]
pub struct FileSaver {
    output_dir: PathBuf,
}

impl FileSaver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl DownloadSink for FileSaver {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let target = self.output_dir.join(filename);
        let file_error = |source| ClientError::FileOperation {
            path: target.clone(),
            source,
        };

        fs::create_dir_all(&self.output_dir).map_err(|source| ClientError::FileOperation {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut staged = NamedTempFile::new_in(&self.output_dir).map_err(file_error)?;
        debug!("Staging {} bytes in {}", bytes.len(), staged.path().display());

        staged.write_all(bytes).map_err(file_error)?;
        staged.flush().map_err(file_error)?;
        staged
            .persist(&target)
            .map_err(|e| file_error(e.error))?;

        info!("Saved {} ({} bytes)", target.display(), bytes.len());
        Ok(target)
    }
}
