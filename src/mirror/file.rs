//! File-backed mirror
//!
//! Writes session text to a plain document on disk. Each append opens the
//! file in append mode and flushes before returning, so the document is
//! complete up to the last successful call even if the process is killed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{TripError, TripResult};

use super::DocumentMirror;

/// Append-only trip document stored as a text file
#[derive(Debug, Clone)]
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    /// Create a mirror that writes to the specified path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path to the document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentMirror for FileMirror {
    fn append(&mut self, text: &str) -> TripResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TripError::Mirror(format!("Failed to open trip document: {}", e)))?;

        writeln!(file, "{}", text)
            .map_err(|e| TripError::Mirror(format!("Failed to write trip document: {}", e)))?;

        file.flush()
            .map_err(|e| TripError::Mirror(format!("Failed to flush trip document: {}", e)))?;

        Ok(())
    }

    fn clear(&mut self) -> TripResult<()> {
        File::create(&self.path)
            .map_err(|e| TripError::Mirror(format!("Failed to clear trip document: {}", e)))?;
        Ok(())
    }
}
