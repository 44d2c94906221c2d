//! File-backed store used by the CLI.

use std::fs;
use std::path::PathBuf;

use crate::error::StoreResult;
use crate::RosterStore;

/// A `RosterStore` that keeps the blob in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given path. The file is created on the
    /// first save; a missing file reads as an absent blob.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store writes to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl RosterStore for FileStore {
    fn load_blob(&self) -> StoreResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn save_blob(&mut self, blob: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }
}
