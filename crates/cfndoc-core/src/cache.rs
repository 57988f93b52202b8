//! On-disk JSON cache for the link index.
//!
//! The cache holds the whole entry collection as a single JSON array,
//! order-significant and without a schema version marker. It is trusted
//! indefinitely once written; the only refresh path is explicit
//! invalidation.

use crate::types::LinkEntry;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store for the serialized entry collection.
pub struct Cache {
    path: PathBuf,
}

impl Cache {
    /// Creates a cache handle for the given file path. The file itself is
    /// only created on the first [`save`](Self::save).
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The cache file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached entry collection.
    ///
    /// Returns `None` when the file does not exist. A file that exists
    /// but does not deserialize is [`Error::CacheCorrupt`]; rebuilding
    /// silently over corruption would hide a real problem from the
    /// operator.
    pub fn load(&self) -> Result<Option<Vec<LinkEntry>>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        let entries = serde_json::from_str::<Vec<LinkEntry>>(&json).map_err(|e| {
            Error::CacheCorrupt(format!("{}: {e}", self.path.display()))
        })?;

        debug!("loaded {} entries from {}", entries.len(), self.path.display());
        Ok(Some(entries))
    }

    /// Overwrites the cache with the full entry collection.
    ///
    /// Writes to a temporary file in the same directory and renames it
    /// into place, so a concurrent reader never observes a partial file.
    pub fn save(&self, entries: &[LinkEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(entries)
            .map_err(|e| Error::CacheCorrupt(format!("failed to serialize entries: {e}")))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Deletes the cache file. A missing file is not an error.
    pub fn invalidate(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("invalidated cache at {}", self.path.display());
                Ok(())
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
