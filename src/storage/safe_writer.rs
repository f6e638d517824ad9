//! Backup-guarded persistence for a single store file
//!
//! Every write first copies the current primary file to `<path>.save`, so
//! the last good state survives a failed or interrupted write. Reloading
//! falls back to that copy when the primary cannot be read, and writes the
//! recovered content back to the primary path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::{Document, StoreError};
use crate::paths;

/// Where a reload got its content from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadSource {
    /// The primary file (or nothing, if it does not exist)
    Primary,
    /// The `.save` backup; the primary file was rewritten from it
    Backup,
}

/// Reads and writes one store file and its backup
///
/// The configured paths never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeWriter {
    path: PathBuf,
    backup: PathBuf,
}

impl SafeWriter {
    /// Create a writer for `path`; the backup lives at `<path>.save`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backup = paths::backup_path(&path);
        Self { path, backup }
    }

    /// Primary file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backup file path
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    /// Parse the primary file only. A missing file yields an empty document.
    pub fn load<D: Document>(&self) -> Result<D, StoreError> {
        let content = read_optional(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(D::parse(&content.unwrap_or_default()))
    }

    /// Back up the primary file, then overwrite it with `doc`
    ///
    /// If the backup copy fails, the primary file is left untouched.
    pub fn flush<D: Document>(&self, doc: &D) -> Result<(), StoreError> {
        if self.path.is_file() {
            fs::copy(&self.path, &self.backup).map_err(|source| StoreError::Backup {
                path: self.path.clone(),
                backup: self.backup.clone(),
                source,
            })?;
            debug!("Backed up {} to {}", self.path.display(), self.backup.display());
        }
        self.write(&doc.render())
    }

    /// Parse the primary file, falling back to the backup if it cannot be read
    ///
    /// Content recovered from the backup is written back to the primary path
    /// before it is returned. On failure nothing is returned, so callers keep
    /// whatever they held in memory.
    pub fn reload<D: Document>(&self) -> Result<(D, ReloadSource), StoreError> {
        let (doc, source) = self.read_with_fallback()?;
        if source == ReloadSource::Backup {
            self.restore(&doc)?;
        }
        Ok((doc, source))
    }

    /// Parse the primary file, or the backup if the primary cannot be read
    ///
    /// Nothing is written; pair a [`ReloadSource::Backup`] result with
    /// [`restore`](Self::restore) to repair the primary file.
    pub fn read_with_fallback<D: Document>(&self) -> Result<(D, ReloadSource), StoreError> {
        let primary = match read_optional(&self.path) {
            Ok(content) => {
                return Ok((D::parse(&content.unwrap_or_default()), ReloadSource::Primary));
            },
            Err(e) => e,
        };
        debug!("Primary {} unreadable ({primary}), trying backup", self.path.display());

        match fs::read_to_string(&self.backup) {
            Ok(content) => Ok((D::parse(&content), ReloadSource::Backup)),
            Err(backup) => Err(StoreError::Reload {
                path: self.path.clone(),
                backup_path: self.backup.clone(),
                primary,
                backup,
            }),
        }
    }

    /// Overwrite the primary file with content recovered from the backup
    pub fn restore<D: Document>(&self, doc: &D) -> Result<(), StoreError> {
        // Not flush(): copying the unreadable primary would overwrite the good backup
        self.write(&doc.render())?;
        debug!("Restored {} from {}", self.path.display(), self.backup.display());
        Ok(())
    }

    fn write(&self, content: &str) -> Result<(), StoreError> {
        let to_write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
        fs::write(&self.path, content).map_err(to_write_error)
    }
}

/// Read a file as UTF-8; `None` if it does not exist
fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
