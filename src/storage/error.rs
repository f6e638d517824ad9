//! Store error taxonomy

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ParseError;

/// Failures surfaced by [`SettingsStore`](super::SettingsStore) and
/// [`TargetStore`](super::TargetStore)
///
/// Malformed lines inside a file are never an error; they are skipped while
/// parsing. A missing primary file is an empty store, not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The primary file exists but could not be read
    #[error("failed to read {}", path.display())]
    Read {
        /// Primary file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The primary file could not be copied to its backup; nothing was written
    #[error("failed to back up {} to {}", path.display(), backup.display())]
    Backup {
        /// Primary file
        path: PathBuf,
        /// Backup file that could not be written
        backup: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The new content could not be written; the backup taken just before is intact
    #[error("failed to write {}", path.display())]
    Write {
        /// Primary file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Neither the primary file nor its backup could be loaded; memory is unchanged
    #[error(
        "failed to reload {} ({primary}) and its backup {}",
        path.display(),
        backup_path.display()
    )]
    Reload {
        /// Primary file
        path: PathBuf,
        /// Backup file
        backup_path: PathBuf,
        /// Why the primary file could not be loaded
        primary: io::Error,
        /// Why the backup could not be loaded
        #[source]
        backup: io::Error,
    },

    /// A mutation was rejected before touching memory or disk
    #[error(transparent)]
    Invalid(#[from] ParseError),
}
