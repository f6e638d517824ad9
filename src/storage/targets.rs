//! Target store
//!
//! Targets are kept in insertion order, which is also their display order:
//! callers address targets by position, so an overwrite never moves an entry.

use std::path::{Path, PathBuf};

use log::debug;

use super::{Document, ReloadSource, SafeWriter, StoreError};
use crate::format::{self, Record};
use crate::models::Target;

/// Ordered, name-unique list of targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    targets: Vec<Target>,
}

impl TargetList {
    /// Overwrite in place if the name exists, otherwise append
    pub fn upsert(&mut self, target: Target) {
        if let Some(existing) = self.targets.iter_mut().find(|t| t.name() == target.name()) {
            *existing = target;
        } else {
            self.targets.push(target);
        }
    }

    /// Remove by name; returns the removed target
    pub fn remove(&mut self, name: &str) -> Option<Target> {
        let index = self.targets.iter().position(|t| t.name() == name)?;
        Some(self.targets.remove(index))
    }

    /// Find by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name() == name)
    }

    /// All targets, in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[Target] {
        &self.targets
    }

    /// Number of targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if there are no targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Document for TargetList {
    fn parse(content: &str) -> Self {
        let mut list = Self::default();
        for record in format::parse_document(content) {
            if let Record::Target(target) = record {
                list.upsert(target);
            }
        }
        list
    }

    fn render(&self) -> String {
        format::render_document(self.targets.iter().map(format::target_line))
    }
}

/// A target file and its in-memory copy
#[derive(Debug)]
pub struct TargetStore {
    writer: SafeWriter,
    targets: TargetList,
}

impl TargetStore {
    /// Open the target file at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let writer = SafeWriter::new(path);
        let targets: TargetList = writer.load()?;
        debug!("Loaded {} target(s) from {}", targets.len(), writer.path().display());
        Ok(Self { writer, targets })
    }

    /// Open `path`, restoring it from its backup if it cannot be read
    ///
    /// Fails only when neither the file nor its backup can be read.
    pub fn open_with_recovery(
        path: impl Into<PathBuf>,
    ) -> Result<(Self, ReloadSource), StoreError> {
        let writer = SafeWriter::new(path);
        let (targets, source): (TargetList, _) = writer.reload()?;
        debug!("Loaded {} target(s) from {}", targets.len(), writer.path().display());
        Ok((Self { writer, targets }, source))
    }

    /// Primary file path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    /// Backup file path
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        self.writer.backup_path()
    }

    /// Re-read the primary file, without falling back to the backup
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.targets = self.writer.load()?;
        Ok(())
    }

    /// Discard memory and rebuild from disk, recovering from the backup if needed
    ///
    /// Content recovered from the backup is adopted before the primary file
    /// is rewritten from it, so a failed rewrite still leaves memory holding
    /// the backup. If neither file can be read, the in-memory targets are
    /// unchanged.
    pub fn reload(&mut self) -> Result<ReloadSource, StoreError> {
        let (targets, source) = self.writer.read_with_fallback()?;
        self.targets = targets;
        if source == ReloadSource::Backup {
            self.writer.restore(&self.targets)?;
        }
        Ok(source)
    }

    /// Add or overwrite a target and write the file
    ///
    /// An existing name keeps its position and takes the new value and
    /// description (an empty `desc` clears the old one). Memory is updated
    /// even if the write fails.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<(), StoreError> {
        let target = Target::new(name, value, desc)?;
        debug!("Adding target {}", target.name());
        self.targets.upsert(target);
        self.writer.flush(&self.targets)
    }

    /// Remove a target and write the file
    ///
    /// Returns `false` without touching the file if `name` is not present.
    pub fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.targets.remove(name).is_none() {
            return Ok(false);
        }
        debug!("Deleted target {name}");
        self.writer.flush(&self.targets)?;
        Ok(true)
    }

    /// All targets, in insertion order
    #[must_use]
    pub fn all(&self) -> &[Target] {
        self.targets.as_slice()
    }

    /// Find a target by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Value (IP, domain or URL) of a target by name
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(Target::value)
    }

    /// Number of targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if there are no targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
