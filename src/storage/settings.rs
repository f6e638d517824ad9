//! Settings store
//!
//! Holds secrets, numeric tunables and theme colors from one file. Lines in
//! the file that are not settings (targets, comments, unknown text) are
//! ignored on load and dropped on the next write.

use std::path::{Path, PathBuf};

use log::debug;

use super::{Document, ReloadSource, SafeWriter, StoreError};
use crate::format::{self, Record};
use crate::models::{Namespace, Palette, Setting, SettingValue, ThemeColor, split_key};

/// All settings from one file, grouped by namespace in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<Setting>,
}

impl Settings {
    /// Insert or overwrite by (namespace, name)
    ///
    /// An overwritten setting keeps its position; a new one goes after the
    /// last entry of its namespace.
    pub fn set(&mut self, setting: Setting) {
        let namespace = setting.namespace();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|s| s.namespace() == namespace && s.name() == setting.name())
        {
            *existing = setting;
        } else {
            let at = self.entries.partition_point(|s| s.namespace() <= namespace);
            self.entries.insert(at, setting);
        }
    }

    /// Look up a setting
    #[must_use]
    pub fn find(&self, namespace: Namespace, name: &str) -> Option<&Setting> {
        self.entries.iter().find(|s| s.namespace() == namespace && s.name() == name)
    }

    /// Look up a value
    #[must_use]
    pub fn get(&self, namespace: Namespace, name: &str) -> Option<&SettingValue> {
        self.find(namespace, name).map(Setting::value)
    }

    /// Every setting in one namespace, in file order
    pub fn all(&self, namespace: Namespace) -> impl Iterator<Item = &Setting> {
        self.entries.iter().filter(move |s| s.namespace() == namespace)
    }

    /// Every setting, in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Setting> {
        self.entries.iter()
    }

    /// Number of settings across all namespaces
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no settings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = &'a Setting;
    type IntoIter = std::slice::Iter<'a, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Document for Settings {
    fn parse(content: &str) -> Self {
        let mut settings = Self::default();
        for record in format::parse_document(content) {
            if let Record::Setting(setting) = record {
                settings.set(setting);
            }
        }
        settings
    }

    fn render(&self) -> String {
        format::render_document(self.entries.iter().map(format::setting_line))
    }
}

/// A settings file and its in-memory copy
///
/// There is no delete: settings are removed by editing the file and
/// reloading.
#[derive(Debug)]
pub struct SettingsStore {
    writer: SafeWriter,
    settings: Settings,
}

impl SettingsStore {
    /// Open the settings file at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let writer = SafeWriter::new(path);
        let settings: Settings = writer.load()?;
        debug!("Loaded {} setting(s) from {}", settings.len(), writer.path().display());
        Ok(Self { writer, settings })
    }

    /// Open `path`, restoring it from its backup if it cannot be read
    ///
    /// Fails only when neither the file nor its backup can be read.
    pub fn open_with_recovery(
        path: impl Into<PathBuf>,
    ) -> Result<(Self, ReloadSource), StoreError> {
        let writer = SafeWriter::new(path);
        let (settings, source): (Settings, _) = writer.reload()?;
        debug!("Loaded {} setting(s) from {}", settings.len(), writer.path().display());
        Ok((Self { writer, settings }, source))
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
        self.settings = self.writer.load()?;
        Ok(())
    }

    /// Discard memory and rebuild from disk, recovering from the backup if needed
    ///
    /// Content recovered from the backup is adopted before the primary file
    /// is rewritten from it, so a failed rewrite still leaves memory holding
    /// the backup. If neither file can be read, the in-memory settings are
    /// unchanged.
    pub fn reload(&mut self) -> Result<ReloadSource, StoreError> {
        let (settings, source) = self.writer.read_with_fallback()?;
        self.settings = settings;
        if source == ReloadSource::Backup {
            self.writer.restore(&self.settings)?;
        }
        Ok(source)
    }

    /// All settings
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Look up a stored setting in one namespace
    #[must_use]
    pub fn setting(&self, namespace: Namespace, name: &str) -> Option<&Setting> {
        self.settings.find(namespace, name)
    }

    /// Look up a value in one namespace
    #[must_use]
    pub fn get(&self, namespace: Namespace, name: &str) -> Option<&SettingValue> {
        self.settings.get(namespace, name)
    }

    /// Every setting in one namespace
    pub fn get_all(&self, namespace: Namespace) -> impl Iterator<Item = &Setting> {
        self.settings.all(namespace)
    }

    /// Look up a qualified key such as `theme:bg` or `num:delay`
    ///
    /// Returns `None` for keys without a namespace or with an unknown one.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&SettingValue> {
        let (namespace, name) = split_key(key).ok()?;
        self.get(namespace, name)
    }

    /// Secret by name
    #[must_use]
    pub fn secret(&self, name: &str) -> Option<&str> {
        match self.get(Namespace::Secret, name)? {
            SettingValue::Secret(s) => Some(s),
            _ => None,
        }
    }

    /// Number by name
    #[must_use]
    pub fn number(&self, name: &str) -> Option<u64> {
        match self.get(Namespace::Number, name)? {
            SettingValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Theme color by name
    #[must_use]
    pub fn theme(&self, name: &str) -> Option<&ThemeColor> {
        match self.get(Namespace::Theme, name)? {
            SettingValue::Theme(c) => Some(c),
            _ => None,
        }
    }

    /// `theme:bg`, `theme:fg` and `theme:accent`, with defaults for missing keys
    #[must_use]
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            bg: self.theme("bg").cloned().unwrap_or(defaults.bg),
            fg: self.theme("fg").cloned().unwrap_or(defaults.fg),
            accent: self.theme("accent").cloned().unwrap_or(defaults.accent),
        }
    }

    /// Set a secret and write the file
    pub fn set_secret(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.set(Setting::new(name, SettingValue::Secret(value.into()))?)
    }

    /// Set a number and write the file
    pub fn set_number(&mut self, name: impl Into<String>, value: u64) -> Result<(), StoreError> {
        self.set(Setting::new(name, SettingValue::Number(value))?)
    }

    /// Set a theme color and write the file
    pub fn set_theme(
        &mut self,
        name: impl Into<String>,
        color: ThemeColor,
    ) -> Result<(), StoreError> {
        self.set(Setting::new(name, SettingValue::Theme(color))?)
    }

    /// Insert or overwrite a setting and write the file
    ///
    /// Memory is updated even if the write fails.
    pub fn set(&mut self, setting: Setting) -> Result<(), StoreError> {
        debug!("Setting {}:{}", setting.namespace(), setting.name());
        self.settings.set(setting);
        self.writer.flush(&self.settings)
    }
}
