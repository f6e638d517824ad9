//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::models::{Palette, Setting, SettingValue, Target, ThemeColor};
use crate::storage::ReloadSource;

/// Shown in place of secret values in listings
const MASK: &str = "********";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn paint(text: &str, color: &ThemeColor) -> ColoredString {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b)
}

/// Result of a target list operation
#[derive(Debug, Serialize)]
pub struct TargetListResult {
    /// Targets in display order
    pub targets: Vec<TargetInfo>,
}

/// A target with its display position
#[derive(Debug, Serialize)]
pub struct TargetInfo {
    /// Position in the store (0-based)
    pub index: usize,
    /// Target name
    pub name: String,
    /// IP, domain or URL
    pub value: String,
    /// Description, empty if none
    pub desc: String,
}

impl From<(usize, &Target)> for TargetInfo {
    fn from((index, target): (usize, &Target)) -> Self {
        Self {
            index,
            name: target.name().to_string(),
            value: target.value().to_string(),
            desc: target.desc().to_string(),
        }
    }
}

impl TargetListResult {
    /// Build from targets in store order
    #[must_use]
    pub fn new(targets: &[Target]) -> Self {
        Self {
            targets: targets.iter().enumerate().map(TargetInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, palette: &Palette) {
        match mode {
            OutputMode::Human => self.render_human(palette),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, palette: &Palette) {
        if self.targets.is_empty() {
            println!("No targets.");
            return;
        }

        println!("Targets:\n");
        for t in &self.targets {
            if t.desc.is_empty() {
                println!("  {}: {}", t.name, t.value);
            } else {
                println!("  {}: {}  {}", t.name, t.value, paint(&t.desc, &palette.accent));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a settings list operation
#[derive(Debug, Serialize)]
pub struct SettingListResult {
    /// Settings in file order; secret values are masked
    pub settings: Vec<SettingInfo>,
}

/// A setting as shown to the user
#[derive(Debug, Serialize)]
pub struct SettingInfo {
    /// Namespace prefix (`secret`, `num`, `theme`)
    pub namespace: String,
    /// Setting name
    pub name: String,
    /// Value as text
    pub value: String,
}

impl SettingInfo {
    /// Describe a setting, optionally hiding secret values
    #[must_use]
    pub fn new(setting: &Setting, reveal: bool) -> Self {
        let value = match setting.value() {
            SettingValue::Secret(_) if !reveal => MASK.to_string(),
            value => value.to_string(),
        };
        Self {
            namespace: setting.namespace().to_string(),
            name: setting.name().to_string(),
            value,
        }
    }
}

impl SettingListResult {
    /// Build from settings in file order, masking secrets
    #[must_use]
    pub fn new<'a>(settings: impl IntoIterator<Item = &'a Setting>) -> Self {
        Self {
            settings: settings.into_iter().map(|s| SettingInfo::new(s, false)).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, palette: &Palette) {
        match mode {
            OutputMode::Human => self.render_human(palette),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, palette: &Palette) {
        if self.settings.is_empty() {
            println!("No settings.");
            return;
        }

        println!("Settings:\n");
        for s in &self.settings {
            let key = format!("{}:{}", s.namespace, s.name);
            println!("  {} {}", paint(&key, &palette.accent), s.value);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a reload operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReloadResult {
    /// Whether settings were restored from their backup
    pub settings_recovered: bool,
    /// Whether targets were restored from their backup
    pub targets_recovered: bool,
    /// Number of settings after the reload
    pub settings: usize,
    /// Number of targets after the reload
    pub targets: usize,
}

impl ReloadResult {
    /// Build from the outcome of reloading both stores
    #[must_use]
    pub fn new(
        settings_source: ReloadSource,
        targets_source: ReloadSource,
        settings: usize,
        targets: usize,
    ) -> Self {
        Self {
            settings_recovered: settings_source == ReloadSource::Backup,
            targets_recovered: targets_source == ReloadSource::Backup,
            settings,
            targets,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.settings_recovered {
            println!("Config was unreadable; restored from backup.");
        }
        if self.targets_recovered {
            println!("Targets were unreadable; restored from backup.");
        }
        println!(
            "Config and targets reloaded ({} setting(s), {} target(s)).",
            self.settings, self.targets
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
