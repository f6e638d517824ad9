//! Command implementations

mod reload;
mod settings;
mod targets;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::{info, warn};

use recon7::paths;
use recon7::storage::{ReloadSource, SettingsStore, TargetStore};

pub use reload::reload;
pub use settings::settings_cmd;
pub use targets::targets_cmd;

/// The two stores a command works on, opened once per invocation
#[derive(Debug)]
pub struct Stores {
    /// Settings from the config file
    pub settings: SettingsStore,
    /// Targets from the targets file
    pub targets: TargetStore,
    /// Where the settings came from when opened
    pub settings_source: ReloadSource,
    /// Where the targets came from when opened
    pub targets_source: ReloadSource,
}

impl Stores {
    /// Open both stores, restoring either file from its backup if unreadable
    pub fn open(config: PathBuf, targets: PathBuf) -> anyhow::Result<Self> {
        let (settings, settings_source) = SettingsStore::open_with_recovery(config)
            .context("Failed to load config")?;
        if settings_source == ReloadSource::Backup {
            warn!("Config was unreadable; restored {} from backup", settings.path().display());
        }

        let (targets, targets_source) =
            TargetStore::open_with_recovery(targets).context("Failed to load targets")?;
        if targets_source == ReloadSource::Backup {
            warn!("Targets were unreadable; restored {} from backup", targets.path().display());
        }

        Ok(Self {
            settings,
            targets,
            settings_source,
            targets_source,
        })
    }
}

/// Pick the config file to use
///
/// An explicit path must exist. Without one, the default config is used and
/// created with default content on first run.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            anyhow::bail!("config file not found at {}", path.display());
        }
        return Ok(path);
    }

    let path = paths::default_config();
    if !path.exists() {
        fs::create_dir_all(paths::config_dir())
            .with_context(|| format!("Failed to create {}", paths::config_dir().display()))?;
        fs::write(&path, paths::DEFAULT_CONFIG)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        info!("Created default config at {}", path.display());
    }
    Ok(path)
}
