//! Centralized path definitions for recon7
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/recon7/
//! ├── config.7cfg          # Settings (secret:, num:, theme: lines)
//! ├── config.7cfg.save     # Copy of config.7cfg taken before the last write
//! ├── targets.lock         # Targets, one per line, in display order
//! └── targets.lock.save    # Copy of targets.lock taken before the last write
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

// =============================================================================
// Filenames
// =============================================================================

/// Config directory, relative to the home directory
const CONFIG_DIR: &str = ".config/recon7";

/// Settings filename
const CONFIG_FILE: &str = "config.7cfg";

/// Targets filename
const TARGETS_FILE: &str = "targets.lock";

/// Suffix appended to a store file to name its backup
pub const BACKUP_SUFFIX: &str = ".save";

/// Content written when the default config file is created on first run
pub const DEFAULT_CONFIG: &str = "\
// recon7 config
//
// secret:<name> \"<value>\"
// num:<name> <integer>
// theme:<name> #RRGGBB

theme:bg #000000
theme:fg #ffffff
theme:accent #00ffff
";

// =============================================================================
// Resolution
// =============================================================================

/// Get the recon7 config directory.
///
/// Returns `~/.config/recon7/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR)
}

/// Get the default settings file path.
///
/// Returns `~/.config/recon7/config.7cfg`.
#[must_use]
pub fn default_config() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the default targets file path.
///
/// Returns `~/.config/recon7/targets.lock`.
#[must_use]
pub fn default_targets() -> PathBuf {
    config_dir().join(TARGETS_FILE)
}

/// Get the backup path for a store file: the full file name plus `.save`.
///
/// `targets.lock` becomes `targets.lock.save`, not `targets.save`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
