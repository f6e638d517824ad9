//! Persistence for settings and targets
//!
//! Both stores share the same protocol:
//! - [`safe_writer`]: backup-then-write and reload-with-fallback
//! - [`settings`]: scalar settings (`secret`, `num`, `theme`)
//! - [`targets`]: ordered target list
//!
//! Every mutation is written to disk before it returns; there is no batching.

mod error;
pub mod safe_writer;
pub mod settings;
pub mod targets;

pub use error::StoreError;
pub use safe_writer::{ReloadSource, SafeWriter};
pub use settings::{Settings, SettingsStore};
pub use targets::{TargetList, TargetStore};

/// In-memory content of a store file
pub trait Document: Default {
    /// Build from file content; unrecognised lines are skipped
    fn parse(content: &str) -> Self;

    /// Serialize to file content, one record per line
    fn render(&self) -> String;
}
