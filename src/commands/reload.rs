//! Reload command

use anyhow::Context;

use recon7::output::{OutputMode, ReloadResult};
use recon7::storage::ReloadSource;

use super::Stores;

/// Reload config and targets from disk
///
/// A file already restored from its backup when the stores were opened
/// counts as recovered too.
pub fn reload(stores: &mut Stores, output_mode: OutputMode) -> anyhow::Result<()> {
    let settings_source = stores.settings.reload().context("Reload error")?;
    let targets_source = stores.targets.reload().context("Reload error")?;

    ReloadResult::new(
        recovered_either(stores.settings_source, settings_source),
        recovered_either(stores.targets_source, targets_source),
        stores.settings.settings().len(),
        stores.targets.len(),
    )
    .render(output_mode);
    Ok(())
}

const fn recovered_either(opened: ReloadSource, reloaded: ReloadSource) -> ReloadSource {
    match (opened, reloaded) {
        (ReloadSource::Primary, ReloadSource::Primary) => ReloadSource::Primary,
        _ => ReloadSource::Backup,
    }
}
