//! Settings commands

use recon7::models::{Namespace, Setting, SettingValue, split_key};
use recon7::output::{OperationResult, OutputMode, SettingInfo, SettingListResult};

use super::Stores;
use crate::cli::SettingAction;

/// Handle settings subcommands
pub fn settings_cmd(
    action: SettingAction,
    stores: &mut Stores,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        SettingAction::List { namespace } => {
            let settings = stores.settings.settings();
            let result = match namespace {
                Some(ns) => SettingListResult::new(settings.all(ns.parse::<Namespace>()?)),
                None => SettingListResult::new(settings),
            };
            result.render(output_mode, &stores.settings.palette());
        },
        SettingAction::Get { key } => {
            let (namespace, name) = split_key(&key)?;
            let Some(setting) = stores.settings.setting(namespace, name) else {
                anyhow::bail!("No setting named '{key}'");
            };
            let info = SettingInfo::new(setting, true);
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", info.value);
            }
        },
        SettingAction::Set { key, value } => {
            let (namespace, name) = split_key(&key)?;
            let value = SettingValue::parse(namespace, &value)?;
            stores.settings.set(Setting::new(name, value)?)?;
            OperationResult::ok(format!("Set {namespace}:{name}.")).render(output_mode);
        },
    }
    Ok(())
}
