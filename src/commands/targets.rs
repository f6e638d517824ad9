//! Target commands

use recon7::output::{OperationResult, OutputMode, TargetInfo, TargetListResult};

use super::Stores;
use crate::cli::TargetAction;

/// Handle target subcommands
pub fn targets_cmd(
    action: TargetAction,
    stores: &mut Stores,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        TargetAction::List => {
            let palette = stores.settings.palette();
            TargetListResult::new(stores.targets.all()).render(output_mode, &palette);
        },
        TargetAction::Add { name, value, desc } => {
            let existed = stores.targets.get(&name).is_some();
            stores.targets.add(name.as_str(), value, desc.join(" "))?;
            let verb = if existed { "Updated" } else { "Added" };
            OperationResult::ok(format!("{verb} target '{name}'.")).render(output_mode);
        },
        TargetAction::Remove { name } => {
            let result = if stores.targets.delete(&name)? {
                OperationResult::ok(format!("Deleted target '{name}'."))
            } else {
                OperationResult::failed(format!("No target named '{name}'."))
            };
            result.render(output_mode);
        },
        TargetAction::Show { name } => {
            let Some(index) = stores.targets.all().iter().position(|t| t.name() == name) else {
                anyhow::bail!("No target named '{name}'");
            };
            let info = TargetInfo::from((index, &stores.targets.all()[index]));
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Selected target: {} -> {}", info.name, info.value);
                if !info.desc.is_empty() {
                    println!("{}", info.desc);
                }
            }
        },
    }
    Ok(())
}
