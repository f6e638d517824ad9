//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Stores};
use recon7::output::OutputMode;
use recon7::paths;

/// recon7 - Reconnaissance target and settings store
#[derive(Parser, Debug)]
#[command(
    name = "recon7",
    version,
    about = "Reconnaissance target and settings store",
    long_about = "Keep a list of reconnaissance targets and a small set of settings\n\
                  in human-editable text files.\n\n\
                  Every write backs up the previous file to <file>.save, and a reload\n\
                  restores from that backup if the file has become unreadable."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (default: ~/.config/recon7/config.7cfg, created if missing)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the targets file (default: ~/.config/recon7/targets.lock)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub targets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage targets (list, add, remove, show)
    Targets {
        #[command(subcommand)]
        action: TargetAction,
    },

    /// Manage settings (list, get, set)
    Settings {
        #[command(subcommand)]
        action: SettingAction,
    },

    /// Reload config and targets, restoring from backups if unreadable
    Reload,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum TargetAction {
    /// List targets in display order
    List,

    /// Add a target, or replace the one with the same name in place
    Add {
        /// Target name (letters, digits, underscores)
        name: String,

        /// IP, domain or URL
        value: String,

        /// Optional description (remaining words)
        desc: Vec<String>,
    },

    /// Remove a target
    Remove {
        /// Target name
        name: String,
    },

    /// Show one target
    Show {
        /// Target name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingAction {
    /// List settings (secret values are masked)
    List {
        /// Only this namespace: secret, num, theme
        namespace: Option<String>,
    },

    /// Print one setting
    Get {
        /// Qualified key, e.g. theme:bg or num:delay
        key: String,
    },

    /// Set a setting
    Set {
        /// Qualified key, e.g. secret:shodan_key
        key: String,

        /// New value
        value: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        print_version(output_mode);
        if output_mode == OutputMode::Human {
            println!("\nRun 'recon7 --help' for usage");
        }
        return Ok(());
    };

    match command {
        Command::Version => {
            print_version(output_mode);
            Ok(())
        },
        Command::Targets { action } => {
            let mut stores = open_stores(cli.config, cli.targets)?;
            commands::targets_cmd(action, &mut stores, output_mode)
        },
        Command::Settings { action } => {
            let mut stores = open_stores(cli.config, cli.targets)?;
            commands::settings_cmd(action, &mut stores, output_mode)
        },
        Command::Reload => {
            let mut stores = open_stores(cli.config, cli.targets)?;
            commands::reload(&mut stores, output_mode)
        },
    }
}

/// Resolve both file paths and open the stores
fn open_stores(config: Option<PathBuf>, targets: Option<PathBuf>) -> anyhow::Result<Stores> {
    let config_path = commands::resolve_config(config)?;
    let targets_path = targets.unwrap_or_else(paths::default_targets);
    Stores::open(config_path, targets_path)
}

fn print_version(output_mode: OutputMode) {
    if output_mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION")
            })
        );
    } else {
        println!("recon7 v{}", env!("CARGO_PKG_VERSION"));
    }
}
