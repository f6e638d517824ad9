//! recon7 - Reconnaissance target and settings store
//!
//! Command-line front end over the recon7 library: list, add and remove
//! targets, read and write settings, and reload both files with backup
//! recovery.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use colored::Colorize;

/// Main entry point for the recon7 CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {e:#}", "ERR:".red().bold());
        std::process::exit(1);
    }
}
