//! recon7 - Local store for reconnaissance targets and settings
//!
//! This library provides the persistence core: a line-oriented text format
//! for settings and targets, and stores that back up every file before
//! overwriting it and recover from that backup when the file is unreadable.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod format;
pub mod models;
pub mod output;
pub mod paths;
pub mod storage;
