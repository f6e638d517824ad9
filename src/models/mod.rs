//! Core data models for recon7
//!
//! - [`Setting`] - A scalar value in one of the `secret`, `num` or `theme` namespaces
//! - [`Target`] - A named reconnaissance endpoint with an optional description
//!
//! Values built through the constructors here are guaranteed to survive a
//! write/read cycle through the line format.

mod setting;
mod target;

use thiserror::Error;

pub use setting::{Namespace, Palette, Setting, SettingValue, ThemeColor, split_key};
pub use target::Target;

/// Errors raised when caller-supplied values cannot be represented in a store file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Name is empty or contains characters outside `[A-Za-z0-9_]`
    #[error("invalid name '{0}': use letters, digits and underscores only")]
    InvalidName(String),

    /// Value is empty, or contains a double quote or a line break
    #[error("invalid value for '{name}': must be non-empty and contain no quotes or line breaks")]
    InvalidValue {
        /// Name the value was meant for
        name: String,
    },

    /// Description contains a double quote or a line break
    #[error("invalid description for '{name}': must contain no quotes or line breaks")]
    InvalidDescription {
        /// Name the description was meant for
        name: String,
    },

    /// Number is not a non-negative integer
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Theme color is not `#RRGGBB`
    #[error("invalid theme color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    /// Namespace prefix is not one of `secret`, `num`, `theme`
    #[error("unknown namespace '{0}': use 'secret', 'num' or 'theme'")]
    UnknownNamespace(String),

    /// Qualified key is not of the form `namespace:name`
    #[error("invalid key '{0}': expected namespace:name")]
    InvalidKey(String),
}

/// Check that `name` is a non-empty run of `[A-Za-z0-9_]`
pub(crate) fn validate_name(name: &str) -> Result<(), ParseError> {
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        Ok(())
    } else {
        Err(ParseError::InvalidName(name.to_string()))
    }
}

/// True if `text` can sit between a pair of double quotes on a single line
pub(crate) fn is_quotable(text: &str) -> bool {
    !text.contains(['"', '\n', '\r'])
}
