//! Reconnaissance targets

use serde::Serialize;

use super::{ParseError, is_quotable, validate_name};

/// A named endpoint: an IP, domain or URL, plus an optional description
///
/// An empty description means "no description" and is not written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    name: String,
    value: String,
    desc: String,
}

impl Target {
    /// Create a target, rejecting anything the line format cannot hold
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<Self, ParseError> {
        let name = name.into();
        let value = value.into();
        let desc = desc.into();

        validate_name(&name)?;
        if value.is_empty() || !is_quotable(&value) {
            return Err(ParseError::InvalidValue { name });
        }
        if !is_quotable(&desc) {
            return Err(ParseError::InvalidDescription { name });
        }

        Ok(Self { name, value, desc })
    }

    /// Target name (unique within a store)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// IP, domain or URL
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Description, empty if none
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }
}
