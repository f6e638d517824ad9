//! Scalar settings and their namespaces

use std::fmt;
use std::str::FromStr;

use super::{ParseError, is_quotable, validate_name};

/// The key space a setting lives in
///
/// Names are unique within a namespace only; `num:x` and `secret:x` are two
/// different settings. The declaration order is the order namespaces are
/// written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// Arbitrary strings (API keys, tokens)
    Secret,
    /// Non-negative integer tunables
    Number,
    /// `#RRGGBB` colors
    Theme,
}

impl Namespace {
    /// All namespaces in file order
    pub const ALL: [Self; 3] = [Self::Secret, Self::Number, Self::Theme];

    /// Line prefix used in the file format (without the colon)
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Secret => "secret",
            Self::Number => "num",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Namespace {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "secret" | "secrets" => Ok(Self::Secret),
            "num" | "number" | "numbers" => Ok(Self::Number),
            "theme" => Ok(Self::Theme),
            _ => Err(ParseError::UnknownNamespace(s.to_string())),
        }
    }
}

/// Split a qualified key such as `theme:bg` into its namespace and name
///
/// Section names from older tooling (`secrets`, `numbers`) are accepted.
pub fn split_key(key: &str) -> Result<(Namespace, &str), ParseError> {
    let (section, name) =
        key.split_once(':').ok_or_else(|| ParseError::InvalidKey(key.to_string()))?;
    Ok((section.parse()?, name))
}

/// A `#RRGGBB` color, kept exactly as written (case preserved)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeColor(String);

impl ThemeColor {
    /// Parse a `#RRGGBB` string
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let valid = s.len() == 7
            && s.starts_with('#')
            && s[1..].bytes().all(|b| b.is_ascii_hexdigit());
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::InvalidColor(s.to_string()))
        }
    }

    /// The color as written, including the leading `#`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ThemeColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A setting's value; the variant decides the namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// `secret:<name> "<value>"`
    Secret(String),
    /// `num:<name> <digits>`
    Number(u64),
    /// `theme:<name> #RRGGBB`
    Theme(ThemeColor),
}

impl SettingValue {
    /// Namespace this value belongs to
    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        match self {
            Self::Secret(_) => Namespace::Secret,
            Self::Number(_) => Namespace::Number,
            Self::Theme(_) => Namespace::Theme,
        }
    }

    /// Parse user input for the given namespace
    pub fn parse(namespace: Namespace, raw: &str) -> Result<Self, ParseError> {
        match namespace {
            Namespace::Secret => Ok(Self::Secret(raw.to_string())),
            Namespace::Number => {
                // u64::from_str accepts a leading '+', the file grammar does not
                if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
                    raw.parse()
                        .map(Self::Number)
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
                } else {
                    Err(ParseError::InvalidNumber(raw.to_string()))
                }
            },
            Namespace::Theme => ThemeColor::parse(raw).map(Self::Theme),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Theme(c) => write!(f, "{c}"),
        }
    }
}

/// A named setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    name: String,
    value: SettingValue,
}

impl Setting {
    /// Create a setting, rejecting anything the line format cannot hold
    pub fn new(name: impl Into<String>, value: SettingValue) -> Result<Self, ParseError> {
        let name = name.into();
        validate_name(&name)?;
        if let SettingValue::Secret(secret) = &value
            && (secret.is_empty() || !is_quotable(secret))
        {
            return Err(ParseError::InvalidValue { name });
        }
        Ok(Self { name, value })
    }

    /// Setting name (unique within its namespace)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Setting value
    #[must_use]
    pub const fn value(&self) -> &SettingValue {
        &self.value
    }

    /// Namespace, derived from the value
    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        self.value.namespace()
    }
}

/// The three colors the presentation layer draws with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Background
    pub bg: ThemeColor,
    /// Foreground
    pub fg: ThemeColor,
    /// Highlights and descriptions
    pub accent: ThemeColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: ThemeColor("#000000".to_string()),
            fg: ThemeColor("#ffffff".to_string()),
            accent: ThemeColor("#00ffff".to_string()),
        }
    }
}
