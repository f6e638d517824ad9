//! Line format for settings and target files
//!
//! One record per line, every line parsed on its own:
//!
//! ```text
//! // comment line, ignored
//! secret:<name> "<value>"
//! num:<name> <integer>
//! theme:<name> #RRGGBB
//! <name> "<value>"
//! <name> "<value>" "<description>"
//! ```
//!
//! Parsing is permissive: a line that matches none of the shapes above is
//! skipped, never reported. Each pattern is anchored at the start of the
//! (trimmed) line only, so trailing text after a complete record is ignored.
//!
//! # Examples
//!
//! ```
//! use recon7::format::parse_line;
//!
//! let record = parse_line(r#"web1 "http://example.com" "landing page""#).unwrap();
//! assert_eq!(record.to_line(), r#"web1 "http://example.com" "landing page""#);
//!
//! assert!(parse_line("secret:foo bar").is_none());
//! assert!(parse_line("// just a comment").is_none());
//! ```

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Setting, SettingValue, Target, ThemeColor};

const COMMENT: &str = "//";

static SECRET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^secret:([A-Za-z0-9_]+)\s+"([^"]+)""#).expect("secret pattern is valid")
});

static NUMBER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^num:([A-Za-z0-9_]+)\s+([0-9]+)").expect("number pattern is valid")
});

static THEME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^theme:([A-Za-z0-9_]+)\s+(#[0-9a-fA-F]{6})").expect("theme pattern is valid")
});

static TARGET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z0-9_]+)\s+"([^"]+)"(?:\s+"([^"]+)")?"#)
        .expect("target pattern is valid")
});

/// One parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A namespaced setting line
    Setting(Setting),
    /// An unprefixed target line
    Target(Target),
}

impl Record {
    /// Serialize back to a single line (no trailing newline)
    #[must_use]
    pub fn to_line(&self) -> String {
        match self {
            Self::Setting(setting) => setting_line(setting),
            Self::Target(target) => target_line(target),
        }
    }
}

/// Parse one line; `None` for blanks, comments and anything unrecognised
#[must_use]
pub fn parse_line(line: &str) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return None;
    }

    if line.starts_with("secret:") {
        let caps = SECRET_LINE.captures(line)?;
        let value = SettingValue::Secret(caps[2].to_string());
        Setting::new(&caps[1], value).ok().map(Record::Setting)
    } else if line.starts_with("num:") {
        let caps = NUMBER_LINE.captures(line)?;
        // digits that overflow u64 are dropped like any other bad line
        let value = SettingValue::Number(caps[2].parse().ok()?);
        Setting::new(&caps[1], value).ok().map(Record::Setting)
    } else if line.starts_with("theme:") {
        let caps = THEME_LINE.captures(line)?;
        let value = SettingValue::Theme(ThemeColor::parse(&caps[2]).ok()?);
        Setting::new(&caps[1], value).ok().map(Record::Setting)
    } else {
        let caps = TARGET_LINE.captures(line)?;
        let desc = caps.get(3).map_or("", |m| m.as_str());
        Target::new(&caps[1], &caps[2], desc).ok().map(Record::Target)
    }
}

/// Parse a whole file, in line order
pub fn parse_document(content: &str) -> impl Iterator<Item = Record> + '_ {
    content.lines().filter_map(parse_line)
}

/// Serialize a setting: `secret:<name> "<v>"`, `num:<name> <n>` or `theme:<name> #RRGGBB`
#[must_use]
pub fn setting_line(setting: &Setting) -> String {
    let prefix = setting.namespace().prefix();
    match setting.value() {
        SettingValue::Secret(secret) => format!("{prefix}:{} \"{secret}\"", setting.name()),
        SettingValue::Number(n) => format!("{prefix}:{} {n}", setting.name()),
        SettingValue::Theme(color) => format!("{prefix}:{} {color}", setting.name()),
    }
}

/// Serialize a target; the description pair is left out when empty
#[must_use]
pub fn target_line(target: &Target) -> String {
    let mut line = format!("{} \"{}\"", target.name(), target.value());
    if !target.desc().is_empty() {
        let _ = write!(line, " \"{}\"", target.desc());
    }
    line
}

/// Join lines into file content, each terminated by `\n`
#[must_use]
pub fn render_document<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}
