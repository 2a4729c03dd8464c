//! Host-provided settings
//!
//! Settings are constructed from persisted configuration at process start
//! and treated as a read-only snapshot for the duration of one Executor
//! run. The core never renders configuration UI; it only reads resolved
//! values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::OptionValue;

/// Reserved option name carrying the shared array style into every rule.
pub const ARRAY_STYLE_OPTION: &str = "array-style";

/// Reserved option name carrying the shared escape character into every rule.
pub const ESCAPE_CHAR_OPTION: &str = "escape-char";

/// Preferred encoding for newly created frontmatter arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrayStyle {
    SingleLine,
    #[default]
    MultiLine,
}

impl ArrayStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleLine => "single-line",
            Self::MultiLine => "multi-line",
        }
    }
}

/// Quote character used when escaping frontmatter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeChar {
    #[default]
    Double,
    Single,
}

impl EscapeChar {
    pub fn char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Cross-rule shared style settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StylePreferences {
    pub array_style: ArrayStyle,
    pub escape_char: EscapeChar,
}

/// All configuration an Executor run reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per rule name, stored option values. Missing options fall back to
    /// each option's declared default.
    pub rules: BTreeMap<String, BTreeMap<String, OptionValue>>,
    /// Globally disabled rule aliases, honored in addition to the
    /// document's own `disabled rules` directive.
    pub disabled: Vec<String>,
    /// Shared style settings injected into every rule's resolved options.
    pub style: StylePreferences,
}

impl Settings {
    /// Deserialize settings from persisted YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Deserialize settings from persisted JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Store one option value for a rule.
    pub fn set_option(
        &mut self,
        rule: impl Into<String>,
        option: impl Into<String>,
        value: OptionValue,
    ) {
        self.rules
            .entry(rule.into())
            .or_default()
            .insert(option.into(), value);
    }

    /// Disable a rule globally by alias.
    pub fn disable(&mut self, alias: impl Into<String>) {
        self.disabled.push(alias.into());
    }
}
