//! Typed rule options
//!
//! Every rule owns a fixed, ordered list of [`RuleOption`]s; each option is
//! one of a closed set of kinds with a validated value type. Option 0 is
//! always the auto-injected enabled boolean.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A validated option value.
///
/// `Choice` options store a [`OptionValue::Text`] validated against the
/// declared choice list; there is no separate value variant for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
}

/// The closed set of option kinds a rule may declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Text,
    /// An enumerated choice among fixed alternatives.
    Choice(&'static [&'static str]),
    /// A free list of text entries.
    TextList,
}

impl OptionValue {
    /// Whether this value is acceptable for an option of the given kind.
    pub fn matches_kind(&self, kind: &OptionKind) -> bool {
        match (self, kind) {
            (Self::Bool(_), OptionKind::Bool) | (Self::Text(_), OptionKind::Text) => true,
            (Self::Text(text), OptionKind::Choice(choices)) => {
                choices.contains(&text.as_str())
            }
            (Self::TextList(_), OptionKind::TextList) => true,
            _ => false,
        }
    }
}

/// One option descriptor in a rule's schema.
#[derive(Debug, Clone)]
pub struct RuleOption {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub default: OptionValue,
}

impl RuleOption {
    pub fn bool(name: &'static str, description: &'static str, default: bool) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::Bool,
            default: OptionValue::Bool(default),
        }
    }

    pub fn text(name: &'static str, description: &'static str, default: &str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::Text,
            default: OptionValue::Text(default.to_string()),
        }
    }

    pub fn choice(
        name: &'static str,
        description: &'static str,
        choices: &'static [&'static str],
        default: &str,
    ) -> Self {
        debug_assert!(choices.contains(&default));
        Self {
            name,
            description,
            kind: OptionKind::Choice(choices),
            default: OptionValue::Text(default.to_string()),
        }
    }

    pub fn text_list(
        name: &'static str,
        description: &'static str,
        default: Vec<String>,
    ) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::TextList,
            default: OptionValue::TextList(default),
        }
    }
}

/// Option values for one rule invocation, defaults already applied.
#[derive(Debug, Clone, Default)]
pub struct ResolvedOptions(BTreeMap<String, OptionValue>);

impl ResolvedOptions {
    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    /// Boolean option value; `false` when absent or mistyped.
    pub fn bool(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(OptionValue::Bool(true)))
    }

    /// Text (or choice) option value; empty when absent or mistyped.
    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(OptionValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Text list option value; empty when absent or mistyped.
    pub fn text_list(&self, name: &str) -> &[String] {
        match self.0.get(name) {
            Some(OptionValue::TextList(list)) => list,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_value_validates_against_alternatives() {
        let kind = OptionKind::Choice(&["asterisk", "underscore"]);
        assert!(OptionValue::Text("asterisk".into()).matches_kind(&kind));
        assert!(!OptionValue::Text("tilde".into()).matches_kind(&kind));
        assert!(!OptionValue::Bool(true).matches_kind(&kind));
    }

    #[test]
    fn mismatched_kinds_are_rejected() {
        assert!(!OptionValue::Bool(true).matches_kind(&OptionKind::Text));
        assert!(!OptionValue::Text("x".into()).matches_kind(&OptionKind::Bool));
        assert!(!OptionValue::TextList(vec![]).matches_kind(&OptionKind::Text));
    }

    #[test]
    fn typed_accessors_fall_back_on_mismatch() {
        let mut options = ResolvedOptions::default();
        options.insert("flag", OptionValue::Bool(true));
        options.insert("name", OptionValue::Text("value".into()));
        options.insert("keys", OptionValue::TextList(vec!["a".into()]));

        assert!(options.bool("flag"));
        assert!(!options.bool("name"));
        assert_eq!(options.text("name"), "value");
        assert_eq!(options.text("flag"), "");
        assert_eq!(options.text_list("keys"), ["a".to_string()]);
        assert!(options.text_list("missing").is_empty());
    }

    #[test]
    fn option_values_deserialize_untagged() {
        let value: OptionValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(value, OptionValue::Bool(true));
        let value: OptionValue = serde_yaml::from_str("hello").unwrap();
        assert_eq!(value, OptionValue::Text("hello".into()));
        let value: OptionValue = serde_yaml::from_str("[a, b]").unwrap();
        assert_eq!(value, OptionValue::TextList(vec!["a".into(), "b".into()]));
    }
}
