//! Rule Registry
//!
//! The registry is the single source of truth for registered rules. It is
//! populated once at startup through explicit registration calls and
//! treated as read-only afterwards; concurrent Executor runs share it by
//! reference.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::descriptor::RuleDescriptor;
use crate::error::{Error, Result};
use crate::options::ResolvedOptions;
use crate::rules;
use crate::settings::{ARRAY_STYLE_OPTION, ESCAPE_CHAR_OPTION, Settings};
use lint_frontmatter::{SectionValue, body, get_section_value, parse_value};

/// Frontmatter key holding the document's disabled-rules directive.
pub const DISABLED_RULES_KEY: &str = "disabled rules";

/// All registered rules, ordered by `(category, name)` and indexed by alias.
#[derive(Debug, Default)]
pub struct Registry {
    /// Descriptors in registration order.
    rules: Vec<RuleDescriptor>,
    /// Indices into `rules`, re-sorted after every registration.
    ordered: Vec<usize>,
    by_alias: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with every built-in rule, in one deterministic
    /// pass.
    pub fn with_builtin_rules() -> Result<Self> {
        let mut registry = Self::new();
        for constructor in rules::BUILTIN_RULES {
            registry.register(constructor())?;
        }
        Ok(registry)
    }

    /// Register a descriptor.
    ///
    /// Two descriptors normalizing to the same alias are a configuration
    /// error surfaced at startup, never a silent overwrite.
    pub fn register(&mut self, rule: RuleDescriptor) -> Result<()> {
        let alias = rule.alias();
        if self.by_alias.contains_key(&alias) {
            return Err(Error::DuplicateAlias { alias });
        }
        let index = self.rules.len();
        self.rules.push(rule);
        self.by_alias.insert(alias, index);
        self.ordered.push(index);
        self.ordered.sort_by_key(|&i| {
            let rule = &self.rules[i];
            (rule.category(), rule.name())
        });
        Ok(())
    }

    /// Descriptor for an alias, if registered.
    pub fn get(&self, alias: &str) -> Option<&RuleDescriptor> {
        self.by_alias.get(alias).map(|&i| &self.rules[i])
    }

    /// All descriptors in `(category, name)` order.
    pub fn ordered_rules(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.ordered.iter().map(|&i| &self.rules[i])
    }

    /// All descriptors in registration order.
    pub fn registered_rules(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Overlay stored settings on a rule's declared defaults and inject the
    /// shared style settings under their reserved option names.
    ///
    /// A stored value whose type does not match the declared option kind is
    /// ignored in favor of the default.
    pub fn resolve_options(&self, rule: &RuleDescriptor, settings: &Settings) -> ResolvedOptions {
        let mut resolved = rule.default_options();
        if let Some(stored) = settings.rules.get(rule.name()) {
            for option in rule.options() {
                if let Some(value) = stored.get(option.name) {
                    if value.matches_kind(&option.kind) {
                        resolved.insert(option.name, value.clone());
                    } else {
                        warn!(
                            rule = rule.name(),
                            option = option.name,
                            "stored option value has wrong type, using default"
                        );
                    }
                }
            }
        }
        resolved.insert(
            ARRAY_STYLE_OPTION,
            crate::options::OptionValue::Text(settings.style.array_style.as_str().to_string()),
        );
        resolved.insert(
            ESCAPE_CHAR_OPTION,
            crate::options::OptionValue::Text(settings.style.escape_char.char().to_string()),
        );
        resolved
    }

    /// Aliases disabled by the document's own `disabled rules` directive.
    ///
    /// The literal scalar `all` disables every registered rule; an absent
    /// key disables none; otherwise the parsed scalar/array is the set. A
    /// malformed directive disables nothing and is logged.
    pub fn disabled_aliases_for(&self, text: &str) -> HashSet<String> {
        let Some(body) = body(text) else {
            return HashSet::new();
        };
        let Some(raw) = get_section_value(body, DISABLED_RULES_KEY) else {
            return HashSet::new();
        };
        let aliases: Vec<String> = match parse_value(&raw) {
            Ok(SectionValue::Scalar(s)) if s.is_empty() => Vec::new(),
            Ok(SectionValue::Scalar(s)) => vec![s],
            Ok(SectionValue::List(items)) => items,
            Err(error) => {
                warn!(%error, "malformed `disabled rules` directive, ignoring");
                Vec::new()
            }
        };
        if aliases.iter().any(|a| a == "all") {
            return self.rules.iter().map(RuleDescriptor::alias).collect();
        }
        aliases.into_iter().collect()
    }
}
