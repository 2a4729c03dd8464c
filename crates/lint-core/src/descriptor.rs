//! Rule descriptor and category ordering

use crate::error::Result;
use crate::options::{OptionValue, ResolvedOptions, RuleOption};

/// Name of the auto-injected enabled option (always option 0).
pub const ENABLED_OPTION: &str = "enabled";

/// Fixed, totally ordered rule groupings controlling application order.
///
/// The declaration order is the application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleCategory {
    Metadata,
    Heading,
    Footnote,
    Content,
    Spacing,
    Paste,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Metadata => "Metadata",
            Self::Heading => "Heading",
            Self::Footnote => "Footnote",
            Self::Content => "Content",
            Self::Spacing => "Spacing",
            Self::Paste => "Paste",
        };
        f.write_str(name)
    }
}

/// A rule's rewrite function: previous text in, rewritten text out.
pub type RewriteFn = fn(&str, &ResolvedOptions) -> Result<String>;

/// An immutable description of one rule.
///
/// Constructed once at startup and held for the life of the process; the
/// enabled boolean is injected as option 0 during construction.
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    name: &'static str,
    category: RuleCategory,
    description: &'static str,
    options: Vec<RuleOption>,
    rewrite: RewriteFn,
    special_order: bool,
}

impl RuleDescriptor {
    pub fn new(
        name: &'static str,
        category: RuleCategory,
        description: &'static str,
        extra_options: Vec<RuleOption>,
        rewrite: RewriteFn,
    ) -> Self {
        let mut options = vec![RuleOption::bool(
            ENABLED_OPTION,
            "Whether this rule is applied",
            true,
        )];
        options.extend(extra_options);
        Self {
            name,
            category,
            description,
            options,
            rewrite,
            special_order: false,
        }
    }

    /// Defer this rule to the trailing pass after all normal-order rules.
    pub fn with_special_order(mut self) -> Self {
        self.special_order = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn options(&self) -> &[RuleOption] {
        &self.options
    }

    pub fn special_order(&self) -> bool {
        self.special_order
    }

    /// The stable external key for this rule: its name lowercased with
    /// every run of non-alphanumeric characters collapsed to one hyphen.
    pub fn alias(&self) -> String {
        let mut alias = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_alphanumeric() {
                alias.extend(c.to_lowercase());
            } else if !alias.ends_with('-') && !alias.is_empty() {
                alias.push('-');
            }
        }
        alias.trim_end_matches('-').to_string()
    }

    /// Documentation URL for this rule under the given base.
    pub fn doc_url(&self, base: &str) -> String {
        format!("{base}#{}", self.alias())
    }

    /// The declared defaults for every option, enabled flag included.
    pub fn default_options(&self) -> ResolvedOptions {
        let mut resolved = ResolvedOptions::default();
        for option in &self.options {
            resolved.insert(option.name, option.default.clone());
        }
        resolved
    }

    /// Invoke the rewrite function.
    pub fn rewrite(&self, text: &str, options: &ResolvedOptions) -> Result<String> {
        (self.rewrite)(text, options)
    }

    /// Resolved default for the enabled flag.
    pub fn enabled_by_default(&self) -> bool {
        matches!(self.options[0].default, OptionValue::Bool(true))
    }
}
