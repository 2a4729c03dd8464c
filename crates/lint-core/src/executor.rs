//! Rule Executor
//!
//! Applies every enabled rule to a document in order: normal-order rules in
//! `(category, name)` order, then special-order rules in their relative
//! registration order. Each rule consumes the previous rule's full output;
//! a failure aborts the remaining pipeline (fail-fast, no partial apply).

use tracing::debug;

use crate::descriptor::{ENABLED_OPTION, RuleDescriptor};
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::settings::Settings;

/// Runs the registry's rules over one document at a time.
///
/// The registry must be fully populated before the first run and is shared
/// read-only; concurrent runs on independent documents only need their own
/// settings snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Executor<'a> {
    registry: &'a Registry,
}

impl<'a> Executor<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Apply every enabled rule and return the rewritten document.
    ///
    /// A rule is skipped when its alias is disabled (by the document's
    /// `disabled rules` directive or the settings' global list) or its
    /// enabled option resolves false. Special-order rules run in a trailing
    /// pass so they observe the final shape every normal rule produced.
    pub fn run(&self, text: &str, settings: &Settings) -> Result<String> {
        let mut disabled = self.registry.disabled_aliases_for(text);
        disabled.extend(settings.disabled.iter().cloned());

        let normal = self
            .registry
            .ordered_rules()
            .filter(|rule| !rule.special_order());
        let special = self
            .registry
            .registered_rules()
            .filter(|rule| rule.special_order());

        let mut text = text.to_string();
        for rule in normal.chain(special) {
            let alias = rule.alias();
            if disabled.contains(&alias) {
                debug!(rule = rule.name(), "skipped: disabled");
                continue;
            }
            let options = self.registry.resolve_options(rule, settings);
            if !options.bool(ENABLED_OPTION) {
                debug!(rule = rule.name(), "skipped: not enabled");
                continue;
            }
            text = rule.rewrite(&text, &options).map_err(|source| {
                self.rule_failure(rule, source)
            })?;
            debug!(rule = rule.name(), "applied");
        }
        Ok(text)
    }

    fn rule_failure(&self, rule: &RuleDescriptor, source: Error) -> Error {
        debug!(rule = rule.name(), %source, "rule failed, aborting run");
        Error::rule_failed(rule.name(), source)
    }
}
