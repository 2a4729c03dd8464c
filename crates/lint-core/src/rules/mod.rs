//! Built-in rules
//!
//! The catalog is intentionally small: enough to exercise both execution
//! passes, every option kind, and both engine primitives. Constructors are
//! assembled into one deterministic list consumed by
//! [`crate::registry::Registry::with_builtin_rules`].

pub mod emphasis_style;
pub mod force_value_escape;
pub mod no_bare_urls;
pub mod title_alias;
pub mod trailing_spaces;

use crate::descriptor::RuleDescriptor;

/// Every built-in rule constructor, in registration order.
pub const BUILTIN_RULES: &[fn() -> RuleDescriptor] = &[
    title_alias::descriptor,
    force_value_escape::descriptor,
    no_bare_urls::descriptor,
    emphasis_style::descriptor,
    trailing_spaces::descriptor,
];
