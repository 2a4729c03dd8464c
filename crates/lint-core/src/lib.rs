//! Rule registry and executor for the markdown linter
//!
//! This crate coordinates the two foundation crates into a rule pipeline:
//!
//! ```text
//!                 Executor
//!                     |
//!                 Registry
//!                     |
//!          +----------+----------+
//!          |                     |
//!     lint-mask         lint-frontmatter
//! ```
//!
//! A [`RuleDescriptor`] pairs a name, a fixed category, a typed option
//! schema, and a rewrite function. The [`Registry`] keeps descriptors
//! ordered by `(category, name)` and indexed by alias; the [`Executor`]
//! applies every enabled rule in order, normal-order rules first and
//! special-order rules in a trailing pass, feeding each rule the previous
//! rule's full output.

pub mod descriptor;
pub mod error;
pub mod executor;
pub mod options;
pub mod registry;
pub mod rules;
pub mod settings;

pub use descriptor::{ENABLED_OPTION, RewriteFn, RuleCategory, RuleDescriptor};
pub use error::{Error, Result};
pub use executor::Executor;
pub use options::{OptionKind, OptionValue, ResolvedOptions, RuleOption};
pub use registry::{DISABLED_RULES_KEY, Registry};
pub use settings::{
    ARRAY_STYLE_OPTION, ArrayStyle, ESCAPE_CHAR_OPTION, EscapeChar, Settings, StylePreferences,
};
