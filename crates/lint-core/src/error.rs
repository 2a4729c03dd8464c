//! Error types for lint-core

/// Result type for lint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lint-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule's rewrite function failed; carries the rule's display name
    /// and the original cause
    #[error("rule '{rule}' failed: {source}")]
    RuleFailed {
        rule: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Two registered rules normalize to the same alias
    #[error("duplicate rule alias '{alias}'")]
    DuplicateAlias { alias: String },

    /// Frontmatter value error from lint-frontmatter
    #[error(transparent)]
    Frontmatter(#[from] lint_frontmatter::Error),

    /// Settings could not be deserialized from YAML
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Settings could not be deserialized from JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a rewrite failure with the failing rule's display name.
    pub fn rule_failed(rule: impl Into<String>, source: Error) -> Self {
        Self::RuleFailed {
            rule: rule.into(),
            source: Box::new(source),
        }
    }
}
