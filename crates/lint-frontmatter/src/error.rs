//! Error types for lint-frontmatter

/// Result type for lint-frontmatter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lint-frontmatter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A section value does not parse under its detected encoding
    #[error("malformed frontmatter value: {message}")]
    MalformedValue { message: String },
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedValue {
            message: message.into(),
        }
    }
}
