//! Template error types.

use thiserror::Error;

/// Template-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` was opened but never closed.
    #[error("unterminated placeholder at byte {position} in template {template:?}")]
    Unterminated {
        /// The offending template source.
        template: String,
        /// Byte offset of the opening braces.
        position: usize,
    },

    /// A slot names a built-in formatter that does not exist.
    #[error("unknown built-in formatter: {0}")]
    UnknownBuiltin(String),
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
