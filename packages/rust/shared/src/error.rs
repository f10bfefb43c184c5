//! Error types for ghdiscuss.
//!
//! Library crates use [`GhDiscussError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all report operations.
#[derive(Debug, thiserror::Error)]
pub enum GhDiscussError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Report content violates a structural invariant.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON encoding of the report failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GhDiscussError>;

impl GhDiscussError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = GhDiscussError::config("empty markdown_file");
        assert_eq!(err.to_string(), "config error: empty markdown_file");

        let err = GhDiscussError::validation("topic 'n8n' has no architecture sections");
        assert!(err.to_string().contains("no architecture sections"));
    }

    #[test]
    fn io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GhDiscussError::io("/readonly/analysis_data.json", source);
        let msg = err.to_string();
        assert!(msg.contains("analysis_data.json"));
        assert!(msg.contains("denied"));
    }
}
