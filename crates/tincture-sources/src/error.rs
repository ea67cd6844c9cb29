//! Error types for content source resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while expanding content patterns.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A pattern is not valid glob syntax.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A directory or file could not be read during expansion.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub(crate) fn invalid(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for source resolution.
pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_names_pattern() {
        let err = SourceError::invalid("src/[abc", "unclosed character class");
        let msg = err.to_string();
        assert!(msg.contains("'src/[abc'"));
        assert!(msg.contains("unclosed character class"));
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SourceError::io("/srv/site/templates", io_err);
        assert!(err.to_string().contains("/srv/site/templates"));
    }
}
