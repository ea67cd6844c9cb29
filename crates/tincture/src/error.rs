//! Error types for configuration loading and resolution.

use std::path::PathBuf;

use thiserror::Error;
use tincture_sources::SourceError;
use tincture_theme::{ThemeError, ThemeName};

/// Errors raised while loading or resolving a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML/JSON or does not fit the schema.
    #[error("failed to parse config{}: {message}", location(.path))]
    Parse {
        /// Source file, when the document came from disk.
        path: Option<PathBuf>,
        message: String,
    },

    /// The file extension is not one of `.yaml`, `.yml` or `.json`.
    #[error("unsupported config format for {}: expected .yaml, .yml or .json", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Theme resolution or variant validation failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Two theme entries share a name.
    #[error("theme '{name}' is defined more than once")]
    DuplicateTheme { name: ThemeName },

    /// A fallback property has no values.
    #[error("invalid fallbacks for '{property}': {source}")]
    Fallback {
        property: String,
        #[source]
        source: ThemeError,
    },

    /// A content pattern is malformed, or expansion failed.
    #[error(transparent)]
    Sources(#[from] SourceError),
}

impl ConfigError {
    pub(crate) fn parse(message: impl ToString) -> Self {
        Self::Parse {
            path: None,
            message: message.to_string(),
        }
    }

    /// Attaches the source file to a parse error.
    pub(crate) fn in_file(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse {
                path: None,
                message,
            } => Self::Parse {
                path: Some(file.into()),
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_gains_path() {
        let err = ConfigError::parse("unknown field `colour`").in_file("site/tincture.yaml");
        let msg = err.to_string();
        assert!(msg.contains("site/tincture.yaml"));
        assert!(msg.contains("unknown field `colour`"));
    }

    #[test]
    fn test_in_file_keeps_other_errors() {
        let err = ConfigError::DuplicateTheme {
            name: ThemeName::from("coffee"),
        }
        .in_file("tincture.yaml");
        assert!(matches!(err, ConfigError::DuplicateTheme { .. }));
    }

    #[test]
    fn test_fallback_error_names_property() {
        let err = ConfigError::Fallback {
            property: "height.screen".to_string(),
            source: ThemeError::EmptyChain,
        };
        assert!(err.to_string().contains("'height.screen'"));
    }

    #[test]
    fn test_theme_error_is_transparent() {
        let theme_err = ThemeError::EmptyThemeCollection;
        let err = ConfigError::from(theme_err.clone());
        assert_eq!(err.to_string(), theme_err.to_string());
    }
}
