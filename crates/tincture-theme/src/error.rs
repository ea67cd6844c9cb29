//! Error types for theme resolution and preset loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::ThemeName;

/// Errors raised while resolving themes or selecting the active variant.
///
/// Every variant names the identifier that caused it, so a caller can fix
/// the configuration without looking at resolver internals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The requested base theme is not in the preset registry.
    #[error("unknown base theme '{name}'")]
    UnknownBaseTheme { name: ThemeName },

    /// The designated dark variant is not in the theme collection.
    #[error("dark theme '{name}' is not in the theme collection")]
    UnknownDarkTheme { name: ThemeName },

    /// Variant selection was attempted on an empty collection.
    #[error("theme collection is empty")]
    EmptyThemeCollection,

    /// A fallback chain was built from an empty value sequence.
    #[error("fallback chain needs at least one value")]
    EmptyChain,
}

impl ThemeError {
    pub(crate) fn unknown_base(name: impl Into<ThemeName>) -> Self {
        Self::UnknownBaseTheme { name: name.into() }
    }

    pub(crate) fn unknown_dark(name: impl Into<ThemeName>) -> Self {
        Self::UnknownDarkTheme { name: name.into() }
    }
}

/// Errors raised while loading presets into a registry.
#[derive(Debug, Error)]
pub enum PresetError {
    /// Preset YAML could not be parsed.
    #[error("failed to parse presets{}: {message}", location(.path))]
    Parse {
        /// Source file, when the YAML came from disk.
        path: Option<PathBuf>,
        /// Message from the YAML parser.
        message: String,
    },

    /// A preset file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
