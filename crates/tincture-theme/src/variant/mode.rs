//! Display modes and color scheme preference signals.
//!
//! [`DisplayMode::System`] defers to a [`SchemeSignal`]. The default signal,
//! [`OsSchemeSignal`], asks the OS through the `dark-light` crate. Tests and
//! embedders (a browser bridge, a settings file) pass their own signal to
//! [`select_active_with`](super::select_active_with) instead:
//!
//! ```rust
//! use tincture_theme::{ColorScheme, FixedSignal, SchemeSignal};
//!
//! let signal = FixedSignal::new(Some(ColorScheme::Dark));
//! assert_eq!(signal.preferred_scheme(), Some(ColorScheme::Dark));
//!
//! // Closures work too.
//! let unavailable = || None::<ColorScheme>;
//! assert_eq!(unavailable.preferred_scheme(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// The display mode a caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    Dark,
    /// Follow the preference signal, or behave like `Light` without one.
    #[default]
    System,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        })
    }
}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl From<ColorScheme> for DisplayMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

/// Error returned when a mode or scheme string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown display mode '{0}' (expected light, dark or system)")]
pub struct ParseModeError(String);

/// Source of the user's preferred color scheme.
///
/// Returns `None` when no preference is available.
pub trait SchemeSignal {
    fn preferred_scheme(&self) -> Option<ColorScheme>;
}

impl<F> SchemeSignal for F
where
    F: Fn() -> Option<ColorScheme>,
{
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        self()
    }
}

/// Queries the operating system for its light/dark preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSchemeSignal;

impl SchemeSignal for OsSchemeSignal {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(ColorScheme::Dark),
            Ok(dark_light::Mode::Light) => Some(ColorScheme::Light),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(err) => {
                tracing::debug!(%err, "OS color scheme detection failed");
                None
            }
        }
    }
}

/// A signal with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSignal(Option<ColorScheme>);

impl FixedSignal {
    pub const fn new(scheme: Option<ColorScheme>) -> Self {
        Self(scheme)
    }

    /// A signal that never has a preference.
    pub const fn unavailable() -> Self {
        Self(None)
    }
}

impl SchemeSignal for FixedSignal {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        self.0
    }
}
