//! # Tincture Theme - Preset composition and variant selection
//!
//! `tincture-theme` resolves the theme half of a utility-CSS design system
//! configuration: named presets, local overrides, and the light/dark choice.
//! It produces plain token sets; turning them into CSS custom properties is
//! left to the build pipeline that consumes them.
//!
//! ## Core Concepts
//!
//! - [`PresetRegistry`]: read-only map from theme name to base [`TokenSet`]
//! - [`merge`] / [`resolve_theme`]: ordered, last-wins override layers
//! - [`ThemeCollection`] + [`select_active`]: pick the active variant for a
//!   [`DisplayMode`]
//! - [`build_chain`]: ordered legacy-to-modern values for one property
//! - [`FontRoles`]: verbatim font-family stacks
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture_theme::{
//!     resolve_theme, select_active_with, DisplayMode, FixedSignal, PresetRegistry,
//!     ThemeCollection, TokenSet,
//! };
//!
//! let registry = PresetRegistry::builtin();
//! let brand = TokenSet::new().with("primary", "#38bdf8");
//!
//! let themes: ThemeCollection = [
//!     resolve_theme(&registry, "bumblebee", "bumblebee", std::iter::empty()).unwrap(),
//!     resolve_theme(&registry, "coffee", "coffee", [&brand]).unwrap(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let active =
//!     select_active_with(&themes, "coffee", DisplayMode::Dark, &FixedSignal::unavailable())
//!         .unwrap();
//! assert_eq!(active.get("primary"), Some("#38bdf8"));
//! ```
//!
//! ## Display Modes
//!
//! `Light` and `Dark` are explicit. `System` asks a [`SchemeSignal`];
//! [`select_active`] uses [`OsSchemeSignal`], which queries the OS, and falls
//! back to `Light` when the OS has no answer.

mod error;
mod fallback;
mod font;
mod merge;
pub mod preset;
mod tokens;
pub mod variant;

pub use error::{PresetError, Result, ThemeError};
pub use fallback::{build_chain, FallbackChain, FallbackValue};
pub use font::{FontRoles, FontStack};
pub use merge::{merge, resolve_theme, ResolvedTheme, COLOR_SCHEME_ROLE};
pub use preset::{Preset, PresetRegistry, PRESET_EXTENSIONS};
pub use tokens::{ThemeName, TokenSet};
pub use variant::{
    select_active, select_active_with, ActiveVariantPolicy, ColorScheme, DisplayMode,
    FixedSignal, OsSchemeSignal, ParseModeError, SchemeSignal, ThemeCollection,
};
