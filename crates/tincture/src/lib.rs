//! # Tincture - Design-system configuration for utility-CSS builds
//!
//! Tincture loads a configuration document describing a utility-CSS design
//! system and resolves it into data a CSS build can consume:
//!
//! - theme presets from [`tincture_theme`], with local overrides applied
//! - the active light or dark variant for a [`DisplayMode`]
//! - per-property fallback chains and font stacks
//! - the content files to scan, via [`tincture_sources`]
//!
//! ## Loading
//!
//! ```rust
//! use tincture::TinctureConfig;
//! use tincture_theme::{DisplayMode, FixedSignal, PresetRegistry};
//!
//! let config = TinctureConfig::from_yaml(r##"
//! themes:
//!   - name: bumblebee
//!   - name: coffee
//!     overrides:
//!       - primary: "#38bdf8"
//! dark_theme: coffee
//! "##)?;
//!
//! let resolved = config.resolve(&PresetRegistry::builtin())?;
//! let active = resolved.active_with(DisplayMode::Dark, &FixedSignal::unavailable())?;
//! assert_eq!(active.get("primary"), Some("#38bdf8"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Long-running tools that watch the file use [`ConfigStore`], which swaps in
//! a freshly resolved configuration on reload.

mod config;
mod error;
mod resolved;
mod store;

pub use config::{FallbackEntry, ThemeEntry, TinctureConfig};
pub use error::{ConfigError, Result};
pub use resolved::ResolvedConfig;
pub use store::ConfigStore;

pub use tincture_theme::DisplayMode;
