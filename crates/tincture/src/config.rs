//! The configuration document.
//!
//! A document names the content globs to scan, font stacks, fallback chains,
//! the theme collection and which theme is the dark variant:
//!
//! ```yaml
//! content: ["./src/**/*.html", "./src/**/*.rs", "./*.html"]
//! fonts:
//!   sans: [Montserrat, ui-sans-serif, system-ui, sans-serif]
//! fallbacks:
//!   height.screen:
//!     - "100vh /* fallback for Opera, IE and etc. */"
//!     - 100dvh
//! themes:
//!   - name: bumblebee
//!   - name: coffee
//!     overrides:
//!       - primary: "#38bdf8"
//! dark_theme: coffee
//! ```
//!
//! Parsing only checks shape. [`TinctureConfig::resolve`] does the lookups
//! against a [`PresetRegistry`] and checks the cross-field rules.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tincture_sources::GlobPattern;
use tincture_theme::{
    build_chain, resolve_theme, ActiveVariantPolicy, FallbackValue, FontRoles, PresetRegistry,
    ThemeCollection, ThemeName, TokenSet,
};

use crate::error::{ConfigError, Result};
use crate::resolved::ResolvedConfig;

/// Unresolved configuration as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TinctureConfig {
    /// Glob patterns selecting the files scanned for class usage.
    #[serde(default)]
    pub content: Vec<String>,

    /// Globs removed from the content set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_ignore: Vec<String>,

    #[serde(default)]
    pub fonts: FontRoles,

    /// Property name to fallback values, most compatible first.
    #[serde(default)]
    pub fallbacks: BTreeMap<String, Vec<FallbackEntry>>,

    pub themes: Vec<ThemeEntry>,

    /// Name of the theme used in dark mode. Must be one of `themes`.
    pub dark_theme: ThemeName,
}

/// One entry of the `themes` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeEntry {
    pub name: ThemeName,

    /// Preset to start from. Defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<ThemeName>,

    /// Layers merged onto the base in order, last wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<TokenSet>,
}

impl ThemeEntry {
    pub fn new(name: impl Into<ThemeName>) -> Self {
        Self {
            name: name.into(),
            base: None,
            overrides: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<ThemeName>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_override(mut self, layer: TokenSet) -> Self {
        self.overrides.push(layer);
        self
    }

    /// The preset this entry resolves from.
    pub fn base_name(&self) -> &ThemeName {
        self.base.as_ref().unwrap_or(&self.name)
    }
}

/// A fallback value, either a literal with an optional `/* note */` or an
/// explicit `{ value, note }` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallbackEntry {
    Annotated(String),
    Detailed(FallbackValue),
}

impl From<FallbackEntry> for FallbackValue {
    fn from(entry: FallbackEntry) -> Self {
        match entry {
            FallbackEntry::Annotated(literal) => FallbackValue::parse_annotated(&literal),
            FallbackEntry::Detailed(value) => value,
        }
    }
}

impl From<&FallbackEntry> for FallbackValue {
    fn from(entry: &FallbackEntry) -> Self {
        entry.clone().into()
    }
}

impl TinctureConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(ConfigError::parse)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the JSON is malformed or has unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ConfigError::parse)
    }

    /// Reads a document, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::UnsupportedFormat`] for unknown extensions, and
    /// [`ConfigError::Parse`] naming the file for invalid content.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        parse(&text).map_err(|e| e.in_file(path))
    }

    /// Resolves themes, fallbacks and content patterns.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateTheme`] when two entries share a name
    /// - [`ConfigError::Theme`] for an unknown base preset, an empty theme
    ///   list, or a `dark_theme` missing from the list
    /// - [`ConfigError::Fallback`] for a property with no values
    /// - [`ConfigError::Sources`] for a malformed content or ignore pattern
    pub fn resolve(&self, registry: &PresetRegistry) -> Result<ResolvedConfig> {
        let themes = self.resolve_themes(registry)?;
        let policy = ActiveVariantPolicy::new(self.dark_theme.clone(), &themes)?;

        let mut fallbacks = BTreeMap::new();
        for (property, entries) in &self.fallbacks {
            let chain = build_chain(entries).map_err(|source| ConfigError::Fallback {
                property: property.clone(),
                source,
            })?;
            fallbacks.insert(property.clone(), chain);
        }

        for pattern in self.content.iter().chain(&self.content_ignore) {
            GlobPattern::new(pattern.as_str())?;
        }

        tracing::debug!(
            themes = themes.len(),
            dark = %policy.dark(),
            fallbacks = fallbacks.len(),
            content = self.content.len(),
            "resolved config"
        );

        Ok(ResolvedConfig::new(
            themes,
            policy,
            self.fonts.clone(),
            fallbacks,
            self.content.clone(),
            self.content_ignore.clone(),
        ))
    }

    fn resolve_themes(&self, registry: &PresetRegistry) -> Result<ThemeCollection> {
        let mut seen = HashSet::new();
        let mut themes = ThemeCollection::new();
        for entry in &self.themes {
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateTheme {
                    name: entry.name.clone(),
                });
            }
            themes.push(resolve_theme(
                registry,
                &entry.name,
                entry.base_name().as_str(),
                &entry.overrides,
            )?);
        }
        Ok(themes)
    }
}
