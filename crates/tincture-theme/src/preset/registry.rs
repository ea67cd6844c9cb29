//! Preset registry for named base themes.
//!
//! The registry is populated once (from the built-in catalog, inline YAML, or
//! a directory of preset files) and is read-only afterwards. Share it behind an
//! `Arc` once loading is done.
//!
//! # Preset Files
//!
//! Each file in a preset directory defines one preset named by its file stem:
//!
//! ```yaml
//! # themes/harbor.yaml
//! color-scheme: dark
//! primary: "#38bdf8"
//! base-100: "#0b1120"
//! ```
//!
//! Files are recognized by extension, in priority order:
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.yaml` |
//! | 2 | `.yml` |
//!
//! If `harbor.yaml` and `harbor.yml` both exist, `harbor.yaml` wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use crate::error::{PresetError, Result, ThemeError};
use crate::tokens::{ThemeName, TokenSet};

/// Recognized preset file extensions in priority order.
pub const PRESET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

const BUILTIN_PRESETS: &str = include_str!("builtin.yaml");

static BUILTIN: Lazy<BTreeMap<ThemeName, Preset>> = Lazy::new(|| {
    parse_presets(BUILTIN_PRESETS, None).expect("built-in preset catalog is valid YAML")
});

/// A named, immutable base token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    name: ThemeName,
    tokens: TokenSet,
}

impl Preset {
    pub fn new(name: impl Into<ThemeName>, tokens: TokenSet) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    pub fn name(&self) -> &ThemeName {
        &self.name
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}

/// Lookup table from theme name to [`Preset`].
///
/// # Example
///
/// ```rust
/// use tincture_theme::PresetRegistry;
///
/// let registry = PresetRegistry::builtin();
/// let coffee = registry.lookup("coffee").unwrap();
/// assert_eq!(coffee.tokens().get("color-scheme"), Some("dark"));
/// assert!(registry.lookup("no-such-theme").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<ThemeName, Preset>,
}

impl PresetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            presets: BUILTIN.clone(),
        }
    }

    /// Creates a registry from a YAML mapping of `name -> { role: value }`.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, PresetError> {
        Ok(Self {
            presets: parse_presets(yaml, None)?,
        })
    }

    /// Adds every preset in a YAML mapping, replacing presets of the same name.
    pub fn add_yaml(&mut self, yaml: &str) -> std::result::Result<(), PresetError> {
        for (name, preset) in parse_presets(yaml, None)? {
            self.insert(name, preset);
        }
        Ok(())
    }

    /// Adds a single preset, replacing any preset of the same name.
    pub fn add_preset(&mut self, name: impl Into<ThemeName>, tokens: TokenSet) {
        let name = name.into();
        let preset = Preset::new(name.clone(), tokens);
        self.insert(name, preset);
    }

    /// Adds every preset file found directly inside `dir`.
    ///
    /// Presets from the directory replace presets of the same name that were
    /// already registered, which lets a project shadow a built-in preset.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Load`] if the directory or a file cannot be read,
    /// and [`PresetError::Parse`] if a file is not a role mapping.
    pub fn add_dir<P: AsRef<Path>>(&mut self, dir: P) -> std::result::Result<(), PresetError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| PresetError::Load {
            path: dir.to_path_buf(),
            source,
        })?;

        // stem -> (extension priority, path)
        let mut found: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| PresetError::Load {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some((stem, priority)) = preset_stem(&path) else {
                continue;
            };
            match found.get(&stem) {
                Some((existing, _)) if *existing <= priority => {}
                _ => {
                    found.insert(stem, (priority, path));
                }
            }
        }

        for (stem, (_, path)) in found {
            let content = std::fs::read_to_string(&path).map_err(|source| PresetError::Load {
                path: path.clone(),
                source,
            })?;
            let tokens: TokenSet =
                serde_yaml::from_str(&content).map_err(|e| PresetError::Parse {
                    path: Some(path.clone()),
                    message: e.to_string(),
                })?;
            tracing::debug!(preset = %stem, path = %path.display(), "loaded preset file");
            self.add_preset(stem, tokens);
        }
        Ok(())
    }

    /// Looks up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownBaseTheme`] if no preset has that name.
    pub fn lookup(&self, name: &str) -> Result<&Preset> {
        self.presets
            .get(name)
            .ok_or_else(|| ThemeError::unknown_base(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &ThemeName> {
        self.presets.keys()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn insert(&mut self, name: ThemeName, preset: Preset) {
        if self.presets.insert(name.clone(), preset).is_some() {
            tracing::debug!(preset = %name, "preset replaced");
        }
    }
}

fn parse_presets(
    yaml: &str,
    path: Option<&Path>,
) -> std::result::Result<BTreeMap<ThemeName, Preset>, PresetError> {
    let raw: BTreeMap<ThemeName, TokenSet> =
        serde_yaml::from_str(yaml).map_err(|e| PresetError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?;
    Ok(raw
        .into_iter()
        .map(|(name, tokens)| (name.clone(), Preset::new(name, tokens)))
        .collect())
}

/// Returns the file stem and extension priority for a preset file.
fn preset_stem(path: &Path) -> Option<(String, usize)> {
    let file_name = path.file_name()?.to_str()?;
    PRESET_EXTENSIONS
        .iter()
        .enumerate()
        .find_map(|(priority, ext)| {
            file_name
                .strip_suffix(ext)
                .filter(|stem| !stem.is_empty())
                .map(|stem| (stem.to_string(), priority))
        })
}
