//! Fully resolved configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tincture_sources::{SourceResolver, SourceSet};
use tincture_theme::{
    ActiveVariantPolicy, DisplayMode, FallbackChain, FontRoles, ResolvedTheme, SchemeSignal,
    ThemeCollection, ThemeName,
};

/// A configuration whose themes, fallbacks and patterns have all been
/// checked. Every [`ResolvedConfig`] has a non-empty theme collection that
/// contains its dark theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    themes: ThemeCollection,
    #[serde(rename = "dark_theme", serialize_with = "serialize_policy")]
    policy: ActiveVariantPolicy,
    fonts: FontRoles,
    fallbacks: BTreeMap<String, FallbackChain>,
    content: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content_ignore: Vec<String>,
}

fn serialize_policy<S: serde::Serializer>(
    policy: &ActiveVariantPolicy,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    policy.dark().serialize(serializer)
}

impl ResolvedConfig {
    pub(crate) fn new(
        themes: ThemeCollection,
        policy: ActiveVariantPolicy,
        fonts: FontRoles,
        fallbacks: BTreeMap<String, FallbackChain>,
        content: Vec<String>,
        content_ignore: Vec<String>,
    ) -> Self {
        Self {
            themes,
            policy,
            fonts,
            fallbacks,
            content,
            content_ignore,
        }
    }

    pub fn themes(&self) -> &ThemeCollection {
        &self.themes
    }

    pub fn dark_theme(&self) -> &ThemeName {
        self.policy.dark()
    }

    pub fn fonts(&self) -> &FontRoles {
        &self.fonts
    }

    pub fn fallbacks(&self) -> &BTreeMap<String, FallbackChain> {
        &self.fallbacks
    }

    pub fn fallback(&self, property: &str) -> Option<&FallbackChain> {
        self.fallbacks.get(property)
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn content_ignore(&self) -> &[String] {
        &self.content_ignore
    }

    /// The active theme for `mode`, asking the OS for `System`.
    ///
    /// # Errors
    ///
    /// Only fails if the collection no longer satisfies the variant policy,
    /// which cannot happen for a config built by [`TinctureConfig::resolve`].
    ///
    /// [`TinctureConfig::resolve`]: crate::TinctureConfig::resolve
    pub fn active(&self, mode: DisplayMode) -> tincture_theme::Result<&ResolvedTheme> {
        self.policy.select(&self.themes, mode)
    }

    /// The active theme for `mode`, using `signal` for `System`.
    pub fn active_with<S: SchemeSignal + ?Sized>(
        &self,
        mode: DisplayMode,
        signal: &S,
    ) -> tincture_theme::Result<&ResolvedTheme> {
        self.policy.select_with(&self.themes, mode, signal)
    }

    /// Expands the content patterns against `root`.
    ///
    /// The filesystem is read on every call, so the result reflects files
    /// added or removed since the configuration was loaded.
    ///
    /// # Errors
    ///
    /// Returns [`tincture_sources::SourceError::Io`] if `root` or a
    /// directory under it cannot be read.
    pub fn scan_sources(&self, root: impl AsRef<Path>) -> tincture_sources::Result<SourceSet> {
        SourceResolver::new(root.as_ref())
            .ignore_all(self.content_ignore.iter().cloned())
            .resolve(self.content.iter().cloned())
    }
}
