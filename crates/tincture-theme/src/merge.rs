//! Layered, last-wins token overrides.
//!
//! A resolved theme is a preset with zero or more override layers applied in
//! order:
//!
//! ```text
//! base:       primary=#db924b  accent=#10576d
//! layer 1:    primary=#38bdf8
//! layer 2:                     accent=#0ea5e9   info=#8dcac1
//! ----------------------------------------------------------
//! resolved:   primary=#38bdf8  accent=#0ea5e9   info=#8dcac1
//! ```
//!
//! Merging is shallow per role. A role value is replaced as a whole and never
//! merged into, since values may be structured color expressions.

use serde::Serialize;

use crate::error::Result;
use crate::preset::PresetRegistry;
use crate::tokens::{ThemeName, TokenSet};
use crate::variant::ColorScheme;

/// Role that carries a theme's intended color scheme.
pub const COLOR_SCHEME_ROLE: &str = "color-scheme";

/// A fully merged token set for one theme name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    name: ThemeName,
    tokens: TokenSet,
}

impl ResolvedTheme {
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

    pub fn get(&self, role: &str) -> Option<&str> {
        self.tokens.get(role)
    }

    /// The scheme declared by the `color-scheme` role, if any.
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.tokens.get(COLOR_SCHEME_ROLE)?.parse().ok()
    }

    pub fn into_tokens(self) -> TokenSet {
        self.tokens
    }
}

/// Applies override layers on top of `base`.
///
/// For each role present in any layer, the last layer that defines it wins.
/// Roles absent from every layer keep the base value; roles only present in
/// layers are added.
///
/// ```rust
/// use tincture_theme::{merge, TokenSet};
///
/// let base = TokenSet::new().with("primary", "#db924b").with("accent", "#10576d");
/// let layers = [
///     TokenSet::new().with("primary", "#38bdf8"),
///     TokenSet::new().with("primary", "#0ea5e9").with("info", "#8dcac1"),
/// ];
///
/// let merged = merge(&base, &layers);
/// assert_eq!(merged.get("primary"), Some("#0ea5e9"));
/// assert_eq!(merged.get("accent"), Some("#10576d"));
/// assert_eq!(merged.get("info"), Some("#8dcac1"));
/// ```
pub fn merge<'a, I>(base: &TokenSet, overrides: I) -> TokenSet
where
    I: IntoIterator<Item = &'a TokenSet>,
{
    let mut merged = base.clone();
    for layer in overrides {
        for (role, value) in layer {
            merged.insert(role.clone(), value.clone());
        }
    }
    merged
}

/// Resolves `name` by merging `overrides` onto the preset `base`.
///
/// # Errors
///
/// Returns [`ThemeError::UnknownBaseTheme`](crate::ThemeError::UnknownBaseTheme)
/// if `base` is not in the registry.
pub fn resolve_theme<'a, I>(
    registry: &PresetRegistry,
    name: impl Into<ThemeName>,
    base: &str,
    overrides: I,
) -> Result<ResolvedTheme>
where
    I: IntoIterator<Item = &'a TokenSet>,
{
    let name = name.into();
    let preset = registry.lookup(base)?;
    let tokens = merge(preset.tokens(), overrides);
    tracing::debug!(theme = %name, base, roles = tokens.len(), "resolved theme");
    Ok(ResolvedTheme::new(name, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeError;

    fn base() -> TokenSet {
        TokenSet::new()
            .with("primary", "#db924b")
            .with("secondary", "#263e3f")
    }

    #[test]
    fn test_merge_empty_overrides_is_identity() {
        let merged = merge(&base(), std::iter::empty());
        assert_eq!(merged, base());
    }

    #[test]
    fn test_merge_last_layer_wins() {
        let layers = vec![
            TokenSet::new().with("primary", "first"),
            TokenSet::new().with("primary", "second"),
        ];
        let merged = merge(&base(), &layers);
        assert_eq!(merged.get("primary"), Some("second"));
        assert_eq!(merged.get("secondary"), Some("#263e3f"));
    }

    #[test]
    fn test_merge_earlier_layer_kept_when_later_silent() {
        let layers = vec![
            TokenSet::new().with("accent", "from-first"),
            TokenSet::new().with("primary", "from-second"),
        ];
        let merged = merge(&base(), &layers);
        assert_eq!(merged.get("accent"), Some("from-first"));
        assert_eq!(merged.get("primary"), Some("from-second"));
    }

    #[test]
    fn test_merge_values_are_atomic() {
        let base = TokenSet::new().with("primary", "oklch(65% 0.2 250)");
        let layers = vec![TokenSet::new().with("primary", "oklch(70% 0.1 200 / 0.5)")];
        let merged = merge(&base, &layers);
        assert_eq!(merged.get("primary"), Some("oklch(70% 0.1 200 / 0.5)"));
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let base = base();
        let layer = TokenSet::new().with("primary", "changed");
        let _ = merge(&base, [&layer]);
        assert_eq!(base.get("primary"), Some("#db924b"));
    }

    #[test]
    fn test_resolve_theme_from_builtin() {
        let registry = PresetRegistry::builtin();
        let layer = TokenSet::new().with("primary", "#38bdf8");
        let coffee = resolve_theme(&registry, "coffee", "coffee", [&layer]).unwrap();

        assert_eq!(coffee.name(), "coffee");
        assert_eq!(coffee.get("primary"), Some("#38bdf8"));
        assert_eq!(coffee.get("base-100"), Some("#20161f"));
        assert_eq!(coffee.color_scheme(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_resolve_theme_renamed() {
        let registry = PresetRegistry::builtin();
        let theme = resolve_theme(&registry, "night", "dracula", std::iter::empty()).unwrap();
        assert_eq!(theme.name(), "night");
        assert_eq!(theme.get("base-100"), Some("#282a36"));
    }

    #[test]
    fn test_resolve_theme_unknown_base() {
        let registry = PresetRegistry::builtin();
        let err = resolve_theme(&registry, "mine", "solarized", std::iter::empty()).unwrap_err();
        assert_eq!(
            err,
            ThemeError::UnknownBaseTheme {
                name: ThemeName::from("solarized")
            }
        );
    }

    #[test]
    fn test_color_scheme_absent() {
        let theme = ResolvedTheme::new("plain", TokenSet::new());
        assert_eq!(theme.color_scheme(), None);
    }
}
