//! Theme collections and active variant selection.

use serde::Serialize;

use super::mode::{ColorScheme, DisplayMode, OsSchemeSignal, SchemeSignal};
use crate::error::{Result, ThemeError};
use crate::merge::ResolvedTheme;
use crate::tokens::ThemeName;

/// Ordered sequence of resolved themes.
///
/// Order matters only for presentation; selection looks themes up by name,
/// except that `Light` picks the first entry that is not the dark variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeCollection {
    themes: Vec<ResolvedTheme>,
}

impl ThemeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a theme, returning `self` for chaining.
    pub fn with(mut self, theme: ResolvedTheme) -> Self {
        self.themes.push(theme);
        self
    }

    pub fn push(&mut self, theme: ResolvedTheme) {
        self.themes.push(theme);
    }

    /// Returns the first theme with the given name.
    pub fn get(&self, name: &str) -> Option<&ResolvedTheme> {
        self.themes.iter().find(|theme| theme.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &ThemeName> {
        self.themes.iter().map(ResolvedTheme::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedTheme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl FromIterator<ResolvedTheme> for ThemeCollection {
    fn from_iter<I: IntoIterator<Item = ResolvedTheme>>(iter: I) -> Self {
        Self {
            themes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ThemeCollection {
    type Item = &'a ResolvedTheme;
    type IntoIter = std::slice::Iter<'a, ResolvedTheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.themes.iter()
    }
}

/// Designates which theme in a collection is the dark variant.
///
/// A policy can only be built against a collection that contains the named
/// theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveVariantPolicy {
    dark: ThemeName,
}

impl ActiveVariantPolicy {
    /// Validates `dark` against `themes`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::EmptyThemeCollection`] if `themes` is empty, or
    /// [`ThemeError::UnknownDarkTheme`] if `dark` is not in it.
    pub fn new(dark: impl Into<ThemeName>, themes: &ThemeCollection) -> Result<Self> {
        let dark = dark.into();
        validate(themes, dark.as_str())?;
        Ok(Self { dark })
    }

    pub fn dark(&self) -> &ThemeName {
        &self.dark
    }

    /// Selects the active theme, resolving `System` through the OS.
    pub fn select<'t>(
        &self,
        themes: &'t ThemeCollection,
        mode: DisplayMode,
    ) -> Result<&'t ResolvedTheme> {
        select_active(themes, self.dark.as_str(), mode)
    }

    /// Selects the active theme, resolving `System` through `signal`.
    pub fn select_with<'t, S: SchemeSignal + ?Sized>(
        &self,
        themes: &'t ThemeCollection,
        mode: DisplayMode,
        signal: &S,
    ) -> Result<&'t ResolvedTheme> {
        select_active_with(themes, self.dark.as_str(), mode, signal)
    }
}

/// Selects the active theme for `mode`, asking the OS when `mode` is `System`.
///
/// See [`select_active_with`] for the selection rules.
pub fn select_active<'t>(
    themes: &'t ThemeCollection,
    dark: &str,
    mode: DisplayMode,
) -> Result<&'t ResolvedTheme> {
    select_active_with(themes, dark, mode, &OsSchemeSignal)
}

/// Selects the active theme for `mode`.
///
/// - `Dark` returns the theme named `dark`.
/// - `Light` returns the first theme not named `dark`. When the dark theme is
///   the only entry, it is returned.
/// - `System` follows `signal`, and behaves like `Light` when the signal has
///   no preference.
///
/// # Errors
///
/// [`ThemeError::EmptyThemeCollection`] if `themes` is empty, or
/// [`ThemeError::UnknownDarkTheme`] if `dark` is not in `themes`.
///
/// # Example
///
/// ```rust
/// use tincture_theme::{
///     select_active_with, DisplayMode, FixedSignal, ResolvedTheme, ThemeCollection, TokenSet,
/// };
///
/// let themes = ThemeCollection::new()
///     .with(ResolvedTheme::new("bumblebee", TokenSet::new()))
///     .with(ResolvedTheme::new("coffee", TokenSet::new()));
///
/// let no_signal = FixedSignal::unavailable();
/// let dark = select_active_with(&themes, "coffee", DisplayMode::Dark, &no_signal).unwrap();
/// let light = select_active_with(&themes, "coffee", DisplayMode::Light, &no_signal).unwrap();
/// let system = select_active_with(&themes, "coffee", DisplayMode::System, &no_signal).unwrap();
/// assert_eq!(dark.name(), "coffee");
/// assert_eq!(light.name(), "bumblebee");
/// assert_eq!(system.name(), "bumblebee");
/// ```
pub fn select_active_with<'t, S: SchemeSignal + ?Sized>(
    themes: &'t ThemeCollection,
    dark: &str,
    mode: DisplayMode,
    signal: &S,
) -> Result<&'t ResolvedTheme> {
    let dark_theme = validate(themes, dark)?;

    let scheme = match mode {
        DisplayMode::Light => ColorScheme::Light,
        DisplayMode::Dark => ColorScheme::Dark,
        DisplayMode::System => signal.preferred_scheme().unwrap_or_else(|| {
            tracing::debug!("no color scheme preference available, using light");
            ColorScheme::Light
        }),
    };

    let selected = match scheme {
        ColorScheme::Dark => dark_theme,
        ColorScheme::Light => match themes.iter().find(|theme| theme.name() != dark) {
            Some(theme) => theme,
            None => {
                tracing::warn!(dark, "no light variant in theme collection, using dark theme");
                dark_theme
            }
        },
    };
    tracing::debug!(%mode, theme = %selected.name(), "selected active theme");
    Ok(selected)
}

fn validate<'t>(themes: &'t ThemeCollection, dark: &str) -> Result<&'t ResolvedTheme> {
    if themes.is_empty() {
        return Err(ThemeError::EmptyThemeCollection);
    }
    themes
        .get(dark)
        .ok_or_else(|| ThemeError::unknown_dark(dark))
}
