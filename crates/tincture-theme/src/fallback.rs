//! Ordered fallback values for a single property.
//!
//! Some properties need a legacy value declared before the modern one, so
//! that engines which do not understand the modern value keep the legacy one:
//!
//! ```text
//! height: 100vh;   /* fallback for Opera, IE and etc. */
//! height: 100dvh;
//! ```
//!
//! A [`FallbackChain`] keeps these values in exactly that order, from most
//! compatible to most preferred, each with an optional note explaining why it
//! is there. Emitting the declarations is left to the consuming layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// One candidate value and the note that explains where it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FallbackValue {
    pub fn new(value: impl Into<String>, note: Option<impl Into<String>>) -> Self {
        Self {
            value: value.into(),
            note: note.map(Into::into),
        }
    }

    /// Splits a literal with a trailing block comment into value and note.
    ///
    /// ```rust
    /// use tincture_theme::FallbackValue;
    ///
    /// let parsed = FallbackValue::parse_annotated("100vh /* fallback for Opera, IE and etc. */");
    /// assert_eq!(parsed.value, "100vh");
    /// assert_eq!(parsed.note.as_deref(), Some("fallback for Opera, IE and etc."));
    ///
    /// let plain = FallbackValue::parse_annotated("100dvh");
    /// assert_eq!(plain.value, "100dvh");
    /// assert_eq!(plain.note, None);
    /// ```
    pub fn parse_annotated(literal: &str) -> Self {
        let literal = literal.trim();
        if let Some(body) = literal.strip_suffix("*/") {
            if let Some(open) = body.rfind("/*") {
                let value = body[..open].trim();
                let note = body[open + 2..].trim();
                if !value.is_empty() {
                    return Self {
                        value: value.to_string(),
                        note: (!note.is_empty()).then(|| note.to_string()),
                    };
                }
            }
        }
        Self {
            value: literal.to_string(),
            note: None,
        }
    }
}

impl fmt::Display for FallbackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.note {
            Some(note) => write!(f, "{} /* {} */", self.value, note),
            None => f.write_str(&self.value),
        }
    }
}

impl<V: Into<String>> From<(V, Option<&str>)> for FallbackValue {
    fn from((value, note): (V, Option<&str>)) -> Self {
        Self::new(value, note)
    }
}

impl<V: Into<String>> From<(V, Option<String>)> for FallbackValue {
    fn from((value, note): (V, Option<String>)) -> Self {
        Self::new(value, note)
    }
}

/// Non-empty, ordered sequence of fallback values.
///
/// The first entry is the most compatible value, the last is the preferred
/// one. Order is preserved exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FallbackChain {
    entries: Vec<FallbackValue>,
}

impl FallbackChain {
    /// The most compatible value.
    pub fn legacy(&self) -> &FallbackValue {
        &self.entries[0]
    }

    /// The most modern, preferred value.
    pub fn preferred(&self) -> &FallbackValue {
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[FallbackValue] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FallbackValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a chain has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FallbackChain {
    type Item = &'a FallbackValue;
    type IntoIter = std::slice::Iter<'a, FallbackValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a fallback chain, keeping the input order.
///
/// # Errors
///
/// Returns [`ThemeError::EmptyChain`] if `values` is empty.
///
/// # Example
///
/// ```rust
/// use tincture_theme::build_chain;
///
/// let chain = build_chain([("100vh", Some("legacy")), ("100dvh", None)]).unwrap();
/// assert_eq!(chain.legacy().value, "100vh");
/// assert_eq!(chain.preferred().value, "100dvh");
/// ```
pub fn build_chain<I, E>(values: I) -> Result<FallbackChain>
where
    I: IntoIterator<Item = E>,
    E: Into<FallbackValue>,
{
    let entries: Vec<FallbackValue> = values.into_iter().map(Into::into).collect();
    if entries.is_empty() {
        return Err(ThemeError::EmptyChain);
    }
    Ok(FallbackChain { entries })
}
