//! Theme names and token sets.
//!
//! A [`TokenSet`] maps role names (`primary`, `base-100`, `color-scheme`, ...)
//! to atomic string values. Values are never decomposed: a color expression
//! such as `oklch(65% 0.2 250)` is stored and merged as one opaque string.

use std::borrow::Borrow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a theme (`"coffee"`, `"nord"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeName(String);

impl ThemeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ThemeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ThemeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&ThemeName> for ThemeName {
    fn from(name: &ThemeName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for ThemeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ThemeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Mapping from role name to value.
///
/// Keys need not be exhaustive. Iteration order is sorted by role name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet(BTreeMap<String, String>);

impl TokenSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a role, returning `self` for chaining.
    pub fn with(mut self, role: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(role.into(), value.into());
        self
    }

    /// Sets a role, returning the previous value if there was one.
    pub fn insert(&mut self, role: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(role.into(), value.into())
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Extend<(String, String)> for TokenSet {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for TokenSet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
