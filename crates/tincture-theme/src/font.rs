//! Font-family stacks per font role.
//!
//! Stacks are consumed verbatim: family names keep their order and spelling,
//! and no quoting or deduplication is applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered list of font families for one role, most preferred first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

impl FontStack {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(families.into_iter().map(Into::into).collect())
    }

    /// The preferred family, if the stack is not empty.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn families(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Font stacks keyed by role (`sans`, `serif`, `mono`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontRoles(BTreeMap<String, FontStack>);

impl FontRoles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stack for `role`, returning `self` for chaining.
    pub fn with(mut self, role: impl Into<String>, stack: FontStack) -> Self {
        self.0.insert(role.into(), stack);
        self
    }

    pub fn get(&self, role: &str) -> Option<&FontStack> {
        self.0.get(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontStack)> {
        self.0.iter().map(|(role, stack)| (role.as_str(), stack))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
