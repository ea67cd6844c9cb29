//! Validated content glob patterns.
//!
//! Patterns use `/` as separator and are matched against root-relative paths:
//!
//! | Syntax | Matches |
//! |--------|---------|
//! | `*` | any run of characters within one path component |
//! | `?` | one character within a component |
//! | `**/` | zero or more directories |
//! | `{a,b}` | either alternative |
//! | `[abc]` | one character from the class |
//!
//! A leading `./` is ignored, so `./src/**/*.rs` and `src/**/*.rs` are the
//! same pattern.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::error::{Result, SourceError};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// A syntactically valid glob pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    normalized: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    /// Parses and validates `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidPattern`] naming the pattern if it is
    /// empty or not valid glob syntax.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let raw = pattern.into();
        let normalized = normalize(&raw);
        if normalized.is_empty() {
            return Err(SourceError::invalid(raw, "pattern is empty"));
        }
        let glob = build_glob(&normalized).map_err(|e| SourceError::invalid(&raw, e.kind()))?;
        Ok(Self {
            raw,
            matcher: glob.compile_matcher(),
            normalized,
        })
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The pattern without its leading `./`.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_absolute(&self) -> bool {
        Path::new(&self.normalized).is_absolute()
    }

    /// True when the pattern has no wildcards and names a single path.
    pub fn is_literal(&self) -> bool {
        !self.normalized.contains(GLOB_META)
    }

    /// The directory prefix before the first component with a wildcard.
    ///
    /// Only this directory needs to be walked to find matches. It is empty
    /// for patterns such as `*.html` or `**/*.rs`.
    pub fn base_dir(&self) -> PathBuf {
        let components: Vec<&str> = self.normalized.split('/').collect();
        let base = components[..self.literal_dirs()].join("/");
        if base.is_empty() && self.is_absolute() {
            PathBuf::from("/")
        } else {
            PathBuf::from(base)
        }
    }

    /// How many levels below [`base_dir`](Self::base_dir) a match can sit.
    ///
    /// Files directly in the base directory are at depth 1. `None` when a
    /// `**` component allows any depth.
    pub fn max_depth(&self) -> Option<usize> {
        let rest: Vec<&str> = self
            .normalized
            .split('/')
            .skip(self.literal_dirs())
            .collect();
        if rest.iter().any(|component| component.contains("**")) {
            None
        } else {
            Some(rest.len())
        }
    }

    /// Number of leading directory components without wildcards.
    fn literal_dirs(&self) -> usize {
        let components: Vec<&str> = self.normalized.split('/').collect();
        components[..components.len() - 1]
            .iter()
            .take_while(|component| !component.contains(GLOB_META))
            .count()
    }

    /// Matches a `/`-separated path, relative to the root for relative patterns.
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

impl std::fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Builds a set of ignore patterns.
pub(crate) fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let normalized = normalize(pattern);
        if normalized.is_empty() {
            return Err(SourceError::invalid(pattern, "pattern is empty"));
        }
        let glob = build_glob(&normalized).map_err(|e| SourceError::invalid(pattern, e.kind()))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| SourceError::invalid(patterns.join(", "), e.kind()))
}

fn build_glob(pattern: &str) -> std::result::Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

fn normalize(pattern: &str) -> String {
    let mut rest = pattern.trim();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped.trim_start_matches('/');
    }
    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_dot_slash() {
        let pattern = GlobPattern::new("./src/**/*.rs").unwrap();
        assert_eq!(pattern.normalized(), "src/**/*.rs");
        assert_eq!(pattern.as_str(), "./src/**/*.rs");
    }

    #[test]
    fn test_double_star_matches_zero_dirs() {
        let pattern = GlobPattern::new("src/**/*.rs").unwrap();
        assert!(pattern.is_match("src/main.rs"));
        assert!(pattern.is_match("src/website/home.rs"));
        assert!(!pattern.is_match("other/main.rs"));
    }

    #[test]
    fn test_single_star_stays_in_component() {
        let pattern = GlobPattern::new("./*.html").unwrap();
        assert!(pattern.is_match("index.html"));
        assert!(!pattern.is_match("src/index.html"));
    }

    #[test]
    fn test_alternation() {
        let pattern = GlobPattern::new("src/**/*.{html,css}").unwrap();
        assert!(pattern.is_match("src/a.html"));
        assert!(pattern.is_match("src/styles/b.css"));
        assert!(!pattern.is_match("src/c.rs"));
    }

    #[test]
    fn test_base_dir() {
        assert_eq!(
            GlobPattern::new("./templates/**/*.html").unwrap().base_dir(),
            PathBuf::from("templates")
        );
        assert_eq!(
            GlobPattern::new("src/website/*.rs").unwrap().base_dir(),
            PathBuf::from("src/website")
        );
        assert_eq!(GlobPattern::new("**/*.rs").unwrap().base_dir(), PathBuf::new());
        assert_eq!(GlobPattern::new("*.html").unwrap().base_dir(), PathBuf::new());
        assert_eq!(
            GlobPattern::new("src/{a,b}/x.rs").unwrap().base_dir(),
            PathBuf::from("src")
        );
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(GlobPattern::new("./*.html").unwrap().max_depth(), Some(1));
        assert_eq!(GlobPattern::new("src/*/*.rs").unwrap().max_depth(), Some(2));
        assert_eq!(GlobPattern::new("src/website/*.rs").unwrap().max_depth(), Some(1));
        assert_eq!(GlobPattern::new("./src/**/*.rs").unwrap().max_depth(), None);
        assert_eq!(GlobPattern::new("**/*.rs").unwrap().max_depth(), None);
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = GlobPattern::new("./index.html").unwrap();
        assert!(pattern.is_literal());
        assert!(!GlobPattern::new("*.html").unwrap().is_literal());
    }

    #[test]
    fn test_unclosed_class_is_invalid() {
        let err = GlobPattern::new("src/[abc").unwrap_err();
        assert!(
            matches!(err, SourceError::InvalidPattern { ref pattern, .. } if pattern == "src/[abc")
        );
    }

    #[test]
    fn test_unclosed_alternates_is_invalid() {
        let err = GlobPattern::new("src/**/*.{html,css").unwrap_err();
        assert!(matches!(err, SourceError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(matches!(
            GlobPattern::new(""),
            Err(SourceError::InvalidPattern { .. })
        ));
        assert!(matches!(
            GlobPattern::new("./"),
            Err(SourceError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_ignore_set() {
        let set = build_ignore_set(&["**/target/**".to_string()]).unwrap();
        assert!(set.is_match("target/debug/out.rs"));
        assert!(set.is_match("crates/a/target/x.rs"));
        assert!(!set.is_match("src/main.rs"));
    }

    #[test]
    fn test_ignore_set_invalid() {
        assert!(build_ignore_set(&["[".to_string()]).is_err());
    }
}
