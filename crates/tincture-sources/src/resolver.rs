//! Pattern expansion against a root directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use serde::Serialize;

use crate::error::{Result, SourceError};
use crate::pattern::{build_ignore_set, GlobPattern};
use crate::walk::{relative_slash_path, slash_path, walk_files};

/// Deduplicated set of existing files selected by content patterns.
///
/// Paths are canonical and sorted, so two patterns reaching the same file
/// (directly or through a symlink) contribute it once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceSet {
    root: PathBuf,
    paths: BTreeSet<PathBuf>,
}

impl SourceSet {
    /// The canonical root the patterns were resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether `path` is in the set. Relative paths are taken from the root.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let path = self.root.join(path.as_ref());
        let path = path.canonicalize().unwrap_or(path);
        self.paths.contains(&path)
    }

    /// Paths as `/`-separated strings relative to the root.
    ///
    /// Files outside the root (absolute patterns, symlink targets) are
    /// rendered as absolute paths.
    pub fn relative_paths(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|path| relative_slash_path(path, &self.root).unwrap_or_else(|| slash_path(path)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a PathBuf;
    type IntoIter = std::collections::btree_set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Expands glob patterns relative to a root directory.
///
/// # Example
///
/// ```rust,no_run
/// use tincture_sources::SourceResolver;
///
/// let sources = SourceResolver::new("/srv/site")
///     .ignore("**/target/**")
///     .resolve(["./src/**/*.{html,rs}", "./*.html"])?;
/// for path in sources.relative_paths() {
///     println!("{path}");
/// }
/// # Ok::<(), tincture_sources::SourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SourceResolver {
    root: PathBuf,
    ignore: Vec<String>,
}

impl SourceResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: Vec::new(),
        }
    }

    /// Drops files matching `pattern` from every result.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// Adds several ignore patterns.
    pub fn ignore_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expands `patterns` into the set of existing files they match.
    ///
    /// All patterns are validated before the filesystem is touched. A
    /// pattern whose literal directory prefix does not exist matches
    /// nothing.
    ///
    /// # Errors
    ///
    /// - [`SourceError::InvalidPattern`] for the first malformed pattern
    /// - [`SourceError::Io`] if the root or a directory under it cannot be read
    pub fn resolve<I, S>(&self, patterns: I) -> Result<SourceSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(GlobPattern::new)
            .collect::<Result<Vec<_>>>()?;
        let ignore = build_ignore_set(&self.ignore)?;

        let root = self
            .root
            .canonicalize()
            .map_err(|e| SourceError::io(&self.root, e))?;

        let mut paths = BTreeSet::new();
        for pattern in &patterns {
            let before = paths.len();
            let matched = self.expand(&root, pattern, &ignore, &mut paths)?;
            if matched == 0 {
                tracing::warn!(pattern = %pattern, root = %root.display(), "content pattern matched no files");
            } else {
                tracing::debug!(
                    pattern = %pattern,
                    matched,
                    new = paths.len() - before,
                    "expanded content pattern"
                );
            }
        }

        Ok(SourceSet { root, paths })
    }

    fn expand(
        &self,
        root: &Path,
        pattern: &GlobPattern,
        ignore: &GlobSet,
        paths: &mut BTreeSet<PathBuf>,
    ) -> Result<usize> {
        let candidates = if pattern.is_literal() {
            let path = root.join(pattern.normalized());
            if path.is_file() {
                vec![path]
            } else {
                Vec::new()
            }
        } else {
            let base = root.join(pattern.base_dir());
            if !base.is_dir() {
                tracing::debug!(pattern = %pattern, base = %base.display(), "pattern base directory does not exist");
                return Ok(0);
            }
            walk_files(&base, pattern.max_depth())?
        };

        let mut matched = 0;
        for path in candidates {
            let relative = relative_slash_path(&path, root);
            let subject = if pattern.is_absolute() {
                slash_path(&path)
            } else {
                match &relative {
                    Some(relative) => relative.clone(),
                    None => continue,
                }
            };
            if !pattern.is_literal() && !pattern.is_match(&subject) {
                continue;
            }
            let ignore_subject = relative.unwrap_or(subject);
            if ignore.is_match(&ignore_subject) {
                tracing::debug!(path = %ignore_subject, "ignored content file");
                continue;
            }

            let canonical = path.canonicalize().map_err(|e| SourceError::io(&path, e))?;
            paths.insert(canonical);
            matched += 1;
        }
        Ok(matched)
    }
}

/// Expands `patterns` relative to `root` with no ignore patterns.
///
/// Shorthand for `SourceResolver::new(root).resolve(patterns)`.
pub fn resolve_sources<I, S>(root: impl Into<PathBuf>, patterns: I) -> Result<SourceSet>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SourceResolver::new(root).resolve(patterns)
}
