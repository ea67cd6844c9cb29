//! Recursive directory listing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, SourceError};

/// Lists regular files below `start`, following directory symlinks.
///
/// Files directly in `start` are at depth 1; with `max_depth` set, deeper
/// directories are not read. A directory that is its own ancestor (a symlink
/// pointing back up the tree) is skipped; other symlinked directories are
/// walked under every name they are reachable by. Returned paths keep the
/// form they were reached by (`start` joined with entry names).
pub(crate) fn walk_files(start: &Path, max_depth: Option<usize>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut ancestors = HashSet::new();
    walk_recursive(start, 1, max_depth, &mut ancestors, &mut files)?;
    Ok(files)
}

fn walk_recursive(
    current: &Path,
    depth: usize,
    max_depth: Option<usize>,
    ancestors: &mut HashSet<PathBuf>,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    let canonical = current
        .canonicalize()
        .map_err(|e| SourceError::io(current, e))?;
    if ancestors.contains(&canonical) {
        tracing::debug!(dir = %current.display(), "symlink cycle, skipping directory");
        return Ok(());
    }

    let entries = std::fs::read_dir(current).map_err(|e| SourceError::io(current, e))?;
    let descend = !matches!(max_depth, Some(max) if depth >= max);
    ancestors.insert(canonical.clone());
    for entry in entries {
        let entry = entry.map_err(|e| SourceError::io(current, e))?;
        let path = entry.path();

        if path.is_dir() {
            if descend {
                walk_recursive(&path, depth + 1, max_depth, ancestors, files)?;
            }
        } else if path.is_file() {
            files.push(path);
        }
    }
    ancestors.remove(&canonical);

    Ok(())
}

/// Renders `path` relative to `root` with `/` separators.
///
/// Returns `None` when `path` is not below `root`.
pub(crate) fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    Some(slash_path(relative))
}

/// Renders `path` with `/` separators.
pub(crate) fn slash_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/")
}
