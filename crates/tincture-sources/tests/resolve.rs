use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;
use tincture_sources::{resolve_sources, SourceError, SourceResolver};

fn create_file(dir: &Path, relative: &str) {
    let full = dir.join(relative);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full, "<div class=\"btn\"></div>").unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    create_file(temp.path(), "templates/a.html");
    create_file(temp.path(), "src/x.rs");
    create_file(temp.path(), "other/y.txt");
    temp
}

#[test]
fn templates_and_rust_sources_are_selected() {
    let temp = project();
    let sources = resolve_sources(temp.path(), ["./templates/**/*.html", "./src/**/*.rs"]).unwrap();

    assert_eq!(sources.relative_paths(), vec!["src/x.rs", "templates/a.html"]);
    assert!(!sources.contains("other/y.txt"));
}

#[test]
fn overlapping_patterns_yield_each_file_once() {
    let temp = project();
    let sources = resolve_sources(
        temp.path(),
        ["./src/**/*.rs", "src/*.rs", "./**/*.rs", "./src/x.rs"],
    )
    .unwrap();

    assert_eq!(sources.len(), 1);
    assert_eq!(sources.relative_paths(), vec!["src/x.rs"]);
}

#[test]
fn pattern_matching_nothing_is_not_an_error() {
    let temp = project();
    let sources = resolve_sources(temp.path(), ["./**/*.vue"]).unwrap();
    assert!(sources.is_empty());
}

#[test]
fn empty_pattern_is_rejected() {
    let temp = project();
    let err = resolve_sources(temp.path(), [""]).unwrap_err();
    assert!(matches!(err, SourceError::InvalidPattern { ref pattern, .. } if pattern.is_empty()));
}

#[test]
fn malformed_pattern_is_named_in_error() {
    let temp = project();
    let err = resolve_sources(temp.path(), ["./src/**/*.{rs"]).unwrap_err();
    assert!(err.to_string().contains("./src/**/*.{rs"));
}

#[test]
fn star_does_not_cross_directories() {
    let temp = project();
    create_file(temp.path(), "index.html");
    let sources = resolve_sources(temp.path(), ["./*.html"]).unwrap();
    assert_eq!(sources.relative_paths(), vec!["index.html"]);
}

#[test]
fn ignore_patterns_apply_to_every_pattern() {
    let temp = project();
    create_file(temp.path(), "target/debug/build.rs");
    let sources = SourceResolver::new(temp.path())
        .ignore_all(["**/target/**"])
        .resolve(["./**/*.rs"])
        .unwrap();
    assert_eq!(sources.relative_paths(), vec!["src/x.rs"]);
}

#[cfg(unix)]
#[test]
fn symlinked_file_is_deduplicated_with_its_target() {
    let temp = project();
    std::fs::create_dir_all(temp.path().join("linked")).unwrap();
    std::os::unix::fs::symlink(temp.path().join("src/x.rs"), temp.path().join("linked/x.rs"))
        .unwrap();

    let sources = resolve_sources(temp.path(), ["./**/*.rs"]).unwrap();
    assert_eq!(sources.relative_paths(), vec!["src/x.rs"]);
}

#[cfg(unix)]
#[test]
fn symlinked_alias_does_not_hide_real_directory() {
    for link in ["a", "b", "c", "zz"] {
        let temp = project();
        std::os::unix::fs::symlink(temp.path().join("src"), temp.path().join(link)).unwrap();

        let sources = resolve_sources(temp.path(), ["**/src/*.rs"]).unwrap();
        assert_eq!(sources.relative_paths(), vec!["src/x.rs"], "alias named {link}");
    }
}

#[test]
fn single_level_pattern_ignores_nested_files() {
    let temp = project();
    create_file(temp.path(), "index.html");
    create_file(temp.path(), "node_modules/pkg/readme.html");
    let sources = resolve_sources(temp.path(), ["./*.html"]).unwrap();
    assert_eq!(sources.relative_paths(), vec!["index.html"]);
}

#[cfg(unix)]
#[test]
fn single_level_pattern_does_not_read_subdirectories() {
    use std::os::unix::fs::PermissionsExt;

    let temp = project();
    create_file(temp.path(), "index.html");
    let secret = temp.path().join("secret");
    std::fs::create_dir_all(&secret).unwrap();
    std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read_dir(&secret).is_ok() {
        // Permission bits are not enforced for this user.
        std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = resolve_sources(temp.path(), ["./*.html"]);
    std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(result.unwrap().relative_paths(), vec!["index.html"]);
}

#[test]
fn source_set_root_is_canonical() {
    let temp = project();
    let sources = resolve_sources(temp.path(), ["./src/**/*.rs"]).unwrap();
    assert_eq!(sources.iter().count(), 1);
    assert_eq!(sources.root(), temp.path().canonicalize().unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Listing the same pattern several times never changes the result.
    #[test]
    fn repeated_patterns_are_idempotent(times in 1usize..5) {
        let temp = project();
        let once = resolve_sources(temp.path(), ["./**/*"]).unwrap();
        let many = resolve_sources(temp.path(), vec!["./**/*"; times]).unwrap();
        prop_assert_eq!(once, many);
    }
}
