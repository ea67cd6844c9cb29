//! Reloadable configuration snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use tincture_sources::SourceSet;
use tincture_theme::PresetRegistry;

use crate::config::TinctureConfig;
use crate::error::Result;
use crate::resolved::ResolvedConfig;

/// Holds the resolved configuration of one file and swaps in a new one on
/// [`reload`](Self::reload).
///
/// Readers take an `Arc` snapshot with [`current`](Self::current); a reload
/// running concurrently never exposes a half-built configuration, and a
/// failed reload leaves the previous snapshot installed.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use tincture::ConfigStore;
/// use tincture_theme::PresetRegistry;
///
/// let store = ConfigStore::open("site/tincture.yaml", Arc::new(PresetRegistry::builtin()))?;
/// let config = store.current();
/// println!("dark theme: {}", config.dark_theme());
///
/// let sources = store.scan_sources()?;
/// println!("{} content files", sources.len());
/// # Ok::<(), tincture::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    registry: Arc<PresetRegistry>,
    current: ArcSwap<ResolvedConfig>,
}

impl ConfigStore {
    /// Loads and resolves the file at `path`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`](crate::ConfigError) from reading, parsing or
    /// resolving the file.
    pub fn open(path: impl Into<PathBuf>, registry: Arc<PresetRegistry>) -> Result<Self> {
        let path = path.into();
        let resolved = load(&path, &registry)?;
        Ok(Self {
            path,
            registry,
            current: ArcSwap::from_pointee(resolved),
        })
    }

    /// The configuration file this store reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory content patterns are resolved against: the directory
    /// containing the configuration file.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn registry(&self) -> &Arc<PresetRegistry> {
        &self.registry
    }

    /// The currently installed configuration.
    pub fn current(&self) -> Arc<ResolvedConfig> {
        self.current.load_full()
    }

    /// Re-reads and re-resolves the file, installing the result.
    ///
    /// # Errors
    ///
    /// On failure the error is returned and the previous configuration stays
    /// installed.
    pub fn reload(&self) -> Result<Arc<ResolvedConfig>> {
        match load(&self.path, &self.registry) {
            Ok(resolved) => {
                let resolved = Arc::new(resolved);
                self.current.store(Arc::clone(&resolved));
                tracing::info!(path = %self.path.display(), "reloaded config");
                Ok(resolved)
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "config reload failed, keeping previous config");
                Err(err)
            }
        }
    }

    /// Expands the current content patterns against [`root`](Self::root).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Sources`](crate::ConfigError::Sources) if a directory
    /// cannot be read.
    pub fn scan_sources(&self) -> Result<SourceSet> {
        Ok(self.current().scan_sources(self.root())?)
    }
}

fn load(path: &Path, registry: &PresetRegistry) -> Result<ResolvedConfig> {
    TinctureConfig::from_file(path)?.resolve(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use tempfile::TempDir;
    use tincture_theme::{DisplayMode, FixedSignal};

    const INITIAL: &str = "themes:\n  - name: bumblebee\n  - name: coffee\ndark_theme: coffee\n";

    fn write(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("tincture.yaml");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn open(path: &Path) -> ConfigStore {
        ConfigStore::open(path, Arc::new(PresetRegistry::builtin())).unwrap()
    }

    #[test]
    fn test_reload_installs_new_config() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), INITIAL);
        let store = open(&path);
        let before = store.current();

        write(
            temp.path(),
            "themes:\n  - name: nord\n  - name: dracula\ndark_theme: dracula\n",
        );
        store.reload().unwrap();

        assert_eq!(before.dark_theme(), "coffee");
        assert_eq!(store.current().dark_theme(), "dracula");
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), INITIAL);
        let store = open(&path);

        write(temp.path(), "themes:\n  - name: nord\ndark_theme: coffee\n");
        let err = store.reload().unwrap_err();

        assert!(matches!(err, ConfigError::Theme(_)));
        let current = store.current();
        assert_eq!(current.dark_theme(), "coffee");
        let light = current
            .active_with(DisplayMode::Light, &FixedSignal::unavailable())
            .unwrap();
        assert_eq!(light.name(), "bumblebee");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigStore::open(
            temp.path().join("missing.yaml"),
            Arc::new(PresetRegistry::builtin()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_root_of_bare_file_name() {
        let store = ConfigStore {
            path: PathBuf::from("tincture.yaml"),
            registry: Arc::new(PresetRegistry::new()),
            current: ArcSwap::from_pointee(
                TinctureConfig::from_yaml(INITIAL)
                    .unwrap()
                    .resolve(&PresetRegistry::builtin())
                    .unwrap(),
            ),
        };
        assert_eq!(store.root(), Path::new("."));
    }

    #[test]
    fn test_scan_sources_relative_to_config_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src")).unwrap();
        std::fs::write(temp.path().join("src/main.rs"), "").unwrap();
        let path = write(
            temp.path(),
            &format!("content: [\"./src/**/*.rs\"]\n{INITIAL}"),
        );
        let store = open(&path);

        assert_eq!(store.scan_sources().unwrap().relative_paths(), vec!["src/main.rs"]);

        std::fs::write(temp.path().join("src/lib.rs"), "").unwrap();
        assert_eq!(store.scan_sources().unwrap().len(), 2);
    }
}
