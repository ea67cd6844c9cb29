//! # Tincture Sources - Content pattern expansion
//!
//! A utility-CSS build only emits classes that appear in the project's
//! content files. This crate turns the configured `content` globs into the
//! concrete, deduplicated list of files to scan.
//!
//! ```rust,no_run
//! use tincture_sources::resolve_sources;
//!
//! let sources = resolve_sources(".", ["./src/**/*.html", "./src/**/*.rs", "./*.html"])?;
//! println!("{} files", sources.len());
//! # Ok::<(), tincture_sources::SourceError>(())
//! ```
//!
//! Patterns are always resolved against an explicit root, never the process
//! working directory. See [`pattern`] for the supported syntax.

mod error;
pub mod pattern;
mod resolver;
mod walk;

pub use error::{Result, SourceError};
pub use pattern::GlobPattern;
pub use resolver::{resolve_sources, SourceResolver, SourceSet};
