//! Named base themes.
//!
//! Presets are the starting point of every resolved theme. They come from the
//! built-in catalog or from project preset files, and are never mutated once
//! the registry is shared.

mod registry;

pub use registry::{Preset, PresetRegistry, PRESET_EXTENSIONS};
