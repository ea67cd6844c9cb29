//! Light/dark variant selection.
//!
//! A [`ThemeCollection`] holds resolved themes, one of which is designated as
//! the dark variant. [`select_active`] picks the theme for a [`DisplayMode`]:
//!
//! | Mode | Active theme |
//! |------|--------------|
//! | `Dark` | the designated dark theme |
//! | `Light` | the first theme that is not the dark theme |
//! | `System` | follows the [`SchemeSignal`], `Light` when it has no answer |

mod collection;
mod mode;

pub use collection::{select_active, select_active_with, ActiveVariantPolicy, ThemeCollection};
pub use mode::{ColorScheme, DisplayMode, FixedSignal, OsSchemeSignal, ParseModeError, SchemeSignal};
