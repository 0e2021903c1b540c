//! Core model and CSS formatter for Gradient Lab.
//!
//! This crate holds everything a gradient editor needs apart from its user
//! interface:
//!
//! - **Editing session**: [`GradientEditor`](editor::GradientEditor) applies
//!   invariant-preserving mutations to a gradient (2-8 stops, clamped angle and
//!   positions, session-unique stop ids)
//! - **CSS formatting**: pure functions producing `linear-gradient(...)`,
//!   `radial-gradient(...)` and `conic-gradient(...)` expressions
//! - **Presets**: a built-in catalog plus user presets from configuration
//! - **Configuration**: TOML-backed [`EditorConfig`](config::EditorConfig)
//!
//! # Example
//!
//! ```
//! use gradient_lab_core::prelude::*;
//!
//! let mut editor = GradientEditor::from_config(&EditorConfig::default());
//! let preset = find_preset(builtin_presets(), "Cyber Pulse").unwrap();
//! editor.load_preset(preset);
//!
//! assert_eq!(
//!     editor.declaration(),
//!     "background: linear-gradient(45deg, #00f5a0 0%, #00d9f5 100%);"
//! );
//! ```

pub mod config;
pub mod editor;
pub mod format;
pub mod ids;
pub mod logging;
pub mod preset;
pub mod spec;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::EditorConfig;
    pub use crate::editor::{GradientEditor, next_stop_position};
    pub use crate::format::{css_declaration, format_gradient, gradient_css, stop_bar_css};
    pub use crate::ids::IdGenerator;
    pub use crate::preset::{Preset, PresetCatalog, PresetStop, builtin_presets, find_preset};
    pub use crate::spec::{GradientSpec, MAX_ANGLE, MAX_POSITION, MAX_STOPS, MIN_STOPS};
    pub use crate::types::{ColorStop, GradientType, StopId, is_complete_hex, is_hex_input};
}
