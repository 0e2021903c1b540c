//! Tracing integration for Gradient Lab.
//!
//! The core emits `tracing` events but never installs a subscriber. To see
//! them, install one in the application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=gradient_lab_core::editor=trace`.
pub mod targets {
    /// Core library target.
    pub const CORE: &str = "gradient_lab_core";
    /// Editing session (stop and angle mutations).
    pub const EDITOR: &str = "gradient_lab_core::editor";
    /// Preset catalog loading and validation.
    pub const PRESET: &str = "gradient_lab_core::preset";
    /// Configuration loading.
    pub const CONFIG: &str = "gradient_lab_core::config";
}
