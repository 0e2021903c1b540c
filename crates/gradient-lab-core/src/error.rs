//! Error types for Gradient Lab.
//!
//! Editing operations never fail; these errors only come out of the
//! surfaces that read external input (configuration files, preset tables,
//! gradient type names).

use std::path::PathBuf;

/// Result type alias for Gradient Lab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or parsing editor input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration text was not valid TOML for [`EditorConfig`](crate::config::EditorConfig).
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A preset violates the gradient invariants.
    #[error("Invalid preset '{name}': {message}")]
    InvalidPreset { name: String, message: String },

    /// A gradient type name was not one of `linear`, `radial`, `conic`.
    #[error("Unknown gradient type '{0}'")]
    UnknownGradientType(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a preset validation error.
    pub fn invalid_preset(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPreset {
            name: name.into(),
            message: message.into(),
        }
    }
}
