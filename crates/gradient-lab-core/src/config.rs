//! Editor configuration.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! first_id = 100
//! seed = 42
//!
//! [[presets]]
//! name = "Mono"
//! type = "linear"
//! angle = 90
//! stops = [
//!     { color = "#000000", position = 0 },
//!     { color = "#ffffff", position = 100 },
//! ]
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ids::DEFAULT_FIRST_ID;
use crate::logging::targets;
use crate::preset::{Preset, PresetCatalog};

/// Settings for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// First id issued by the session's id counter.
    pub first_id: u64,
    /// Seed for the session RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// User presets appended to the built-in catalog.
    pub presets: Vec<Preset>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            first_id: DEFAULT_FIRST_ID,
            seed: None,
            presets: Vec::new(),
        }
    }
}

impl EditorConfig {
    /// Parse configuration from TOML text.
    ///
    /// User presets are validated here so a bad table is reported at load
    /// time rather than when the preset is picked.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EditorConfig = toml::from_str(text)?;
        for preset in &config.presets {
            preset.validate()?;
        }
        tracing::debug!(
            target: targets::CONFIG,
            first_id = config.first_id,
            seeded = config.seed.is_some(),
            presets = config.presets.len(),
            "loaded editor config"
        );
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Built-in presets followed by this config's presets.
    pub fn catalog(&self) -> Result<PresetCatalog> {
        let mut catalog = PresetCatalog::builtin();
        catalog.extend(self.presets.iter().cloned())?;
        Ok(catalog)
    }
}
