//! Named preset gradients.
//!
//! The built-in catalog is fixed; applications may append their own presets
//! from TOML through [`PresetCatalog`]. A preset carries no stop ids: ids are
//! assigned by the editor when the preset is loaded.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::format_gradient;
use crate::ids::IdGenerator;
use crate::logging::targets;
use crate::spec::{GradientSpec, MAX_ANGLE, MAX_POSITION, MAX_STOPS, MIN_STOPS};
use crate::types::{ColorStop, GradientType, StopId, is_complete_hex};

/// A `(color, position)` pair of a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetStop {
    /// Complete `#rrggbb` color.
    pub color: Cow<'static, str>,
    /// Percentage, 0-100.
    pub position: u8,
}

/// A named gradient offered for one-click loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name.
    pub name: Cow<'static, str>,
    /// Gradient function.
    #[serde(rename = "type")]
    pub kind: GradientType,
    /// Degrees, 0-360.
    #[serde(default)]
    pub angle: u16,
    /// Stops in catalog order.
    pub stops: Vec<PresetStop>,
}

impl Preset {
    /// Check the preset against the gradient invariants.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_STOPS..=MAX_STOPS).contains(&self.stops.len()) {
            return Err(Error::invalid_preset(
                &*self.name,
                format!(
                    "expected {MIN_STOPS}-{MAX_STOPS} stops, found {}",
                    self.stops.len()
                ),
            ));
        }
        if self.angle > MAX_ANGLE {
            return Err(Error::invalid_preset(
                &*self.name,
                format!("angle {} exceeds {MAX_ANGLE}", self.angle),
            ));
        }
        for stop in &self.stops {
            if !is_complete_hex(&stop.color) {
                return Err(Error::invalid_preset(
                    &*self.name,
                    format!("'{}' is not a #rrggbb color", stop.color),
                ));
            }
            if stop.position > MAX_POSITION {
                return Err(Error::invalid_preset(
                    &*self.name,
                    format!("position {} exceeds {MAX_POSITION}", stop.position),
                ));
            }
        }
        Ok(())
    }

    /// Build a spec from this preset, drawing fresh ids from `ids`.
    pub fn to_spec(&self, ids: &mut IdGenerator) -> GradientSpec {
        GradientSpec {
            kind: self.kind,
            angle: self.angle,
            stops: self
                .stops
                .iter()
                .map(|stop| ColorStop::new(ids.next_id(), &*stop.color, stop.position))
                .collect(),
        }
    }

    /// CSS expression for a gallery thumbnail.
    pub fn preview_css(&self) -> String {
        let stops: Vec<ColorStop> = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| ColorStop::new(StopId::from_raw(i as u64), &*stop.color, stop.position))
            .collect();
        format_gradient(self.kind, self.angle, &stops)
    }
}

macro_rules! preset {
    ($name:literal, $kind:ident, $angle:literal, [$(($color:literal, $pos:literal)),+ $(,)?]) => {
        Preset {
            name: Cow::Borrowed($name),
            kind: GradientType::$kind,
            angle: $angle,
            stops: vec![$(PresetStop { color: Cow::Borrowed($color), position: $pos }),+],
        }
    };
}

static BUILTIN: LazyLock<Vec<Preset>> = LazyLock::new(|| {
    vec![
        preset!("Ocean Breeze", Linear, 135, [("#667eea", 0), ("#764ba2", 100)]),
        preset!("Sunset Glow", Linear, 90, [("#f093fb", 0), ("#f5576c", 50), ("#ffd200", 100)]),
        preset!("Northern Lights", Linear, 160, [("#0f2027", 0), ("#203a43", 40), ("#2c5364", 100)]),
        preset!("Cyber Pulse", Linear, 45, [("#00f5a0", 0), ("#00d9f5", 100)]),
        preset!("Berry Smoothie", Linear, 135, [("#a18cd1", 0), ("#fbc2eb", 100)]),
        preset!("Fire Storm", Linear, 90, [("#f12711", 0), ("#f5af19", 100)]),
        preset!("Deep Space", Radial, 0, [("#000428", 0), ("#004e92", 100)]),
        preset!("Emerald Glow", Radial, 0, [("#11998e", 0), ("#38ef7d", 100)]),
        preset!("Cotton Candy", Linear, 120, [("#ee9ca7", 0), ("#ffdde1", 100)]),
        preset!("Midnight City", Linear, 180, [("#232526", 0), ("#414345", 100)]),
        preset!(
            "Rainbow Wheel",
            Conic,
            0,
            [
                ("#ff0000", 0),
                ("#ff8800", 17),
                ("#ffff00", 33),
                ("#00ff00", 50),
                ("#0088ff", 67),
                ("#8800ff", 83),
                ("#ff0000", 100),
            ]
        ),
        preset!("Lavender Mist", Linear, 45, [("#c471f5", 0), ("#fa71cd", 50), ("#f9d423", 100)]),
    ]
});

/// The built-in preset catalog.
pub fn builtin_presets() -> &'static [Preset] {
    &BUILTIN
}

/// Look up a preset by name, ignoring ASCII case.
pub fn find_preset<'a>(presets: &'a [Preset], name: &str) -> Option<&'a Preset> {
    presets
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

/// Built-in presets followed by user presets.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// A catalog holding only the built-in presets.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets().to_vec(),
        }
    }

    /// Append user presets after validating each one.
    ///
    /// Nothing is added if any preset is invalid.
    pub fn extend(&mut self, presets: impl IntoIterator<Item = Preset>) -> Result<()> {
        let presets: Vec<Preset> = presets.into_iter().collect();
        for preset in &presets {
            if let Err(err) = preset.validate() {
                tracing::warn!(target: targets::PRESET, name = %preset.name, "rejected preset: {}", err);
                return Err(err);
            }
        }
        tracing::debug!(target: targets::PRESET, count = presets.len(), "added user presets");
        self.presets.extend(presets);
        Ok(())
    }

    /// All presets, built-ins first.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Look up a preset by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Preset> {
        find_preset(&self.presets, name)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 12);
        assert_eq!(presets[0].name, "Ocean Breeze");
        assert_eq!(presets[11].name, "Lavender Mist");
        for preset in presets {
            preset.validate().unwrap_or_else(|e| panic!("{e}"));
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let preset = find_preset(builtin_presets(), "rainbow WHEEL").unwrap();
        assert_eq!(preset.kind, GradientType::Conic);
        assert_eq!(preset.stops.len(), 7);
        assert!(find_preset(builtin_presets(), "Nope").is_none());
    }

    #[test]
    fn test_preview_css() {
        let preset = find_preset(builtin_presets(), "Deep Space").unwrap();
        assert_eq!(
            preset.preview_css(),
            "radial-gradient(circle, #000428 0%, #004e92 100%)"
        );
    }

    #[test]
    fn test_to_spec_assigns_fresh_ids() {
        let preset = find_preset(builtin_presets(), "Sunset Glow").unwrap();
        let mut ids = IdGenerator::starting_at(500);
        let spec = preset.to_spec(&mut ids);

        let raw: Vec<u64> = spec.stops.iter().map(|s| s.id.as_raw()).collect();
        assert_eq!(raw, vec![500, 501, 502]);
        assert_eq!(spec.angle, 90);
        assert_eq!(spec.stops[1].color, "#f5576c");
    }

    #[test]
    fn test_validate_rejects_bad_presets() {
        let mut preset = preset!("Bad", Linear, 10, [("#000000", 0)]);
        assert!(matches!(preset.validate(), Err(Error::InvalidPreset { .. })));

        preset.stops.push(PresetStop { color: Cow::Borrowed("#fff"), position: 100 });
        assert!(preset.validate().is_err());

        preset.stops[1].color = Cow::Borrowed("#ffffff");
        preset.stops[1].position = 101;
        assert!(preset.validate().is_err());

        preset.stops[1].position = 100;
        preset.angle = 361;
        assert!(preset.validate().is_err());

        preset.angle = 360;
        assert!(preset.validate().is_ok());
    }

    #[test]
    fn test_catalog_extend() {
        let mut catalog = PresetCatalog::builtin();
        catalog
            .extend([preset!("Mono", Conic, 30, [("#000000", 0), ("#ffffff", 100)])])
            .unwrap();

        assert_eq!(catalog.len(), 13);
        let mono = catalog.find("mono").unwrap();
        assert_eq!(mono.preview_css(), "conic-gradient(from 30deg, #000000 0%, #ffffff 100%)");
    }

    #[test]
    fn test_catalog_extend_is_all_or_nothing() {
        let mut catalog = PresetCatalog::builtin();
        let err = catalog
            .extend([
                preset!("Fine", Linear, 0, [("#000000", 0), ("#ffffff", 100)]),
                preset!("Lonely", Linear, 0, [("#000000", 0)]),
            ])
            .unwrap_err();

        assert!(matches!(err, Error::InvalidPreset { ref name, .. } if name == "Lonely"));
        assert_eq!(catalog.len(), builtin_presets().len());
    }
}
