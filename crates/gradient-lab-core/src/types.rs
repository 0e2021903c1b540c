//! Value types for gradient editing.
//!
//! This module provides the small vocabulary the editor works in: the
//! gradient function ([`GradientType`]), stop identity ([`StopId`]), the
//! stop itself ([`ColorStop`]) and helpers for the hex color text a stop
//! carries while it is being typed.
//!
//! # Example
//!
//! ```
//! use gradient_lab_core::types::{is_complete_hex, is_hex_input, GradientType};
//!
//! let kind: GradientType = "Conic".parse().unwrap();
//! assert_eq!(kind, GradientType::Conic);
//! assert!(kind.uses_angle());
//!
//! // Partial text is accepted while typing, but is not yet complete.
//! assert!(is_hex_input("#7f"));
//! assert!(!is_complete_hex("#7f"));
//! assert!(is_complete_hex("#7f3a9c"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Editing grammar: `#` followed by up to six hex digits.
static HEX_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{0,6}$").expect("valid hex input pattern"));

/// Complete color: `#` followed by exactly six hex digits.
static HEX_COMPLETE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color pattern"));

/// The CSS gradient function a spec renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    /// `linear-gradient(<angle>deg, ...)`
    #[default]
    Linear,
    /// `radial-gradient(circle, ...)`; the angle is never emitted.
    Radial,
    /// `conic-gradient(from <angle>deg, ...)`
    Conic,
}

impl GradientType {
    /// Every gradient type, in selection order.
    pub const ALL: [GradientType; 3] = [Self::Linear, Self::Radial, Self::Conic];

    /// Lowercase name as it appears in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conic => "conic",
        }
    }

    /// Whether the angle takes part in the CSS output.
    ///
    /// Linear gradients use it as the direction, conic gradients as the start
    /// angle. Radial gradients ignore it.
    pub fn uses_angle(&self) -> bool {
        matches!(self, Self::Linear | Self::Conic)
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownGradientType(s.to_string()))
    }
}

/// Identifier of a color stop within an editing session.
///
/// Ids are opaque: they address a stop and carry no meaning for the gradient
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StopId(u64);

impl StopId {
    /// Wrap a raw id value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One anchor point of a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorStop {
    /// Session-local identity.
    pub id: StopId,
    /// Hex color text, `#` plus 0-6 hex digits.
    pub color: String,
    /// Percentage along the gradient, 0-100.
    pub position: u8,
}

impl ColorStop {
    /// Create a new stop.
    pub fn new(id: StopId, color: impl Into<String>, position: u8) -> Self {
        Self {
            id,
            color: color.into(),
            position,
        }
    }

    /// Whether the color holds a complete six-digit hex value.
    pub fn is_valid(&self) -> bool {
        is_complete_hex(&self.color)
    }
}

/// Check text against the editing grammar (`#` plus 0-6 hex digits).
pub fn is_hex_input(text: &str) -> bool {
    HEX_INPUT.is_match(text)
}

/// Check that text is a complete `#rrggbb` color.
pub fn is_complete_hex(text: &str) -> bool {
    HEX_COMPLETE.is_match(text)
}

/// Generate a uniformly random lowercase `#rrggbb` color.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_gradient_type_parse() {
        assert_eq!("linear".parse::<GradientType>().unwrap(), GradientType::Linear);
        assert_eq!(" RADIAL ".parse::<GradientType>().unwrap(), GradientType::Radial);
        assert_eq!("Conic".parse::<GradientType>().unwrap(), GradientType::Conic);

        let err = "diamond".parse::<GradientType>().unwrap_err();
        assert!(matches!(err, Error::UnknownGradientType(ref name) if name == "diamond"));
    }

    #[test]
    fn test_gradient_type_display_roundtrips_names() {
        for kind in GradientType::ALL {
            assert_eq!(kind.to_string().parse::<GradientType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_uses_angle() {
        assert!(GradientType::Linear.uses_angle());
        assert!(!GradientType::Radial.uses_angle());
        assert!(GradientType::Conic.uses_angle());
    }

    #[test]
    fn test_hex_input_grammar() {
        assert!(is_hex_input("#"));
        assert!(is_hex_input("#a"));
        assert!(is_hex_input("#ABCdef"));
        assert!(!is_hex_input(""));
        assert!(!is_hex_input("abc"));
        assert!(!is_hex_input("#abcdefa"));
        assert!(!is_hex_input("#ggg"));
    }

    #[test]
    fn test_complete_hex() {
        assert!(is_complete_hex("#667eea"));
        assert!(is_complete_hex("#FFFFFF"));
        assert!(!is_complete_hex("#fff"));
        assert!(!is_complete_hex("667eea"));
    }

    #[test]
    fn test_random_hex_color_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let color = random_hex_color(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(is_complete_hex(&color), "{color} is not a complete color");
            assert_eq!(color, color.to_lowercase());
        }
    }

    #[test]
    fn test_stop_validity() {
        let stop = ColorStop::new(StopId::from_raw(1), "#12", 40);
        assert!(!stop.is_valid());
        let stop = ColorStop::new(StopId::from_raw(1), "#123456", 40);
        assert!(stop.is_valid());
    }
}
