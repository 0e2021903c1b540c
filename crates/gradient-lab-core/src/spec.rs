//! The gradient description being edited.

use serde::Serialize;

use crate::ids::IdGenerator;
use crate::types::{ColorStop, GradientType};

/// Fewest stops a gradient may hold.
pub const MIN_STOPS: usize = 2;
/// Most stops a gradient may hold.
pub const MAX_STOPS: usize = 8;
/// Largest angle in degrees.
pub const MAX_ANGLE: u16 = 360;
/// Largest stop position in percent.
pub const MAX_POSITION: u8 = 100;
/// Angle of a freshly created gradient.
pub const DEFAULT_ANGLE: u16 = 135;
/// Color of the first default stop.
pub const DEFAULT_START_COLOR: &str = "#667eea";
/// Color of the last default stop.
pub const DEFAULT_END_COLOR: &str = "#764ba2";

/// Gradient type, angle and color stops.
///
/// Stops are kept in insertion order. Anything that renders them, such as
/// the formatter, goes through [`sorted_stops`](Self::sorted_stops) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientSpec {
    /// CSS gradient function.
    #[serde(rename = "type")]
    pub kind: GradientType,
    /// Degrees, 0-360. Ignored for radial gradients.
    pub angle: u16,
    /// Between [`MIN_STOPS`] and [`MAX_STOPS`] stops, in storage order.
    pub stops: Vec<ColorStop>,
}

impl GradientSpec {
    /// The default gradient: linear, 135°, `#667eea 0%` to `#764ba2 100%`.
    pub fn new(ids: &mut IdGenerator) -> Self {
        Self {
            kind: GradientType::Linear,
            angle: DEFAULT_ANGLE,
            stops: vec![
                ColorStop::new(ids.next_id(), DEFAULT_START_COLOR, 0),
                ColorStop::new(ids.next_id(), DEFAULT_END_COLOR, MAX_POSITION),
            ],
        }
    }

    /// Stops ordered by position. Ties keep their storage order.
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        sorted_by_position(&self.stops)
    }

    /// Whether two specs describe the same gradient, ignoring stop ids.
    pub fn same_content(&self, other: &GradientSpec) -> bool {
        self.kind == other.kind
            && self.angle == other.angle
            && self.stops.len() == other.stops.len()
            && self
                .stops
                .iter()
                .zip(&other.stops)
                .all(|(a, b)| a.color == b.color && a.position == b.position)
    }
}

/// Stable sort of stops by ascending position.
pub(crate) fn sorted_by_position(stops: &[ColorStop]) -> Vec<&ColorStop> {
    let mut sorted: Vec<&ColorStop> = stops.iter().collect();
    sorted.sort_by_key(|stop| stop.position);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StopId;

    #[test]
    fn test_default_spec() {
        let mut ids = IdGenerator::default();
        let spec = GradientSpec::new(&mut ids);

        assert_eq!(spec.kind, GradientType::Linear);
        assert_eq!(spec.angle, 135);
        assert_eq!(spec.stops.len(), 2);
        assert_eq!(spec.stops[0].color, "#667eea");
        assert_eq!(spec.stops[0].position, 0);
        assert_eq!(spec.stops[1].color, "#764ba2");
        assert_eq!(spec.stops[1].position, 100);
        assert_ne!(spec.stops[0].id, spec.stops[1].id);
    }

    #[test]
    fn test_sorted_stops_is_stable() {
        let spec = GradientSpec {
            kind: GradientType::Linear,
            angle: 0,
            stops: vec![
                ColorStop::new(StopId::from_raw(1), "#000001", 50),
                ColorStop::new(StopId::from_raw(2), "#000002", 10),
                ColorStop::new(StopId::from_raw(3), "#000003", 50),
                ColorStop::new(StopId::from_raw(4), "#000004", 0),
            ],
        };

        let order: Vec<u64> = spec.sorted_stops().iter().map(|s| s.id.as_raw()).collect();
        assert_eq!(order, vec![4, 2, 1, 3]);
        // Storage order is untouched.
        assert_eq!(spec.stops[0].id.as_raw(), 1);
    }

    #[test]
    fn test_same_content_ignores_ids() {
        let a = GradientSpec::new(&mut IdGenerator::starting_at(1));
        let b = GradientSpec::new(&mut IdGenerator::starting_at(50));
        assert_ne!(a, b);
        assert!(a.same_content(&b));
    }

    #[test]
    fn test_serializes_type_field() {
        let spec = GradientSpec::new(&mut IdGenerator::starting_at(1));
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "linear");
        assert_eq!(json["angle"], 135);
        assert_eq!(json["stops"][0]["id"], 1);
        assert_eq!(json["stops"][1]["position"], 100);
    }
}
