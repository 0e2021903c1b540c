//! The editing session.
//!
//! A [`GradientEditor`] owns one [`GradientSpec`] together with the id
//! counter and random source used to mutate it. Every operation is total:
//! out-of-range numbers are clamped, unknown ids and stop-count violations
//! are silent no-ops. Each mutation reports whether the spec changed so the
//! caller knows when to re-render.
//!
//! # Example
//!
//! ```
//! use gradient_lab_core::editor::GradientEditor;
//! use gradient_lab_core::types::GradientType;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut editor = GradientEditor::with_rng(StdRng::seed_from_u64(1));
//! assert_eq!(
//!     editor.css(),
//!     "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
//! );
//!
//! editor.set_type(GradientType::Conic);
//! editor.set_angle(400); // clamped
//! assert_eq!(
//!     editor.css(),
//!     "conic-gradient(from 360deg, #667eea 0%, #764ba2 100%)"
//! );
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::EditorConfig;
use crate::format::{css_declaration, gradient_css};
use crate::ids::IdGenerator;
use crate::logging::targets;
use crate::preset::Preset;
use crate::spec::{GradientSpec, MAX_ANGLE, MAX_POSITION, MAX_STOPS, MIN_STOPS};
use crate::types::{ColorStop, GradientType, StopId, is_hex_input, random_hex_color};

/// Position given to a new stop when there is no gap to split.
const FALLBACK_POSITION: u8 = 50;

/// Stop counts `randomize` picks from.
const RANDOM_STOP_COUNTS: std::ops::RangeInclusive<usize> = 2..=4;

/// An editing session over a single gradient.
#[derive(Debug, Clone)]
pub struct GradientEditor<R = StdRng> {
    spec: GradientSpec,
    ids: IdGenerator,
    rng: R,
}

impl GradientEditor<StdRng> {
    /// Create a session with the default gradient and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a session from configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(IdGenerator::starting_at(config.first_id), rng)
    }
}

impl Default for GradientEditor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GradientEditor<R> {
    /// Create a session with the default gradient and the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self::with_parts(IdGenerator::default(), rng)
    }

    /// Create a session from an id counter and an RNG.
    pub fn with_parts(mut ids: IdGenerator, rng: R) -> Self {
        let spec = GradientSpec::new(&mut ids);
        Self { spec, ids, rng }
    }

    /// Current gradient snapshot.
    #[inline]
    pub fn spec(&self) -> &GradientSpec {
        &self.spec
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: StopId) -> Option<&ColorStop> {
        self.spec.stops.iter().find(|stop| stop.id == id)
    }

    /// Whether [`add_stop`](Self::add_stop) would add a stop.
    pub fn can_add_stop(&self) -> bool {
        self.spec.stops.len() < MAX_STOPS
    }

    /// Whether [`remove_stop`](Self::remove_stop) may remove a stop.
    pub fn can_remove_stop(&self) -> bool {
        self.spec.stops.len() > MIN_STOPS
    }

    /// CSS gradient expression for the current gradient.
    pub fn css(&self) -> String {
        gradient_css(&self.spec)
    }

    /// Copy-ready `background: ...;` declaration.
    pub fn declaration(&self) -> String {
        css_declaration(&self.spec)
    }

    /// Replace the gradient type.
    pub fn set_type(&mut self, kind: GradientType) -> bool {
        if self.spec.kind == kind {
            return false;
        }
        tracing::debug!(target: targets::EDITOR, from = %self.spec.kind, to = %kind, "set gradient type");
        self.spec.kind = kind;
        true
    }

    /// Replace the angle, clamped to 0-360 degrees.
    pub fn set_angle(&mut self, degrees: i32) -> bool {
        let angle = degrees.clamp(0, i32::from(MAX_ANGLE)) as u16;
        if i32::from(angle) != degrees {
            tracing::trace!(target: targets::EDITOR, degrees, angle, "clamped angle");
        }
        if self.spec.angle == angle {
            return false;
        }
        self.spec.angle = angle;
        true
    }

    /// Add a stop in the middle of the widest gap between existing stops.
    ///
    /// Does nothing when the gradient already holds [`MAX_STOPS`] stops; in
    /// that case no id is consumed. Returns the new stop's id.
    pub fn add_stop(&mut self) -> Option<StopId> {
        if !self.can_add_stop() {
            tracing::trace!(target: targets::EDITOR, count = self.spec.stops.len(), "stop limit reached");
            return None;
        }

        let positions: Vec<u8> = self.spec.stops.iter().map(|stop| stop.position).collect();
        let position = next_stop_position(&positions);
        let id = self.ids.next_id();
        let color = random_hex_color(&mut self.rng);

        tracing::debug!(target: targets::EDITOR, %id, %color, position, "added stop");
        self.spec.stops.push(ColorStop::new(id, color, position));
        Some(id)
    }

    /// Remove a stop. Never drops below [`MIN_STOPS`] stops.
    pub fn remove_stop(&mut self, id: StopId) -> bool {
        if !self.can_remove_stop() {
            tracing::trace!(target: targets::EDITOR, %id, "stop minimum reached");
            return false;
        }
        let before = self.spec.stops.len();
        self.spec.stops.retain(|stop| stop.id != id);
        let removed = self.spec.stops.len() != before;
        if removed {
            tracing::debug!(target: targets::EDITOR, %id, "removed stop");
        }
        removed
    }

    /// Replace a stop's color text.
    ///
    /// Partial input such as `#7f` is accepted while the user types. Text
    /// outside the `#` plus 0-6 hex digits grammar is ignored.
    pub fn update_stop_color(&mut self, id: StopId, color: &str) -> bool {
        if !is_hex_input(color) {
            tracing::trace!(target: targets::EDITOR, %id, color, "ignored non-hex color text");
            return false;
        }
        match self.stop_mut(id) {
            Some(stop) if stop.color != color => {
                stop.color = color.to_owned();
                true
            }
            _ => false,
        }
    }

    /// Move a stop, clamping the position to 0-100.
    pub fn update_stop_position(&mut self, id: StopId, position: i32) -> bool {
        let position = position.clamp(0, i32::from(MAX_POSITION)) as u8;
        match self.stop_mut(id) {
            Some(stop) if stop.position != position => {
                stop.position = position;
                true
            }
            _ => false,
        }
    }

    /// Replace the whole gradient with a preset. Stops get fresh ids.
    ///
    /// A preset that fails [`Preset::validate`] is ignored: the spec is left
    /// unchanged and no ids are consumed.
    pub fn load_preset(&mut self, preset: &Preset) -> bool {
        if let Err(err) = preset.validate() {
            tracing::trace!(target: targets::EDITOR, name = %preset.name, "ignored preset: {}", err);
            return false;
        }
        tracing::debug!(target: targets::EDITOR, name = %preset.name, "loaded preset");
        self.spec = preset.to_spec(&mut self.ids);
        true
    }

    /// Replace the gradient with a random one.
    ///
    /// Picks a random type, an angle in 0-359, and 2-4 random colors spread
    /// evenly from 0% to 100%.
    pub fn randomize(&mut self) {
        let kind = *GradientType::ALL
            .choose(&mut self.rng)
            .unwrap_or(&GradientType::Linear);
        let angle = self.rng.gen_range(0..MAX_ANGLE);
        let count = self.rng.gen_range(RANDOM_STOP_COUNTS);

        let last = (count - 1) as f64;
        let stops = (0..count)
            .map(|i| {
                let position = (i as f64 / last * f64::from(MAX_POSITION)).round() as u8;
                ColorStop::new(self.ids.next_id(), random_hex_color(&mut self.rng), position)
            })
            .collect();

        tracing::debug!(target: targets::EDITOR, %kind, angle, count, "randomized gradient");
        self.spec = GradientSpec { kind, angle, stops };
    }

    /// Restore the default gradient with fresh ids.
    pub fn reset(&mut self) {
        tracing::debug!(target: targets::EDITOR, "reset gradient");
        self.spec = GradientSpec::new(&mut self.ids);
    }

    fn stop_mut(&mut self, id: StopId) -> Option<&mut ColorStop> {
        let stop = self.spec.stops.iter_mut().find(|stop| stop.id == id);
        if stop.is_none() {
            tracing::trace!(target: targets::EDITOR, %id, "no such stop");
        }
        stop
    }
}

/// Position for a new stop: the midpoint of the widest gap.
///
/// Positions may be given in any order. The leftmost of several equally wide
/// gaps wins, and a half-percent midpoint rounds up. With fewer than two
/// positions there is no gap and the result is 50.
///
/// When every gap is zero the new stop lands on the shared position rather
/// than at 0.
pub fn next_stop_position(positions: &[u8]) -> u8 {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    let widest = sorted
        .windows(2)
        .map(|pair| (pair[0], pair[1] - pair[0]))
        .reduce(|best, gap| if gap.1 > best.1 { gap } else { best });

    match widest {
        Some((start, gap)) => start + gap.div_ceil(2),
        None => FALLBACK_POSITION,
    }
}
