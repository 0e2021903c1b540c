//! CSS text generation.
//!
//! Turns a gradient description into a CSS gradient function call. Output is
//! deterministic: the same type, angle and `(color, position)` sequence always
//! produce byte-identical text. Color text is emitted verbatim.
//!
//! # Example
//!
//! ```
//! use gradient_lab_core::format::format_gradient;
//! use gradient_lab_core::types::{ColorStop, GradientType, StopId};
//!
//! let stops = [
//!     ColorStop::new(StopId::from_raw(1), "#0000ff", 100),
//!     ColorStop::new(StopId::from_raw(2), "#ff0000", 0),
//! ];
//!
//! assert_eq!(
//!     format_gradient(GradientType::Linear, 90, &stops),
//!     "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)"
//! );
//! assert_eq!(
//!     format_gradient(GradientType::Radial, 90, &stops),
//!     "radial-gradient(circle, #ff0000 0%, #0000ff 100%)"
//! );
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::spec::{GradientSpec, sorted_by_position};
use crate::types::{ColorStop, GradientType};

/// Angle used by the stop bar preview.
const STOP_BAR_ANGLE: u16 = 90;

/// Format a spec as a CSS gradient expression.
pub fn gradient_css(spec: &GradientSpec) -> String {
    format_gradient(spec.kind, spec.angle, &spec.stops)
}

/// Format the copy-ready declaration, `background: <expression>;`.
pub fn css_declaration(spec: &GradientSpec) -> String {
    format!("background: {};", gradient_css(spec))
}

/// Format the horizontal stop bar preview.
///
/// The bar is always a left-to-right linear gradient, whatever type the
/// gradient being edited has.
pub fn stop_bar_css(stops: &[ColorStop]) -> String {
    format_gradient(GradientType::Linear, STOP_BAR_ANGLE, stops)
}

/// Format a gradient expression from its parts.
///
/// Stops may be passed in any order; they are emitted by ascending position,
/// with ties kept in the given order.
pub fn format_gradient(kind: GradientType, angle: u16, stops: &[ColorStop]) -> String {
    let mut out = String::with_capacity(32 + stops.len() * 14);
    write_gradient(&mut out, kind, angle, stops).expect("writing to a String cannot fail");
    out
}

fn write_gradient<W: FmtWrite>(
    out: &mut W,
    kind: GradientType,
    angle: u16,
    stops: &[ColorStop],
) -> fmt::Result {
    match kind {
        GradientType::Linear => write!(out, "linear-gradient({angle}deg, ")?,
        GradientType::Radial => out.write_str("radial-gradient(circle, ")?,
        GradientType::Conic => write!(out, "conic-gradient(from {angle}deg, ")?,
    }

    for (i, stop) in sorted_by_position(stops).into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{} {}%", stop.color, stop.position)?;
    }

    out.write_char(')')
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_gradient(f, self.kind, self.angle, &self.stops)
    }
}
