//! Pitch line markings as resolution-independent shapes.
//!
//! The markings are laid out on the 400×600 reference pitch and scaled
//! uniformly to the live container, so the SVG pitch on screen and the PNG
//! export draw exactly the same lines. Coordinates are container pixels with
//! the origin at the top-left corner; angles are radians, clockwise on screen.

#[cfg(test)]
#[path = "markings_test.rs"]
mod markings_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::consts::{PITCH_HEIGHT_PX, PITCH_WIDTH_PX};
use crate::geometry::{Point, Size};

// Reference dimensions, in pixels on the 400×600 pitch.
const CENTRE_CIRCLE_RADIUS: f64 = 48.0;
const CENTRE_SPOT_RADIUS: f64 = 4.0;
const PENALTY_BOX_WIDTH: f64 = 160.0;
const PENALTY_BOX_DEPTH: f64 = 80.0;
const PENALTY_ARC_RADIUS: f64 = 40.0;
const CORNER_ARC_RADIUS: f64 = 24.0;

/// Stroke width of the lines on the reference pitch.
pub const LINE_WIDTH: f64 = 2.0;

/// One drawable piece of the pitch diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum Marking {
    /// Straight segment.
    Line { from: Point, to: Point },
    /// Open polyline (penalty boxes are three-sided).
    Polyline { points: Vec<Point> },
    /// Full circle, stroked or filled.
    Circle { center: Point, radius: f64, filled: bool },
    /// Circular arc from `start` to `end`, clockwise on screen.
    Arc { center: Point, radius: f64, start: f64, end: f64 },
}

impl Marking {
    /// SVG path data for this marking.
    #[must_use]
    pub fn svg_path(&self) -> String {
        match self {
            Self::Line { from, to } => format!("M {:.2} {:.2} L {:.2} {:.2}", from.x, from.y, to.x, to.y),
            Self::Polyline { points } => points
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{} {:.2} {:.2}", if i == 0 { "M" } else { "L" }, p.x, p.y))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Circle { center, radius, .. } => {
                // Two half arcs; a single SVG arc command cannot close a circle.
                let (left, right) = (center.x - radius, center.x + radius);
                format!(
                    "M {left:.2} {y:.2} A {r:.2} {r:.2} 0 1 1 {right:.2} {y:.2} A {r:.2} {r:.2} 0 1 1 {left:.2} {y:.2} Z",
                    y = center.y,
                    r = radius
                )
            }
            Self::Arc { center, radius, start, end } => {
                let a = point_on_circle(*center, *radius, *start);
                let b = point_on_circle(*center, *radius, *end);
                let large = u8::from(end - start > PI);
                format!("M {:.2} {:.2} A {r:.2} {r:.2} 0 {large} 1 {:.2} {:.2}", a.x, a.y, b.x, b.y, r = radius)
            }
        }
    }

    /// Whether the marking should be filled rather than stroked.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Circle { filled: true, .. })
    }
}

/// Point at `angle` on the circle around `center`.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point { x: center.x + radius * angle.cos(), y: center.y + radius * angle.sin() }
}

/// Uniform scale from the reference pitch to `container`.
#[must_use]
pub fn scale_for(container: Size) -> f64 {
    if container.is_empty() {
        return 0.0;
    }
    (container.width / PITCH_WIDTH_PX).min(container.height / PITCH_HEIGHT_PX)
}

/// All pitch markings for a container of the given size.
///
/// Returns an empty list for an empty container.
#[must_use]
pub fn pitch_markings(container: Size) -> Vec<Marking> {
    if container.is_empty() {
        return Vec::new();
    }
    let s = scale_for(container);
    let (w, h) = (container.width, container.height);
    let mid = Point::new(w / 2.0, h / 2.0);
    let box_half = PENALTY_BOX_WIDTH * s / 2.0;
    let box_depth = PENALTY_BOX_DEPTH * s;
    let corner = CORNER_ARC_RADIUS * s;

    vec![
        Marking::Line { from: Point::new(0.0, mid.y), to: Point::new(w, mid.y) },
        Marking::Circle { center: mid, radius: CENTRE_CIRCLE_RADIUS * s, filled: false },
        Marking::Circle { center: mid, radius: CENTRE_SPOT_RADIUS * s, filled: true },
        // Top penalty box and arc.
        Marking::Polyline {
            points: vec![
                Point::new(mid.x - box_half, 0.0),
                Point::new(mid.x - box_half, box_depth),
                Point::new(mid.x + box_half, box_depth),
                Point::new(mid.x + box_half, 0.0),
            ],
        },
        Marking::Arc { center: Point::new(mid.x, box_depth), radius: PENALTY_ARC_RADIUS * s, start: 0.0, end: PI },
        // Bottom penalty box and arc.
        Marking::Polyline {
            points: vec![
                Point::new(mid.x - box_half, h),
                Point::new(mid.x - box_half, h - box_depth),
                Point::new(mid.x + box_half, h - box_depth),
                Point::new(mid.x + box_half, h),
            ],
        },
        Marking::Arc { center: Point::new(mid.x, h - box_depth), radius: PENALTY_ARC_RADIUS * s, start: PI, end: TAU },
        // Corner arcs, clockwise from top-left.
        Marking::Arc { center: Point::new(0.0, 0.0), radius: corner, start: 0.0, end: FRAC_PI_2 },
        Marking::Arc { center: Point::new(w, 0.0), radius: corner, start: FRAC_PI_2, end: PI },
        Marking::Arc { center: Point::new(w, h), radius: corner, start: PI, end: PI + FRAC_PI_2 },
        Marking::Arc { center: Point::new(0.0, h), radius: corner, start: PI + FRAC_PI_2, end: TAU },
    ]
}
