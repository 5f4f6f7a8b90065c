//! Percent/pixel conversion and drag clamping for player tokens.
//!
//! Token positions are stored as percentages of the pitch container measured
//! from its centre, so a lineup survives the pitch being laid out at a
//! different size. Dragging happens in CSS pixels. Every function here takes
//! the live container [`Size`] and converts between the two spaces.
//!
//! The reach of a token on one axis is half the container dimension minus the
//! token's half-size: the token's bounding box must stay inside the pitch.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use roster::PositionUpdate;

/// A point or offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Euclidean length when the point is read as a vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Dimensions of the pitch container in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero, negative, or not finite.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(usable(self.width) && usable(self.height))
    }
}

/// Token position in percent of the container, measured from its centre.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Percent {
    pub x: f64,
    pub y: f64,
}

impl Percent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<PositionUpdate> for Percent {
    fn from(p: PositionUpdate) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Percent> for PositionUpdate {
    fn from(p: Percent) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Permitted movement from a token's current position, in CSS pixels.
///
/// `left` and `top` are non-positive deltas (towards the top-left corner);
/// `right` and `bottom` are non-negative deltas, as long as the token starts
/// inside its reach.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl DragBounds {
    /// Clamp a raw pointer delta so the token stays inside the container.
    #[must_use]
    pub fn clamp_delta(&self, delta: Point) -> Point {
        Point {
            x: finite_or_zero(delta.x).clamp(self.left, self.right),
            y: finite_or_zero(delta.y).clamp(self.top, self.bottom),
        }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn usable(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}

fn axis_to_px(pct: f64, extent: f64) -> f64 {
    if usable(extent) { finite_or_zero(pct) / 100.0 * extent } else { 0.0 }
}

fn axis_to_pct(px: f64, extent: f64) -> f64 {
    if usable(extent) { finite_or_zero(px) / extent * 100.0 } else { 0.0 }
}

/// Convert a stored position to a pixel offset from the container centre.
#[must_use]
pub fn percent_to_px(pos: Percent, container: Size) -> Point {
    Point { x: axis_to_px(pos.x, container.width), y: axis_to_px(pos.y, container.height) }
}

/// Convert a pixel offset from the container centre to a stored position.
///
/// An empty container maps everything to the centre.
#[must_use]
pub fn px_to_percent(offset: Point, container: Size) -> Percent {
    Percent { x: axis_to_pct(offset.x, container.width), y: axis_to_pct(offset.y, container.height) }
}

/// Farthest a token centre may sit from the container centre on each axis.
#[must_use]
pub fn reach(container: Size, token_half: f64) -> Point {
    let half = finite_or_zero(token_half).max(0.0);
    Point {
        x: if usable(container.width) { (container.width / 2.0 - half).max(0.0) } else { 0.0 },
        y: if usable(container.height) { (container.height / 2.0 - half).max(0.0) } else { 0.0 },
    }
}

/// Compute how far the token at `pos` may move before its box leaves the container.
#[must_use]
pub fn drag_bounds(container: Size, pos: Percent, token_half: f64) -> DragBounds {
    let current = percent_to_px(pos, container);
    let r = reach(container, token_half);
    DragBounds { left: -r.x - current.x, right: r.x - current.x, top: -r.y - current.y, bottom: r.y - current.y }
}

/// Final stored position after dragging the token at `start` by `delta` pixels.
///
/// The resulting pixel offset is clamped to the container reach before being
/// converted back to percent, so tokens dropped past the edge land on it.
#[must_use]
pub fn settle(container: Size, start: Percent, delta: Point, token_half: f64) -> Percent {
    if container.is_empty() {
        return Percent::default();
    }
    let current = percent_to_px(start, container);
    let r = reach(container, token_half);
    let landed = Point {
        x: (current.x + finite_or_zero(delta.x)).clamp(-r.x, r.x),
        y: (current.y + finite_or_zero(delta.y)).clamp(-r.y, r.y),
    };
    px_to_percent(landed, container)
}

/// Whether a stored position keeps the token's box inside the container.
///
/// Allows a sub-pixel tolerance for the percent round trip.
#[must_use]
pub fn fits(container: Size, pos: Percent, token_half: f64) -> bool {
    const TOLERANCE_PX: f64 = 1e-6;
    let offset = percent_to_px(pos, container);
    let r = reach(container, token_half);
    offset.x.abs() <= r.x + TOLERANCE_PX && offset.y.abs() <= r.y + TOLERANCE_PX
}
