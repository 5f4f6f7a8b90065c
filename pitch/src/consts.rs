//! Shared numeric and colour constants for the pitch crate.

// ── Layout ──────────────────────────────────────────────────────

/// Reference pitch width in CSS pixels (desktop layout).
pub const PITCH_WIDTH_PX: f64 = 400.0;

/// Reference pitch height in CSS pixels (desktop layout).
pub const PITCH_HEIGHT_PX: f64 = 600.0;

/// Diameter of a player token's hit box in CSS pixels.
pub const TOKEN_SIZE_PX: f64 = 56.0;

/// Half of [`TOKEN_SIZE_PX`]; the margin a token centre keeps from the pitch edge.
pub const TOKEN_HALF_PX: f64 = TOKEN_SIZE_PX / 2.0;

/// Diameter of the coloured jersey disc inside the token.
pub const JERSEY_DIAMETER_PX: f64 = 48.0;

/// Pointer travel below which a release counts as a click, not a drag.
pub const DRAG_SLOP_PX: f64 = 1.0;

// ── Export ──────────────────────────────────────────────────────

/// Device pixel ratio used when rasterizing the pitch to PNG.
pub const EXPORT_PIXEL_RATIO: f64 = 2.0;

/// Number of alternating grass stripes, top to bottom.
pub const GRASS_STRIPES: u32 = 10;

// ── Colours ─────────────────────────────────────────────────────

pub const GRASS_DARK: &str = "#1a4d2e";
pub const GRASS_LIGHT: &str = "#144026";
pub const LINE_COLOR: &str = "rgba(255, 255, 255, 0.7)";
pub const GOALKEEPER_FILL: &str = "#facc15";
pub const GOALKEEPER_TEXT: &str = "#000000";
pub const OUTFIELD_FILL: &str = "#dc2626";
pub const OUTFIELD_TEXT: &str = "#ffffff";
pub const LABEL_BACKGROUND: &str = "rgba(0, 0, 0, 0.6)";
pub const WATERMARK_COLOR: &str = "rgba(255, 255, 255, 0.15)";
