//! Rendering: draws the pitch and the lineup to a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It is used by the PNG export: the client creates an off-screen canvas,
//! calls [`draw_lineup`], and encodes the result. Nothing here mutates lineup
//! state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::TAU;

use roster::{Player, Role};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    GOALKEEPER_FILL, GOALKEEPER_TEXT, GRASS_DARK, GRASS_LIGHT, GRASS_STRIPES, JERSEY_DIAMETER_PX, LABEL_BACKGROUND,
    LINE_COLOR, OUTFIELD_FILL, OUTFIELD_TEXT, TOKEN_HALF_PX, WATERMARK_COLOR,
};
use crate::geometry::{Percent, Point, Size, percent_to_px, settle};
use crate::markings::{LINE_WIDTH, Marking, pitch_markings, scale_for};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Gap between the jersey disc and the name label.
const LABEL_GAP_PX: f64 = 4.0;
/// Horizontal padding inside the name label.
const LABEL_PAD_X: f64 = 6.0;
/// Height of the name label.
const LABEL_HEIGHT: f64 = 14.0;

/// What to draw.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Watermark text in the centre circle.
    pub club_name: &'a str,
    pub players: &'a [Player],
}

/// Draw the full lineup: grass, markings, watermark, tokens.
///
/// `size` is in CSS pixels; `dpr` scales the backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw_lineup(ctx: &CanvasRenderingContext2d, size: Size, dpr: f64, scene: &Scene<'_>) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, size.width, size.height);

    draw_grass(ctx, size);
    draw_markings(ctx, size)?;
    draw_watermark(ctx, size, scene.club_name)?;

    for player in scene.players {
        draw_token(ctx, size, player)?;
    }
    Ok(())
}

// =============================================================
// Pitch
// =============================================================

fn draw_grass(ctx: &CanvasRenderingContext2d, size: Size) {
    let stripe_h = size.height / f64::from(GRASS_STRIPES);
    for i in 0..GRASS_STRIPES {
        ctx.set_fill_style_str(if i % 2 == 0 { GRASS_DARK } else { GRASS_LIGHT });
        ctx.fill_rect(0.0, f64::from(i) * stripe_h, size.width, stripe_h);
    }
}

fn draw_markings(ctx: &CanvasRenderingContext2d, size: Size) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_fill_style_str(LINE_COLOR);
    ctx.set_line_width(LINE_WIDTH * scale_for(size).max(0.5));

    for marking in pitch_markings(size) {
        ctx.begin_path();
        match &marking {
            Marking::Line { from, to } => {
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
            }
            Marking::Polyline { points } => {
                if let Some((first, rest)) = points.split_first() {
                    ctx.move_to(first.x, first.y);
                    for p in rest {
                        ctx.line_to(p.x, p.y);
                    }
                }
            }
            Marking::Circle { center, radius, .. } => ctx.arc(center.x, center.y, *radius, 0.0, TAU)?,
            Marking::Arc { center, radius, start, end } => ctx.arc(center.x, center.y, *radius, *start, *end)?,
        }
        if marking.is_filled() {
            ctx.fill();
        } else {
            ctx.stroke();
        }
    }

    ctx.restore();
    Ok(())
}

fn draw_watermark(ctx: &CanvasRenderingContext2d, size: Size, club_name: &str) -> Result<(), JsValue> {
    if club_name.trim().is_empty() {
        return Ok(());
    }
    let font_px = (size.width * 0.09).clamp(14.0, 48.0);
    ctx.save();
    ctx.set_fill_style_str(WATERMARK_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("900 {font_px:.0}px sans-serif"));
    ctx.fill_text(&club_name.to_uppercase(), size.width / 2.0, size.height / 2.0)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Tokens
// =============================================================

/// Centre of a player's token in canvas pixels, pulled inside the pitch.
#[must_use]
pub fn token_center(size: Size, player: &Player) -> Point {
    let pos = settle(size, Percent::new(player.x, player.y), Point::default(), TOKEN_HALF_PX);
    let offset = percent_to_px(pos, size);
    Point::new(size.width / 2.0 + offset.x, size.height / 2.0 + offset.y)
}

/// Fill and text colours for a role.
#[must_use]
pub fn role_colors(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Goalkeeper => (GOALKEEPER_FILL, GOALKEEPER_TEXT),
        Role::Outfield => (OUTFIELD_FILL, OUTFIELD_TEXT),
    }
}

fn draw_token(ctx: &CanvasRenderingContext2d, size: Size, player: &Player) -> Result<(), JsValue> {
    let center = token_center(size, player);
    let radius = JERSEY_DIAMETER_PX / 2.0;
    let (fill, text) = role_colors(player.role);

    ctx.save();

    // Jersey disc.
    ctx.begin_path();
    ctx.arc(center.x, center.y - 6.0, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Jersey number.
    ctx.set_fill_style_str(text);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("bold 18px sans-serif");
    ctx.fill_text(&player.number, center.x, center.y - 6.0)?;

    // Name label.
    let label = player.label();
    ctx.set_font("bold 10px sans-serif");
    let label_w = ctx.measure_text(&label)?.width() + LABEL_PAD_X * 2.0;
    let label_top = center.y - 6.0 + radius + LABEL_GAP_PX;
    ctx.set_fill_style_str(LABEL_BACKGROUND);
    ctx.fill_rect(center.x - label_w / 2.0, label_top, label_w, LABEL_HEIGHT);
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text(&label, center.x, label_top + LABEL_HEIGHT / 2.0)?;

    ctx.restore();
    Ok(())
}
