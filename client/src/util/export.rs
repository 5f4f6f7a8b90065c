//! PNG export of the current lineup.
//!
//! DESIGN
//! ======
//! The lineup is redrawn from state onto an off-screen canvas by
//! `pitch::render` rather than snapshotting the DOM, then handed to the
//! browser as a data-URL download.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as strings and only logged by the caller.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use pitch::consts::{PITCH_HEIGHT_PX, PITCH_WIDTH_PX};
use pitch::geometry::Size;

#[cfg(feature = "hydrate")]
use crate::net::types::Player;

/// Download name for a category's lineup image.
pub fn export_file_name(category: &str) -> String {
    format!("compo-{category}.png")
}

/// Size to draw at: the measured pitch, or the reference pitch when the
/// container has not been laid out.
pub fn export_size(measured: Size) -> Size {
    if measured.is_empty() {
        Size::new(PITCH_WIDTH_PX, PITCH_HEIGHT_PX)
    } else {
        measured
    }
}

/// Backing-store dimensions of the export canvas.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn backing_dims(size: Size, ratio: f64) -> (u32, u32) {
    let w = (size.width * ratio).round().max(1.0);
    let h = (size.height * ratio).round().max(1.0);
    (w as u32, h as u32)
}

#[cfg(feature = "hydrate")]
fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Render the lineup and trigger a PNG download.
///
/// # Errors
///
/// Returns an error string if the document, canvas, or 2D context is
/// unavailable, or if drawing or encoding fails.
#[cfg(feature = "hydrate")]
pub fn export_png(club_name: &str, category: &str, players: &[Player], measured: Size) -> Result<(), String> {
    use pitch::consts::EXPORT_PIXEL_RATIO;
    use pitch::render::{Scene, draw_lineup};
    use wasm_bindgen::JsCast;

    let document = web_sys::window().and_then(|w| w.document()).ok_or("document unavailable")?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| js_error(&e))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "canvas element has unexpected type".to_owned())?;

    let size = export_size(measured);
    let (w, h) = backing_dims(size, EXPORT_PIXEL_RATIO);
    canvas.set_width(w);
    canvas.set_height(h);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| js_error(&e))?
        .ok_or("2d context unavailable")?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "2d context has unexpected type".to_owned())?;

    draw_lineup(&ctx, size, EXPORT_PIXEL_RATIO, &Scene { club_name, players }).map_err(|e| js_error(&e))?;
    let url = canvas.to_data_url_with_type("image/png").map_err(|e| js_error(&e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| js_error(&e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element has unexpected type".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(&export_file_name(category));
    anchor.click();
    Ok(())
}
