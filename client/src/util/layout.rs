//! Token placement and DOM measurement helpers.
//!
//! Tokens are positioned by CSS relative to the pitch centre, so the stored
//! percentage survives any container size. A live drag adds a pixel
//! translation on top until the drop settles.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use pitch::geometry::{Percent, Point};
#[cfg(feature = "hydrate")]
use pitch::geometry::Size;

/// Inline style placing a token at `pos`, shifted by `offset` pixels.
pub fn token_style(pos: Percent, offset: Point) -> String {
    format!(
        "left: calc(50% + {:.3}%); top: calc(50% + {:.3}%); transform: translate(calc(-50% + {:.1}px), calc(-50% + {:.1}px));",
        pos.x, pos.y, offset.x, offset.y
    )
}

/// Pointer position in client coordinates.
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Inner (padding-box) size of an element: the box that percentage
/// positions of absolutely placed children resolve against.
#[cfg(feature = "hydrate")]
pub fn element_size(el: &web_sys::Element) -> Size {
    Size::new(f64::from(el.client_width()), f64::from(el.client_height()))
}

