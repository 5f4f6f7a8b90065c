//! Pitch geometry and rendering for the lineup board.
//!
//! This crate owns everything that is measured in pixels or percent: turning
//! a stored token position into a pixel offset inside the pitch container,
//! working out how far a token may be dragged, clamping the drop point, and
//! drawing the pitch for PNG export. The Leptos client drives it from pointer
//! events; nothing here performs I/O.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Percent/pixel conversion, drag bounds, drop clamping |
//! | [`drag`] | Pointer gesture state machine for a single token |
//! | [`markings`] | Resolution-independent pitch line shapes |
//! | [`render`] | Canvas 2D renderer used by the PNG export |
//! | [`consts`] | Shared sizes and colours |

pub mod consts;
pub mod drag;
pub mod geometry;
pub mod markings;
pub mod render;
