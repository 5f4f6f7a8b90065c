//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM measurement, canvas export)
//! from page and component logic.

pub mod export;
pub mod layout;
