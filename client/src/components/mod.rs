//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the pitch, its tokens, and the page chrome while
//! reading/writing shared state from Leptos context providers.

pub mod category_picker;
pub mod pitch;
pub mod player_form;
pub mod player_token;
pub mod session_button;
