//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and persistence so route handlers can stay
//! focused on status codes, cookies, and auth plumbing.

pub mod auth;
pub mod player;
pub mod session;
