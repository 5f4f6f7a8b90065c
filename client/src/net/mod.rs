//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` re-exports the shared wire
//! schema from `roster`.

pub mod api;
pub mod types;
