//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s and provided through Leptos context by
//! `app::App`. Mutation helpers live on the structs so they can be tested
//! without a reactive runtime.

pub mod auth;
pub mod lineup;
