//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! player table lives in Postgres, so the state only carries the pool and the
//! settings resolved from configuration at startup.

use std::sync::Arc;

use roster::ClubInfo;
use sqlx::PgPool;

use crate::config::Config;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Club name and category list served by `/api/club`.
    pub club: Arc<ClubInfo>,
    /// `Secure` flag on the session cookie.
    pub cookie_secure: bool,
    /// Lifetime of a new session.
    pub session_ttl_hours: i32,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: &Config) -> Self {
        Self {
            pool,
            club: Arc::new(config.club.clone()),
            cookie_secure: config.cookie_secure,
            session_ttl_hours: config.session_ttl_hours,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
