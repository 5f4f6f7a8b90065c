//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the lineup page and the session button to decide whether edit
//! controls are shown. Anyone without a coach session is a visitor.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Coach;

/// Authentication state tracking the signed-in coach and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub coach: Option<Coach>,
    pub loading: bool,
}

impl AuthState {
    /// Whether edit controls (add, drag, delete) should be available.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.coach.is_some()
    }

    /// Short status line shown in the header.
    #[must_use]
    pub fn status_label(&self) -> String {
        match &self.coach {
            Some(coach) if !coach.name.trim().is_empty() => format!("Coach : {}", coach.name.trim()),
            Some(coach) => format!("Coach : {}", coach.email),
            None => "Mode visiteur".to_owned(),
        }
    }
}
