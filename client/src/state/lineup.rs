//! Lineup state: the selected category and its players.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page fetches rows for the selected category and writes them here;
//! the pitch renders from `players`. Deletes and moves are applied locally
//! before the network call completes, so the visible list never waits on the
//! server.

#[cfg(test)]
#[path = "lineup_test.rs"]
mod lineup_test;

use crate::net::types::{ClubInfo, Player, PositionUpdate};

/// Players shown on the pitch for one category.
#[derive(Clone, Debug)]
pub struct LineupState {
    /// Club settings (name and categories).
    pub club: ClubInfo,
    /// Currently selected category.
    pub category: String,
    /// Rows for `category`, ordered by id.
    pub players: Vec<Player>,
    /// True while a fetch for `category` is in flight.
    pub loading: bool,
}

impl Default for LineupState {
    fn default() -> Self {
        let club = ClubInfo::default();
        let category = club.default_category.clone();
        Self { club, category, players: Vec::new(), loading: true }
    }
}

impl LineupState {
    /// Install club settings, keeping the current category if the club still
    /// offers it.
    pub fn apply_club(&mut self, club: ClubInfo) {
        if !club.categories.iter().any(|c| *c == self.category) {
            self.category.clone_from(&club.default_category);
            self.players.clear();
            self.loading = true;
        }
        self.club = club;
    }

    /// Switch to `category`. Returns `true` if the selection changed and a
    /// fetch is needed.
    pub fn select_category(&mut self, category: &str) -> bool {
        if self.category == category {
            return false;
        }
        category.clone_into(&mut self.category);
        self.players.clear();
        self.loading = true;
        true
    }

    /// Replace the visible players with a fetch result for `category`.
    ///
    /// Results for a category that is no longer selected are dropped, and
    /// rows whose category does not match are filtered out.
    pub fn replace_for_category(&mut self, category: &str, rows: Vec<Player>) -> bool {
        if self.category != category {
            return false;
        }
        self.players = rows.into_iter().filter(|p| p.category == category).collect();
        self.players.sort_by_key(|p| p.id);
        self.loading = false;
        true
    }

    /// Stop the loading indicator after a failed fetch for `category`.
    pub fn fetch_failed(&mut self, category: &str) {
        if self.category == category {
            self.loading = false;
        }
    }

    /// Add a freshly inserted player if it belongs to the visible category.
    pub fn push(&mut self, player: Player) {
        if player.category != self.category || self.players.iter().any(|p| p.id == player.id) {
            return;
        }
        self.players.push(player);
    }

    /// Remove a player locally. Returns the removed row.
    pub fn remove(&mut self, id: i64) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Apply a settled drag position locally.
    pub fn apply_position(&mut self, id: i64, position: PositionUpdate) -> bool {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        player.x = position.x;
        player.y = position.y;
        true
    }

    /// Look up a visible player.
    #[must_use]
    pub fn player(&self, id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
