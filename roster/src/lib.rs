//! Shared lineup data model for the client/server boundary.
//!
//! This crate owns the JSON representation used by `server`, `client` and
//! `cli`. Payloads are plain serde structs; validation that both sides must
//! agree on (name trimming, jersey number shape, coordinate sanity) lives
//! here so the form and the REST handler reject the same inputs.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// Club name shown in the header and on exported images.
pub const DEFAULT_CLUB_NAME: &str = "FA Roumois";

/// Team groups offered when the server does not override them.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Seniors A",
    "Seniors B",
    "Seniors 31",
    "U15-U14",
    "U13-U12",
    "U13-U12 2",
    "U7",
    "U9",
    "U11",
];

/// Largest meaningful offset from the pitch centre, in percent of the pitch
/// dimension. A token centre can never sit beyond the pitch edge.
pub const POSITION_LIMIT_PCT: f64 = 50.0;

/// Longest accepted jersey number, in digits.
const MAX_NUMBER_DIGITS: usize = 3;

/// Validation failure for user-supplied lineup payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("last name is required")]
    MissingLastName,
    #[error("category is required")]
    MissingCategory,
    #[error("jersey number must be up to 3 digits, got {0:?}")]
    InvalidNumber(String),
    #[error("position must be a finite number")]
    NonFinitePosition,
}

/// Position role of a player on the pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Goalkeeper,
    #[default]
    Outfield,
}

impl Role {
    /// Stable storage/wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goalkeeper => "goalkeeper",
            Self::Outfield => "outfield",
        }
    }

    /// Parse a storage/wire name. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "goalkeeper" => Some(Self::Goalkeeper),
            "outfield" => Some(Self::Outfield),
            _ => None,
        }
    }

    /// Label shown in the add-player form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Goalkeeper => "Gardien",
            Self::Outfield => "Joueur",
        }
    }
}

/// One row of the player table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Store-assigned identifier.
    pub id: i64,
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    /// Team group the player belongs to.
    pub category: String,
    /// Jersey number as typed by the coach; may be empty.
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub role: Role,
    /// Horizontal offset of the token centre from the pitch centre, in percent of pitch width.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset of the token centre from the pitch centre, in percent of pitch height.
    #[serde(default)]
    pub y: f64,
}

impl Player {
    /// Short label printed under the token.
    #[must_use]
    pub fn label(&self) -> String {
        player_label(&self.last_name, &self.first_name)
    }
}

/// Format `"Last F."`, or just `"Last"` when the first name is empty.
#[must_use]
pub fn player_label(last_name: &str, first_name: &str) -> String {
    let last = last_name.trim();
    match first_name.trim().chars().next() {
        Some(initial) => format!("{last} {initial}."),
        None => last.to_owned(),
    }
}

/// Insert payload for a new player. New players start on the centre spot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub role: Role,
    pub category: String,
}

impl NewPlayer {
    /// Trim every text field and check the result.
    ///
    /// # Errors
    ///
    /// Returns a [`RosterError`] when the last name or category is blank, or
    /// when the jersey number is not a short run of digits.
    pub fn normalized(self) -> Result<Self, RosterError> {
        let last_name = self.last_name.trim().to_owned();
        if last_name.is_empty() {
            return Err(RosterError::MissingLastName);
        }
        let category = self.category.trim().to_owned();
        if category.is_empty() {
            return Err(RosterError::MissingCategory);
        }
        let number = self.number.trim().to_owned();
        if number.len() > MAX_NUMBER_DIGITS || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(RosterError::InvalidNumber(number));
        }
        Ok(Self { last_name, first_name: self.first_name.trim().to_owned(), number, role: self.role, category })
    }
}

/// Coordinate update sent on drag release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub x: f64,
    pub y: f64,
}

impl PositionUpdate {
    /// Reject non-finite values and clamp both axes to the pitch.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NonFinitePosition`] for `NaN` or infinite input.
    pub fn sanitized(self) -> Result<Self, RosterError> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RosterError::NonFinitePosition);
        }
        Ok(Self {
            x: self.x.clamp(-POSITION_LIMIT_PCT, POSITION_LIMIT_PCT),
            y: self.y.clamp(-POSITION_LIMIT_PCT, POSITION_LIMIT_PCT),
        })
    }
}

/// Email/password sign-in payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signed-in coach as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    /// Coach identifier (UUID string).
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Club-wide display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubInfo {
    pub name: String,
    pub categories: Vec<String>,
    pub default_category: String,
}

impl Default for ClubInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLUB_NAME.to_owned(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| (*c).to_owned()).collect(),
            default_category: DEFAULT_CATEGORIES[0].to_owned(),
        }
    }
}

/// Split a comma-separated category list, dropping blanks and duplicates.
#[must_use]
pub fn parse_categories(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !out.iter().any(|existing| existing == item) {
            out.push(item.to_owned());
        }
    }
    out
}
