//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! All settings are read once at startup. Parsing goes through a lookup
//! closure so tests can feed a map instead of mutating process env.
//!
//! ERROR HANDLING
//! ==============
//! Missing required values and unparseable numbers abort startup with a
//! `ConfigError`; optional values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use roster::{ClubInfo, DEFAULT_CLUB_NAME, parse_categories};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_HOURS: i32 = 720;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("CATEGORIES is set but lists no category")]
    NoCategories,
    #[error("DEFAULT_CATEGORY {0:?} is not one of CATEGORIES")]
    UnknownDefaultCategory(String),
}

/// Coach account provisioned at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct CoachSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for CoachSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachSeed")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    pub session_ttl_hours: i32,
    pub club: ClubInfo,
    pub coach: Option<CoachSeed>,
}

/// Parse a boolean flag (`1/true/yes/on`, `0/false/no/off`), case-insensitive.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `get`, which returns the raw value of a
    /// variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing, a numeric or boolean
    /// value does not parse, the category list is empty, or the default
    /// category is not in the list.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let session_ttl_hours = parse_or(get("SESSION_TTL_HOURS"), "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        if session_ttl_hours <= 0 {
            return Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: session_ttl_hours.to_string() });
        }
        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => false,
        };

        let club = club_info(get("CLUB_NAME"), get("CATEGORIES"), get("DEFAULT_CATEGORY"))?;
        let coach = coach_seed(get("COACH_EMAIL"), get("COACH_PASSWORD"), get("COACH_NAME"))?;

        Ok(Self { database_url, port, db_max_connections, cookie_secure, session_ttl_hours, club, coach })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn club_info(
    name: Option<String>,
    categories: Option<String>,
    default_category: Option<String>,
) -> Result<ClubInfo, ConfigError> {
    let defaults = ClubInfo::default();
    let categories = match categories {
        Some(raw) => parse_categories(&raw),
        None => defaults.categories,
    };
    let Some(first) = categories.first().cloned() else {
        return Err(ConfigError::NoCategories);
    };
    let default_category = match default_category {
        Some(chosen) if categories.contains(&chosen) => chosen,
        Some(chosen) => return Err(ConfigError::UnknownDefaultCategory(chosen)),
        None => first,
    };
    Ok(ClubInfo {
        name: name.unwrap_or_else(|| DEFAULT_CLUB_NAME.to_owned()),
        categories,
        default_category,
    })
}

fn coach_seed(
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
) -> Result<Option<CoachSeed>, ConfigError> {
    match (email, password) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::Missing("COACH_PASSWORD")),
        (None, Some(_)) => Err(ConfigError::Missing("COACH_EMAIL")),
        (Some(email), Some(password)) => Ok(Some(CoachSeed { email, password, name: name.unwrap_or_default() })),
    }
}
