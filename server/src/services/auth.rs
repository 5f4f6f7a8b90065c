//! Coach accounts: password hashing, provisioning, and sign-in checks.
//!
//! DESIGN
//! ======
//! Passwords are stored as a hex SHA-256 digest of `salt || password` with a
//! per-account random salt. Accounts are upserted from configuration at
//! startup; there is no sign-up route.

use rand::Rng;
use roster::{Coach, Credentials};
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::bytes_to_hex;
use crate::config::CoachSeed;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("email or password incorrect")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Display name used when none is configured: the local part of the email.
pub(crate) fn name_from_email(email: &str) -> String {
    let local = email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("coach");
    local.to_owned()
}

/// Random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Hex SHA-256 of `salt || password`, one round.
///
/// Placeholder hashing for a single provisioned account; this is not a
/// password KDF. Swap in a slow KDF (argon2, scrypt) before exposing sign-up
/// or storing passwords for more than the configured coach.
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Check `password` against a stored hash. Runs in time independent of where
/// the digests first differ.
#[must_use]
pub fn verify_password(salt: &str, password: &str, expected_hash: &str) -> bool {
    let actual = hash_password(salt, password);
    if actual.len() != expected_hash.len() {
        return false;
    }
    actual
        .bytes()
        .zip(expected_hash.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Create or refresh the configured coach account. The password and name are
/// overwritten on every start. Returns the coach id.
pub async fn upsert_coach(pool: &PgPool, seed: &CoachSeed) -> Result<Uuid, AuthError> {
    let email = normalize_email(&seed.email).ok_or(AuthError::InvalidEmail)?;
    let name = if seed.name.trim().is_empty() { name_from_email(&email) } else { seed.name.trim().to_owned() };
    let salt = generate_salt();
    let hash = hash_password(&salt, &seed.password);

    let row = sqlx::query(
        r"INSERT INTO coaches (id, email, name, password_hash, password_salt)
          VALUES ($1, $2, $3, $4, $5)
          ON CONFLICT (email) DO UPDATE
          SET name = EXCLUDED.name,
              password_hash = EXCLUDED.password_hash,
              password_salt = EXCLUDED.password_salt
          RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&name)
    .bind(&hash)
    .bind(&salt)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

/// Check credentials and return the coach with their id.
pub async fn authenticate(pool: &PgPool, credentials: &Credentials) -> Result<(Uuid, Coach), AuthError> {
    let email = normalize_email(&credentials.email).ok_or(AuthError::InvalidEmail)?;

    let row = sqlx::query("SELECT id, email, name, password_hash, password_salt FROM coaches WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let salt: String = row.try_get("password_salt")?;
    let hash: String = row.try_get("password_hash")?;
    if !verify_password(&salt, &credentials.password, &hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let id: Uuid = row.try_get("id")?;
    Ok((id, Coach { id: id.to_string(), email: row.try_get("email")?, name: row.try_get("name")? }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
