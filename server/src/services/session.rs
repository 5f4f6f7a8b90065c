//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! A successful sign-in stores a random token in `sessions` with an expiry;
//! the token travels in an HttpOnly cookie. Validation joins back to the
//! coach row so a deleted coach loses every session at once.

use rand::Rng;
use roster::Coach;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given coach, returning the token.
pub async fn create_session(pool: &PgPool, coach_id: Uuid, ttl_hours: i32) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query(
        "INSERT INTO sessions (token, coach_id, expires_at) VALUES ($1, $2, now() + make_interval(hours => $3))",
    )
    .bind(&token)
    .bind(coach_id)
    .bind(ttl_hours)
    .execute(pool)
    .await?;
    Ok(token)
}

/// Validate a session token and return the associated coach.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<Coach>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT c.id, c.email, c.name
          FROM sessions s
          JOIN coaches c ON c.id = s.coach_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(r) = row else {
        return Ok(None);
    };
    let id: Uuid = r.try_get("id")?;
    Ok(Some(Coach { id: id.to_string(), email: r.try_get("email")?, name: r.try_get("name")? }))
}

/// Delete a session by token. Unknown tokens are not an error.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove expired sessions, returning how many were deleted.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
