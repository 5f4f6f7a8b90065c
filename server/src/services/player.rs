//! Player table service: list, insert, move, delete.
//!
//! DESIGN
//! ======
//! Rows are read per category in id order. Inserts start on the centre spot.
//! Position updates overwrite the stored percentage with no version check;
//! the last write wins.
//!
//! ERROR HANDLING
//! ==============
//! Payload problems surface as `PlayerError::Invalid` before any query runs.
//! Writes against a missing id return `NotFound`.

use roster::{NewPlayer, Player, PositionUpdate, Role, RosterError};
use sqlx::PgPool;
use sqlx::Row;
use sqlx::postgres::PgRow;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error(transparent)]
    Invalid(#[from] RosterError),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("player not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

const PLAYER_COLUMNS: &str = "id, last_name, first_name, category, number, role, x, y";

fn player_from_row(row: &PgRow) -> Result<Player, sqlx::Error> {
    let role: String = row.try_get("role")?;
    Ok(Player {
        id: row.try_get("id")?,
        last_name: row.try_get("last_name")?,
        first_name: row.try_get("first_name")?,
        category: row.try_get("category")?,
        number: row.try_get("number")?,
        role: Role::parse(&role).unwrap_or_default(),
        x: row.try_get("x")?,
        y: row.try_get("y")?,
    })
}

/// Validate an insert payload against the club's category list.
///
/// # Errors
///
/// Returns `Invalid` for a bad payload and `UnknownCategory` when the
/// category is not one of `categories`.
pub fn validate_new(player: NewPlayer, categories: &[String]) -> Result<NewPlayer, PlayerError> {
    let player = player.normalized()?;
    if !categories.iter().any(|c| *c == player.category) {
        return Err(PlayerError::UnknownCategory(player.category));
    }
    Ok(player)
}

/// Players of one category, ordered by id.
///
/// # Errors
///
/// Returns `Database` if the query fails.
pub async fn list_by_category(pool: &PgPool, category: &str) -> Result<Vec<Player>, PlayerError> {
    let rows = sqlx::query(&format!("SELECT {PLAYER_COLUMNS} FROM players WHERE category = $1 ORDER BY id"))
        .bind(category)
        .fetch_all(pool)
        .await?;
    let players = rows.iter().map(player_from_row).collect::<Result<Vec<_>, _>>()?;
    Ok(players)
}

/// Insert a player at `(0, 0)` and return the stored row.
///
/// # Errors
///
/// Returns `Invalid`/`UnknownCategory` for a bad payload, `Database` if the
/// insert fails.
pub async fn insert(pool: &PgPool, categories: &[String], player: NewPlayer) -> Result<Player, PlayerError> {
    let player = validate_new(player, categories)?;
    let row = sqlx::query(&format!(
        "INSERT INTO players (last_name, first_name, category, number, role, x, y)
         VALUES ($1, $2, $3, $4, $5, 0, 0)
         RETURNING {PLAYER_COLUMNS}"
    ))
    .bind(&player.last_name)
    .bind(&player.first_name)
    .bind(&player.category)
    .bind(&player.number)
    .bind(player.role.as_str())
    .fetch_one(pool)
    .await?;
    Ok(player_from_row(&row)?)
}

/// Store a new token position and return the updated row.
///
/// # Errors
///
/// Returns `Invalid` for non-finite coordinates, `NotFound` for an unknown
/// id, `Database` if the update fails.
pub async fn update_position(pool: &PgPool, id: i64, position: PositionUpdate) -> Result<Player, PlayerError> {
    let position = position.sanitized()?;
    let row = sqlx::query(&format!("UPDATE players SET x = $2, y = $3 WHERE id = $1 RETURNING {PLAYER_COLUMNS}"))
        .bind(id)
        .bind(position.x)
        .bind(position.y)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Err(PlayerError::NotFound(id));
    };
    Ok(player_from_row(&row)?)
}

/// Delete a player row.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `Database` if the delete fails.
pub async fn delete(pool: &PgPool, id: i64) -> Result<(), PlayerError> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(PlayerError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "player_test.rs"]
mod tests;
