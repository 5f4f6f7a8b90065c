//! Player table routes. Reads are public; writes need a signed-in coach.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use roster::{NewPlayer, Player, PositionUpdate};
use serde::Deserialize;

use super::auth::AuthCoach;
use super::{ApiError, error_response};
use crate::services::player::{self, PlayerError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    category: Option<String>,
}

impl ListQuery {
    /// Requested category, or the club default when absent or blank.
    pub(crate) fn category_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.category.as_deref().map(str::trim).filter(|c| !c.is_empty()).unwrap_or(default)
    }
}

pub(crate) fn player_error_to_status(err: &PlayerError) -> StatusCode {
    match err {
        PlayerError::Invalid(_) | PlayerError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
        PlayerError::NotFound(_) => StatusCode::NOT_FOUND,
        PlayerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn player_error(err: PlayerError) -> ApiError {
    let status = player_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "player query failed");
        return error_response(status, "database error");
    }
    error_response(status, err.to_string())
}

/// `GET /api/players?category=...`: rows of one category, ordered by id.
pub async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let category = query.category_or(&state.club.default_category);
    let players = player::list_by_category(&state.pool, category).await.map_err(player_error)?;
    Ok(Json(players))
}

/// `POST /api/players`: insert a player on the centre spot.
pub async fn create_player(
    State(state): State<AppState>,
    auth: AuthCoach,
    Json(body): Json<NewPlayer>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let created = player::insert(&state.pool, &state.club.categories, body).await.map_err(player_error)?;
    tracing::info!(coach = %auth.coach.email, player_id = created.id, category = %created.category, "player added");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/players/{id}/position`: store a dropped token position.
pub async fn move_player(
    State(state): State<AppState>,
    auth: AuthCoach,
    Path(id): Path<i64>,
    Json(body): Json<PositionUpdate>,
) -> Result<Json<Player>, ApiError> {
    let updated = player::update_position(&state.pool, id, body).await.map_err(player_error)?;
    tracing::debug!(coach = %auth.coach.email, player_id = id, x = updated.x, y = updated.y, "player moved");
    Ok(Json(updated))
}

/// `DELETE /api/players/{id}`: remove a player.
pub async fn delete_player(
    State(state): State<AppState>,
    auth: AuthCoach,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    player::delete(&state.pool, id).await.map_err(player_error)?;
    tracing::info!(coach = %auth.coach.email, player_id = id, "player deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "players_test.rs"]
mod tests;
