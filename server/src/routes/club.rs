//! Club settings route.

use axum::extract::State;
use axum::response::Json;
use roster::ClubInfo;

use crate::state::AppState;

/// `GET /api/club`: club name and category list.
pub async fn club(State(state): State<AppState>) -> Json<ClubInfo> {
    Json(ClubInfo::clone(&state.club))
}
