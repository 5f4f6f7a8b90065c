//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Error strings are
//! meant for the console log; the UI shows its own localized messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ClubInfo, Coach, Credentials, NewPlayer, Player, PositionUpdate};

#[cfg(any(test, feature = "hydrate"))]
const PLAYERS_ENDPOINT: &str = "/api/players";

#[cfg(any(test, feature = "hydrate"))]
fn player_endpoint(id: i64) -> String {
    format!("{PLAYERS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn player_position_endpoint(id: i64) -> String {
    format!("{PLAYERS_ENDPOINT}/{id}/position")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, detail: &str) -> String {
    if detail.trim().is_empty() {
        format!("{action} failed: {status}")
    } else {
        format!("{action} failed: {status} ({})", detail.trim())
    }
}

/// Turn a non-2xx response into an error string, reading the JSON error body
/// when there is one.
#[cfg(feature = "hydrate")]
async fn failure(action: &str, resp: gloo_net::http::Response) -> String {
    let detail = resp.json::<super::types::ErrorBody>().await.map(|b| b.error).unwrap_or_default();
    request_failed_message(action, resp.status(), &detail)
}

/// Fetch the signed-in coach from `/api/auth/me`.
/// Returns `None` for visitors or on the server.
pub async fn fetch_current_coach() -> Option<Coach> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Coach>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are rejected.
pub async fn sign_in(credentials: &Credentials) -> Result<Coach, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/sign-in")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("sign-in", resp).await);
        }
        resp.json::<Coach>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// End the session via `POST /api/auth/sign-out`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/sign-out").send().await {
            log::warn!("sign-out request failed: {e}");
        }
    }
}

/// Fetch club name and categories from `/api/club`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be parsed.
pub async fn fetch_club() -> Result<ClubInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/club").send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("club", resp).await);
        }
        resp.json::<ClubInfo>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the players of one category, ordered by id.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be parsed.
pub async fn fetch_players(category: &str) -> Result<Vec<Player>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PLAYERS_ENDPOINT)
            .query([("category", category)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("player list", resp).await);
        }
        resp.json::<Vec<Player>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category;
        Err("not available on server".to_owned())
    }
}

/// Insert a player at the pitch centre via `POST /api/players`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the row.
pub async fn add_player(player: &NewPlayer) -> Result<Player, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PLAYERS_ENDPOINT)
            .json(player)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("insert", resp).await);
        }
        resp.json::<Player>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = player;
        Err("not available on server".to_owned())
    }
}

/// Persist a token position via `PATCH /api/players/{id}/position`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn move_player(id: i64, position: PositionUpdate) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&player_position_endpoint(id))
            .json(&position)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("move", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, position);
        Err("not available on server".to_owned())
    }
}

/// Delete a player via `DELETE /api/players/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_player(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&player_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("delete", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
