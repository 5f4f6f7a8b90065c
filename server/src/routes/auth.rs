//! Auth routes: email/password sign-in, sign-out, current coach.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use roster::{Coach, Credentials};
use time::Duration;

use super::{ApiError, error_response};
use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

/// Session cookie carrying `token`, valid for `ttl_hours`.
pub(crate) fn session_cookie(token: String, secure: bool, ttl_hours: i32) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(i64::from(ttl_hours)))
        .build()
}

/// Expired cookie that makes the browser drop the session.
pub(crate) fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidEmail => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Signed-in coach extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthCoach {
    pub coach: Coach,
}

impl<S> axum::extract::FromRequestParts<S> for AuthCoach
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let coach = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { coach })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/sign-in`: check credentials and set the session cookie.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<Coach>), ApiError> {
    let (coach_id, coach) = match auth_svc::authenticate(&state.pool, &credentials).await {
        Ok(found) => found,
        Err(e) => {
            let status = auth_error_to_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "sign-in failed");
            } else {
                tracing::info!(error = %e, "sign-in rejected");
            }
            return Err(error_response(status, e.to_string()));
        }
    };

    let token = session::create_session(&state.pool, coach_id, state.session_ttl_hours)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session creation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to create session")
        })?;

    tracing::info!(coach = %coach.email, "coach signed in");
    let jar = jar.add(session_cookie(token, state.cookie_secure, state.session_ttl_hours));
    Ok((jar, Json(coach)))
}

/// `POST /api/auth/sign-out`: delete the session if any, clear the cookie.
/// Succeeds without a session.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let token = jar.get(COOKIE_NAME).map(|c| c.value().to_owned()).unwrap_or_default();
    if !token.is_empty() {
        if let Err(e) = session::delete_session(&state.pool, &token).await {
            tracing::warn!(error = %e, "session delete failed");
        }
    }
    (jar.add(cleared_cookie(state.cookie_secure)), StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`: return the signed-in coach.
pub async fn me(auth: AuthCoach) -> Json<Coach> {
    Json(auth.coach)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
