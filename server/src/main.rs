mod config;
mod db;
mod routes;
mod services;
mod state;

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env could not be loaded");
        }
    }

    let config = config::Config::from_env()?;
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;

    // Provision the coach account (non-fatal: the board stays read-only without one).
    match &config.coach {
        Some(seed) => match services::auth::upsert_coach(&pool, seed).await {
            Ok(id) => tracing::info!(coach = %seed.email, %id, "coach account ready"),
            Err(e) => tracing::error!(error = %e, coach = %seed.email, "coach provisioning failed"),
        },
        None => tracing::warn!("COACH_EMAIL not set; no coach account provisioned"),
    }

    match services::session::purge_expired(&pool).await {
        Ok(0) => {}
        Ok(purged) => tracing::info!(purged, "expired sessions removed"),
        Err(e) => tracing::warn!(error = %e, "expired session purge failed"),
    }

    let port = config.port;
    let state = state::AppState::new(pool, &config);
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, club = %config.club.name, "lineup server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
