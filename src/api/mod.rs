//! HTTP API layer - REST interface over the same core operations the bot
//! uses.
//!
//! The surface mirrors the bot: write endpoints for users, habits, and
//! entries; read endpoints for stats, insights, and recommendations. The
//! derived read endpoints always answer 200 - their core operations are
//! total functions. Write endpoints answer 400 for duplicates and invalid
//! input, 500 for store transport failures.

/// Habit and entry endpoints
pub mod habits;
/// Stats, insight, recommendation, and dashboard endpoints
pub mod insights;
/// Root and health endpoints
pub mod system;
/// User registration endpoint
pub mod users;

use crate::{ai::GeminiClient, config::AppConfig, errors::Result, store::SheetsStore};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Shared state handed to every API handler.
#[derive(Clone)]
pub struct ApiState {
    /// Record store client
    pub store: Arc<SheetsStore>,
    /// Generative-text backend client
    pub ai: Arc<GeminiClient>,
    /// Resolved application configuration
    pub config: Arc<AppConfig>,
}

/// Error payload shape shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub detail: String,
}

pub(crate) fn bad_request(detail: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

pub(crate) fn internal_error(detail: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

/// Builds the API router with all routes and a permissive CORS layer.
#[must_use]
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/users", post(users::create_user))
        .route("/habits", post(habits::create_habit))
        .route("/habits/track", post(habits::track_habit))
        .route("/habits/:user_id", get(habits::list_habits))
        .route("/entries/:user_id", get(habits::list_entries))
        .route("/stats/:user_id", get(insights::get_stats))
        .route("/insights/:user_id", get(insights::get_insights))
        .route("/recommendations/:user_id", get(insights::get_recommendation))
        .route("/dashboard/:user_id", get(insights::get_dashboard))
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves the API until the process exits.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: String, state: ApiState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "HTTP API listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
