//! Health check

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health - liveness plus a database round-trip
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthStatus>> {
    state
        .db
        .query("RETURN 1")
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(HealthStatus {
        status: "ok",
        database: "ok",
    }))
}
