//! Storefront chef event handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::ChefEventCreate;

use crate::core::ServerState;
use crate::db::models::ChefEvent;
use crate::utils::AppResult;

#[derive(Serialize)]
pub struct ChefEventResponse {
    pub chef_event: ChefEvent,
    pub message: String,
}

/// POST /store/chef-events - submit an event request
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ChefEventCreate>,
) -> AppResult<Json<ChefEventResponse>> {
    let chef_event = state.intake_service().submit(payload).await?;
    Ok(Json(ChefEventResponse {
        chef_event,
        message: "Event request received. The chef will review it shortly.".to_string(),
    }))
}
