//! Admin event handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::ChefEvent;
use crate::db::repository::ChefEventRepository;
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct EventActionResponse {
    pub message: String,
    pub event: ChefEvent,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /admin/events - all events, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ChefEvent>>> {
    let repo = ChefEventRepository::new(state.get_db());
    let events = repo.find_all().await?;
    Ok(Json(events))
}

/// GET /admin/events/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ChefEvent>> {
    let repo = ChefEventRepository::new(state.get_db());
    let event = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Chef event {}", id)))?;
    Ok(Json(event))
}

/// GET|POST /admin/events/:id/accept - run the acceptance choreography
pub async fn accept(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EventActionResponse>> {
    let outcome = state
        .acceptance_saga()
        .accept(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(EventActionResponse {
        message: "Event accepted".to_string(),
        event: outcome.event,
    }))
}

/// POST /admin/events/:id/reject
///
/// Placeholder: acknowledges the rejection without touching persisted
/// state. Kept in line with the admin UI contract until the real
/// cancellation flow lands.
pub async fn reject(
    State(_state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    tracing::info!(event = %id, "Event rejection acknowledged (no state change)");
    Ok(Json(MessageResponse {
        message: "Event rejected".to_string(),
    }))
}

/// DELETE /admin/events/:id - plain CRUD delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = ChefEventRepository::new(state.get_db());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Chef event {}", id)));
    }
    Ok(Json(MessageResponse {
        message: "Event deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use shared::models::{ChefEventCreate, EventStatus, EventType, LocationType};

    async fn test_state(dir: &tempfile::TempDir) -> ServerState {
        let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
        ServerState::initialize(&config).await
    }

    #[tokio::test]
    async fn reject_returns_success_without_state_change() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = test_state(&dir).await;

        let date = (chrono::Utc::now().date_naive() + chrono::Duration::days(30)).to_string();
        let event = state
            .intake_service()
            .submit(ChefEventCreate {
                requested_date: date,
                requested_time: "18:30".to_string(),
                party_size: 4,
                event_type: EventType::PlatedDinner,
                template_product_id: None,
                location_type: LocationType::CustomerLocation,
                location_address: "12 Long Street, Springfield".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                notes: None,
                special_requirements: None,
            })
            .await
            .unwrap();
        let id = event.id.clone().unwrap().to_string();

        let response = reject(State(state.clone()), Path(id.clone())).await.unwrap();
        assert_eq!(response.0.message, "Event rejected");

        // Placeholder semantics: the event is untouched
        let repo = ChefEventRepository::new(state.get_db());
        let after = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(after.status, EventStatus::Pending);
    }
}
