//! Public menu handlers
//!
//! Served from the in-process TTL cache; the public catalog tolerates
//! staleness up to the configured TTL.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Menu;
use crate::db::repository::MenuRepository;
use crate::utils::{AppError, AppResult};

/// GET /store/menus - public catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Menu>>> {
    let repo = MenuRepository::new(state.get_db());
    let menus = state.menu_cache.list(&repo).await?;
    Ok(Json(menus))
}

/// GET /store/menus/:id - single menu
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.get_db());
    let menu = state
        .menu_cache
        .get(&repo, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu {}", id)))?;
    Ok(Json(menu))
}
