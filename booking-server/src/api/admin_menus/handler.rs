//! Admin menu handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuCreate, MenuUpdate};

use crate::core::ServerState;
use crate::db::models::Menu;
use crate::db::repository::MenuRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /admin/menus
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Menu>>> {
    let repo = MenuRepository::new(state.get_db());
    let menus = repo.find_all().await?;
    Ok(Json(menus))
}

/// GET /admin/menus/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.get_db());
    let menu = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu {}", id)))?;
    Ok(Json(menu))
}

/// POST /admin/menus - create a menu with its embedded hierarchy
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    validate_menu_names(&payload)?;
    let repo = MenuRepository::new(state.get_db());
    let menu = repo.create(payload).await?;
    state.menu_cache.invalidate();
    Ok(Json(menu))
}

/// PUT /admin/menus/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuUpdate>,
) -> AppResult<Json<Menu>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    let repo = MenuRepository::new(state.get_db());
    let menu = repo.update(&id, payload).await?;
    state.menu_cache.invalidate();
    Ok(Json(menu))
}

/// DELETE /admin/menus/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = MenuRepository::new(state.get_db());
    if !repo.delete(&id).await? {
        return Err(AppError::not_found(format!("Menu {}", id)));
    }
    state.menu_cache.invalidate();
    Ok(Json(serde_json::json!({ "message": "Menu deleted" })))
}

fn validate_menu_names(payload: &MenuCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    for course in &payload.courses {
        validate_required_text(&course.name, "course name", MAX_NAME_LEN)?;
        for dish in &course.dishes {
            validate_required_text(&dish.name, "dish name", MAX_NAME_LEN)?;
            for ingredient in &dish.ingredients {
                validate_required_text(&ingredient.name, "ingredient name", MAX_NAME_LEN)?;
            }
        }
    }
    Ok(())
}
