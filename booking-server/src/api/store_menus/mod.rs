//! Public menu catalog API (cached)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/store/menus", get(handler::list))
        .route("/store/menus/{id}", get(handler::get_by_id))
}
