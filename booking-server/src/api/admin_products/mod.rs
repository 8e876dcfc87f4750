//! Admin template product API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/admin/products",
            get(handler::list).post(handler::create),
        )
        .route("/admin/products/{id}", get(handler::get_by_id))
}
