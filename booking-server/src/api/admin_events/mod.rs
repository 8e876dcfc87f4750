//! Admin event review API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/admin/events", event_routes())
}

fn event_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        // Both verbs: emailed action links are GETs, the admin UI posts
        .route("/{id}/accept", get(handler::accept).post(handler::accept))
        .route("/{id}/reject", post(handler::reject))
}
