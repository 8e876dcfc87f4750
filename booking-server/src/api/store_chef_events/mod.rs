//! Storefront chef event API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/store/chef-events", post(handler::create))
}
