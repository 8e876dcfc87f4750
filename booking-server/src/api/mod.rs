//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`store_chef_events`] - storefront event request intake
//! - [`store_menus`] - cached public menu catalog
//! - [`admin_events`] - event review: accept / reject / CRUD
//! - [`admin_menus`] - menu hierarchy CRUD
//! - [`admin_products`] - template product curation

pub mod health;

// Storefront API
pub mod store_chef_events;
pub mod store_menus;

// Admin API
pub mod admin_events;
pub mod admin_menus;
pub mod admin_products;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// Assemble the full route tree
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(store_chef_events::router())
        .merge(store_menus::router())
        .merge(admin_events::router())
        .merge(admin_menus::router())
        .merge(admin_products::router())
}
