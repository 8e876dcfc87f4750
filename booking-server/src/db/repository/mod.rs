//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

// Booking
pub mod chef_event;

// Catalog
pub mod menu;
pub mod product;

// Inventory and associations
pub mod inventory;
pub mod link;

// Re-exports
pub use chef_event::ChefEventRepository;
pub use inventory::InventoryRepository;
pub use link::LinkRepository;
pub use menu::MenuRepository;
pub use product::ProductRepository;

use crate::utils::AppError;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" strings on the wire, RecordId internally
// =============================================================================

/// Strip a `table:` prefix if present, returning the bare key
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((t, key)) if t == table => key,
        _ => id,
    }
}

/// Build a RecordId from a wire id that may or may not carry the prefix
pub fn record_id(table: &str, id: &str) -> RecordId {
    RecordId::from_table_key(table, record_key(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_strips_matching_prefix_only() {
        assert_eq!(record_key("chef_event", "chef_event:abc"), "abc");
        assert_eq!(record_key("chef_event", "abc"), "abc");
        assert_eq!(record_key("chef_event", "product:abc"), "product:abc");
    }
}
