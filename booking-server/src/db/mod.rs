//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) under the work directory.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use repository::InventoryRepository;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "saffron";
const DATABASE: &str = "booking";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_dir` and seed the singleton
    /// rows the acceptance flow links against.
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_dir.to_path_buf())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database opened at {}", db_dir.display());

        let service = Self { db };
        service.seed().await?;
        Ok(service)
    }

    /// Ensure the default sales channel and the manual fulfillment
    /// provider exist before the first acceptance runs.
    async fn seed(&self) -> Result<(), AppError> {
        let inventory = InventoryRepository::new(self.db.clone());
        inventory.ensure_default_sales_channel().await?;
        inventory.ensure_manual_provider().await?;
        Ok(())
    }
}
