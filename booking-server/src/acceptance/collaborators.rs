//! Acceptance collaborators
//!
//! The saga talks to typed, constructor-injected interfaces instead of
//! resolving services out of shared state. Production implementations
//! wrap the repositories; `memory` provides swap-in implementations for
//! tests.

use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use crate::db::models::{
    ChefEvent, FulfillmentProvider, InventoryItem, InventoryLevel, Product, SalesChannel,
    StockLocation,
};
use crate::db::repository::{
    ChefEventRepository, InventoryRepository, LinkRepository, ProductRepository, RepoError,
};
use crate::utils::AppError;

/// Errors raised by acceptance steps
#[derive(Debug, thiserror::Error)]
pub enum AcceptError {
    #[error("Chef event {0} not found")]
    EventNotFound(String),

    #[error("Chef event {0} has no template product")]
    TemplateMissing(String),

    #[error("Template product {0} not found")]
    TemplateNotFound(String),

    #[error("Inventory item {0} not found")]
    InventoryItemMissing(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Inventory error: {0}")]
    Inventory(String),

    #[error("Link error: {0}")]
    Link(String),
}

impl From<AcceptError> for AppError {
    fn from(err: AcceptError) -> Self {
        match err {
            AcceptError::EventNotFound(id) => AppError::not_found(format!("Chef event {}", id)),
            AcceptError::TemplateNotFound(id) => {
                AppError::not_found(format!("Template product {}", id))
            }
            AcceptError::TemplateMissing(_)
            | AcceptError::InventoryItemMissing(_)
            | AcceptError::Store(_)
            | AcceptError::Catalog(_)
            | AcceptError::Inventory(_)
            | AcceptError::Link(_) => AppError::internal(err.to_string()),
        }
    }
}

pub type StepResult<T> = Result<T, AcceptError>;

/// Booking record reads and the confirm transition
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn load(&self, id: &str) -> StepResult<Option<ChefEvent>>;
    async fn confirm(&self, id: &str, product: RecordId) -> StepResult<ChefEvent>;
}

/// Product reads, event-product creation, delete for compensation
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn load(&self, id: &RecordId) -> StepResult<Option<Product>>;
    async fn create_event_product(&self, product: Product) -> StepResult<Product>;
    async fn delete_product(&self, id: &RecordId) -> StepResult<()>;
}

/// Stock locations, items, levels and the seeded singletons
#[async_trait]
pub trait InventoryAllocator: Send + Sync {
    async fn create_location(&self, name: String) -> StepResult<StockLocation>;
    async fn delete_location(&self, id: &RecordId) -> StepResult<()>;
    async fn find_item_by_sku(&self, sku: &str) -> StepResult<Option<InventoryItem>>;
    async fn create_level(
        &self,
        item: RecordId,
        location: RecordId,
        stocked: i64,
    ) -> StepResult<InventoryLevel>;
    async fn delete_level(&self, id: &RecordId) -> StepResult<()>;
    async fn default_sales_channel(&self) -> StepResult<SalesChannel>;
    async fn manual_provider(&self) -> StepResult<FulfillmentProvider>;
}

/// The generic loosely-typed association mechanism
#[async_trait]
pub trait RemoteLinks: Send + Sync {
    async fn link(&self, from: RecordId, to: RecordId, kind: &str) -> StepResult<()>;
    async fn unlink(&self, from: RecordId, to: RecordId, kind: &str) -> StepResult<()>;
}

// =============================================================================
// Production implementations over the repositories
// =============================================================================

pub struct SurrealEventStore {
    repo: ChefEventRepository,
}

impl SurrealEventStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: ChefEventRepository::new(db),
        }
    }
}

#[async_trait]
impl EventStore for SurrealEventStore {
    async fn load(&self, id: &str) -> StepResult<Option<ChefEvent>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| AcceptError::Store(e.to_string()))
    }

    async fn confirm(&self, id: &str, product: RecordId) -> StepResult<ChefEvent> {
        self.repo.confirm(id, product).await.map_err(|e| match e {
            RepoError::NotFound(_) => AcceptError::EventNotFound(id.to_string()),
            other => AcceptError::Store(other.to_string()),
        })
    }
}

pub struct SurrealCatalog {
    repo: ProductRepository,
}

impl SurrealCatalog {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: ProductRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductCatalog for SurrealCatalog {
    async fn load(&self, id: &RecordId) -> StepResult<Option<Product>> {
        self.repo
            .find_by_id(&id.to_string())
            .await
            .map_err(|e| AcceptError::Catalog(e.to_string()))
    }

    async fn create_event_product(&self, product: Product) -> StepResult<Product> {
        self.repo
            .create_event_product(product)
            .await
            .map_err(|e| AcceptError::Catalog(e.to_string()))
    }

    async fn delete_product(&self, id: &RecordId) -> StepResult<()> {
        self.repo
            .delete(&id.to_string())
            .await
            .map(|_| ())
            .map_err(|e| AcceptError::Catalog(e.to_string()))
    }
}

pub struct SurrealInventory {
    repo: InventoryRepository,
}

impl SurrealInventory {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: InventoryRepository::new(db),
        }
    }
}

#[async_trait]
impl InventoryAllocator for SurrealInventory {
    async fn create_location(&self, name: String) -> StepResult<StockLocation> {
        self.repo
            .create_stock_location(name, None)
            .await
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }

    async fn delete_location(&self, id: &RecordId) -> StepResult<()> {
        self.repo
            .delete_stock_location(&id.to_string())
            .await
            .map(|_| ())
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }

    async fn find_item_by_sku(&self, sku: &str) -> StepResult<Option<InventoryItem>> {
        self.repo
            .find_item_by_sku(sku)
            .await
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }

    async fn create_level(
        &self,
        item: RecordId,
        location: RecordId,
        stocked: i64,
    ) -> StepResult<InventoryLevel> {
        self.repo
            .create_level(item, location, stocked)
            .await
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }

    async fn delete_level(&self, id: &RecordId) -> StepResult<()> {
        self.repo
            .delete_level(&id.to_string())
            .await
            .map(|_| ())
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }

    async fn default_sales_channel(&self) -> StepResult<SalesChannel> {
        self.repo
            .ensure_default_sales_channel()
            .await
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }

    async fn manual_provider(&self) -> StepResult<FulfillmentProvider> {
        self.repo
            .ensure_manual_provider()
            .await
            .map_err(|e| AcceptError::Inventory(e.to_string()))
    }
}

pub struct SurrealLinks {
    repo: LinkRepository,
}

impl SurrealLinks {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: LinkRepository::new(db),
        }
    }
}

#[async_trait]
impl RemoteLinks for SurrealLinks {
    async fn link(&self, from: RecordId, to: RecordId, kind: &str) -> StepResult<()> {
        self.repo
            .link(from, to, kind)
            .await
            .map_err(|e| AcceptError::Link(e.to_string()))
    }

    async fn unlink(&self, from: RecordId, to: RecordId, kind: &str) -> StepResult<()> {
        self.repo
            .unlink(from, to, kind)
            .await
            .map_err(|e| AcceptError::Link(e.to_string()))
    }
}
