//! Inventory Repository
//!
//! Stock locations, inventory items/levels and the seeded singleton rows
//! (default sales channel, manual fulfillment provider).

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{FulfillmentProvider, InventoryItem, InventoryLevel, SalesChannel, StockLocation};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const LOCATION_TABLE: &str = "stock_location";
const LEVEL_TABLE: &str = "inventory_level";
const CHANNEL_TABLE: &str = "sales_channel";
const PROVIDER_TABLE: &str = "fulfillment_provider";

/// Record key of the only fulfillment provider this platform knows
pub const MANUAL_PROVIDER_KEY: &str = "manual_manual";

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    // =========================================================================
    // Stock locations
    // =========================================================================

    pub async fn create_stock_location(
        &self,
        name: String,
        address: Option<String>,
    ) -> RepoResult<StockLocation> {
        let location = StockLocation {
            id: None,
            name,
            address,
            created_at: Some(now_millis()),
        };
        let created: Option<StockLocation> = self
            .base
            .db()
            .create(LOCATION_TABLE)
            .content(location)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create stock location".to_string()))
    }

    pub async fn delete_stock_location(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<StockLocation> = self
            .base
            .db()
            .delete((LOCATION_TABLE, record_key(LOCATION_TABLE, id)))
            .await?;
        Ok(deleted.is_some())
    }

    // =========================================================================
    // Inventory items and levels
    // =========================================================================

    /// Look up the item created alongside an event product by sku convention
    pub async fn find_item_by_sku(&self, sku: &str) -> RepoResult<Option<InventoryItem>> {
        let items: Vec<InventoryItem> = self
            .base
            .db()
            .query("SELECT * FROM inventory_item WHERE sku = $sku LIMIT 1")
            .bind(("sku", sku.to_string()))
            .await?
            .take(0)?;
        Ok(items.into_iter().next())
    }

    pub async fn create_level(
        &self,
        item: RecordId,
        location: RecordId,
        stocked: i64,
    ) -> RepoResult<InventoryLevel> {
        let level = InventoryLevel {
            id: None,
            item,
            location,
            stocked,
        };
        let created: Option<InventoryLevel> =
            self.base.db().create(LEVEL_TABLE).content(level).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create inventory level".to_string()))
    }

    pub async fn delete_level(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<InventoryLevel> = self
            .base
            .db()
            .delete((LEVEL_TABLE, record_key(LEVEL_TABLE, id)))
            .await?;
        Ok(deleted.is_some())
    }

    /// Levels tracked at one location.
    ///
    /// Item/location references are stored as "table:key" strings, so
    /// lookups bind the string form.
    pub async fn find_levels_at(&self, location: RecordId) -> RepoResult<Vec<InventoryLevel>> {
        let levels: Vec<InventoryLevel> = self
            .base
            .db()
            .query("SELECT * FROM inventory_level WHERE location = $location")
            .bind(("location", location.to_string()))
            .await?
            .take(0)?;
        Ok(levels)
    }

    /// Levels tracking one item
    pub async fn find_levels_for_item(&self, item: RecordId) -> RepoResult<Vec<InventoryLevel>> {
        let levels: Vec<InventoryLevel> = self
            .base
            .db()
            .query("SELECT * FROM inventory_level WHERE item = $item")
            .bind(("item", item.to_string()))
            .await?
            .take(0)?;
        Ok(levels)
    }

    // =========================================================================
    // Seeded singletons
    // =========================================================================

    /// The default sales channel; created on first use
    pub async fn ensure_default_sales_channel(&self) -> RepoResult<SalesChannel> {
        let existing: Vec<SalesChannel> = self
            .base
            .db()
            .query("SELECT * FROM sales_channel WHERE is_default = true LIMIT 1")
            .await?
            .take(0)?;
        if let Some(channel) = existing.into_iter().next() {
            return Ok(channel);
        }

        let channel = SalesChannel {
            id: None,
            name: "Default Sales Channel".to_string(),
            is_default: true,
        };
        let created: Option<SalesChannel> =
            self.base.db().create(CHANNEL_TABLE).content(channel).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create sales channel".to_string()))
    }

    /// The fixed manual fulfillment provider; created on first use
    pub async fn ensure_manual_provider(&self) -> RepoResult<FulfillmentProvider> {
        let existing: Option<FulfillmentProvider> = self
            .base
            .db()
            .select((PROVIDER_TABLE, MANUAL_PROVIDER_KEY))
            .await?;
        if let Some(provider) = existing {
            return Ok(provider);
        }

        let provider = FulfillmentProvider {
            id: None,
            name: "Manual Fulfillment".to_string(),
        };
        let created: Option<FulfillmentProvider> = self
            .base
            .db()
            .create((PROVIDER_TABLE, MANUAL_PROVIDER_KEY))
            .content(provider)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create fulfillment provider".to_string()))
    }
}
