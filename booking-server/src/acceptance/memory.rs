//! In-memory acceptance platform
//!
//! Swap-in implementations of every collaborator trait, backed by plain
//! maps. Used by the saga tests and the end-to-end flow tests; supports
//! injecting a failure at a named operation to exercise compensation.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use surrealdb::RecordId;

use crate::db::models::{
    ChefEvent, FulfillmentProvider, InventoryItem, InventoryLevel, Product, SalesChannel,
    StockLocation,
};
use crate::notify::{Notifier, TemplateData};

use super::collaborators::{
    AcceptError, EventStore, InventoryAllocator, ProductCatalog, RemoteLinks, StepResult,
};

/// Everything the saga touches, in memory
#[derive(Default)]
pub struct MemoryPlatform {
    pub events: Mutex<HashMap<String, ChefEvent>>,
    pub products: Mutex<HashMap<String, Product>>,
    pub items: Mutex<HashMap<String, InventoryItem>>,
    pub locations: Mutex<HashMap<String, StockLocation>>,
    pub levels: Mutex<HashMap<String, InventoryLevel>>,
    pub links: Mutex<Vec<(RecordId, RecordId, String)>>,
    fail_at: Mutex<Option<&'static str>>,
    counter: AtomicU64,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the named operation fail on its next call
    pub fn fail_at(&self, op: &'static str) {
        *self.fail_at.lock().unwrap() = Some(op);
    }

    fn check_fail(&self, op: &'static str) -> StepResult<()> {
        if *self.fail_at.lock().unwrap() == Some(op) {
            return Err(AcceptError::Inventory(format!("injected failure at {op}")));
        }
        Ok(())
    }

    fn next_key(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.counter.fetch_add(1, Ordering::SeqCst))
    }

    /// Insert an event under a fixed key, assigning its record id
    pub fn insert_event(&self, key: &str, mut event: ChefEvent) -> ChefEvent {
        event.id = Some(RecordId::from_table_key("chef_event", key));
        self.events
            .lock()
            .unwrap()
            .insert(key.to_string(), event.clone());
        event
    }

    /// Insert a template product under a fixed key
    pub fn insert_product(&self, key: &str, mut product: Product) -> Product {
        product.id = Some(RecordId::from_table_key("product", key));
        self.products
            .lock()
            .unwrap()
            .insert(key.to_string(), product.clone());
        product
    }

    pub fn product_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.lock().unwrap().len()
    }

    pub fn level_count(&self) -> usize {
        self.levels.lock().unwrap().len()
    }

    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

fn key_of(id: &RecordId) -> String {
    id.key().to_string()
}

#[async_trait]
impl EventStore for MemoryPlatform {
    async fn load(&self, id: &str) -> StepResult<Option<ChefEvent>> {
        let key = id.rsplit(':').next().unwrap_or(id);
        Ok(self.events.lock().unwrap().get(key).cloned())
    }

    async fn confirm(&self, id: &str, product: RecordId) -> StepResult<ChefEvent> {
        self.check_fail("confirm")?;
        let key = id.rsplit(':').next().unwrap_or(id).to_string();
        let mut events = self.events.lock().unwrap();
        let event = events
            .get_mut(&key)
            .ok_or_else(|| AcceptError::EventNotFound(key.clone()))?;
        event.status = shared::models::EventStatus::Confirmed;
        event.product = Some(product);
        Ok(event.clone())
    }
}

#[async_trait]
impl ProductCatalog for MemoryPlatform {
    async fn load(&self, id: &RecordId) -> StepResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(&key_of(id)).cloned())
    }

    async fn create_event_product(&self, mut product: Product) -> StepResult<Product> {
        self.check_fail("create_event_product")?;
        let key = self.next_key("p");
        let id = RecordId::from_table_key("product", key.as_str());
        product.id = Some(id.clone());
        self.products
            .lock()
            .unwrap()
            .insert(key, product.clone());

        if let Some(variant) = product.variants.first() {
            let item_key = self.next_key("i");
            self.items.lock().unwrap().insert(
                item_key.clone(),
                InventoryItem {
                    id: Some(RecordId::from_table_key("inventory_item", item_key.as_str())),
                    sku: variant.sku.clone(),
                    product: id,
                },
            );
        }
        Ok(product)
    }

    async fn delete_product(&self, id: &RecordId) -> StepResult<()> {
        let key = key_of(id);
        self.products.lock().unwrap().remove(&key);
        self.items
            .lock()
            .unwrap()
            .retain(|_, item| key_of(&item.product) != key);
        Ok(())
    }
}

#[async_trait]
impl InventoryAllocator for MemoryPlatform {
    async fn create_location(&self, name: String) -> StepResult<StockLocation> {
        self.check_fail("create_location")?;
        let key = self.next_key("l");
        let location = StockLocation {
            id: Some(RecordId::from_table_key("stock_location", key.as_str())),
            name,
            address: None,
            created_at: None,
        };
        self.locations
            .lock()
            .unwrap()
            .insert(key, location.clone());
        Ok(location)
    }

    async fn delete_location(&self, id: &RecordId) -> StepResult<()> {
        self.locations.lock().unwrap().remove(&key_of(id));
        Ok(())
    }

    async fn find_item_by_sku(&self, sku: &str) -> StepResult<Option<InventoryItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .find(|item| item.sku == sku)
            .cloned())
    }

    async fn create_level(
        &self,
        item: RecordId,
        location: RecordId,
        stocked: i64,
    ) -> StepResult<InventoryLevel> {
        self.check_fail("create_level")?;
        let key = self.next_key("v");
        let level = InventoryLevel {
            id: Some(RecordId::from_table_key("inventory_level", key.as_str())),
            item,
            location,
            stocked,
        };
        self.levels.lock().unwrap().insert(key, level.clone());
        Ok(level)
    }

    async fn delete_level(&self, id: &RecordId) -> StepResult<()> {
        self.levels.lock().unwrap().remove(&key_of(id));
        Ok(())
    }

    async fn default_sales_channel(&self) -> StepResult<SalesChannel> {
        Ok(SalesChannel {
            id: Some(RecordId::from_table_key("sales_channel", "default")),
            name: "Default Sales Channel".to_string(),
            is_default: true,
        })
    }

    async fn manual_provider(&self) -> StepResult<FulfillmentProvider> {
        Ok(FulfillmentProvider {
            id: Some(RecordId::from_table_key(
                "fulfillment_provider",
                "manual_manual",
            )),
            name: "Manual Fulfillment".to_string(),
        })
    }
}

#[async_trait]
impl RemoteLinks for MemoryPlatform {
    async fn link(&self, from: RecordId, to: RecordId, kind: &str) -> StepResult<()> {
        self.check_fail("link")?;
        self.links
            .lock()
            .unwrap()
            .push((from, to, kind.to_string()));
        Ok(())
    }

    async fn unlink(&self, from: RecordId, to: RecordId, kind: &str) -> StepResult<()> {
        self.links
            .lock()
            .unwrap()
            .retain(|(f, t, k)| !(f == &from && t == &to && k == kind));
        Ok(())
    }
}

/// Notifier that records dispatches instead of sending
#[derive(Default)]
pub struct RecordingNotifier {
    pub dispatched: Mutex<Vec<(String, TemplateData)>>,
}

impl Notifier for RecordingNotifier {
    fn dispatch(&self, template: &str, data: TemplateData) {
        self.dispatched
            .lock()
            .unwrap()
            .push((template.to_string(), data));
    }
}
