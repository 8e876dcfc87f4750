//! Event acceptance choreography
//!
//! The one place an approval turns into catalog state: product, stock
//! location, inventory, links, then the status flip and the customer
//! email. Runs as an ordered sequence of typed steps; every mutating
//! step records its compensation and the saga unwinds them in reverse
//! on the first failure, so a failed acceptance leaves no orphaned
//! catalog artifacts behind.
//!
//! Acceptance is not guarded against re-runs: accepting an already
//! confirmed event builds a second product. Known gap, pinned by a
//! regression test until a proper guard ships.

pub mod collaborators;
pub mod display;
pub mod memory;

use std::sync::Arc;

use surrealdb::RecordId;

use crate::db::models::{ChefEvent, EmbeddedVariant, EventProductMeta, Product, ProductStatus};
use crate::db::repository::link::kind;
use crate::notify::{Notifier, TemplateData, TemplateKind};
use display::{EventDisplay, event_product_title};

pub use collaborators::{
    AcceptError, EventStore, InventoryAllocator, ProductCatalog, RemoteLinks, StepResult,
    SurrealCatalog, SurrealEventStore, SurrealInventory, SurrealLinks,
};

/// Variant title on every event product
const TICKET_VARIANT_TITLE: &str = "Ticket";

/// Sku prefix for event products; the inventory lookup step finds the
/// item by this convention.
const EVENT_SKU_PREFIX: &str = "EVENT-";

/// Result of a completed acceptance run
#[derive(Debug, Clone)]
pub struct AcceptanceOutcome {
    pub event: ChefEvent,
    pub product: Product,
}

/// Recorded undo for one completed step, applied in reverse order
enum Compensation {
    DeleteProduct(RecordId),
    DeleteLocation(RecordId),
    DeleteLevel(RecordId),
    Unlink {
        from: RecordId,
        to: RecordId,
        kind: &'static str,
    },
}

/// The acceptance saga. Collaborators are injected at construction;
/// handlers build one per request over the shared database handle.
pub struct AcceptanceSaga {
    events: Arc<dyn EventStore>,
    catalog: Arc<dyn ProductCatalog>,
    inventory: Arc<dyn InventoryAllocator>,
    links: Arc<dyn RemoteLinks>,
    notifier: Arc<dyn Notifier>,
}

impl AcceptanceSaga {
    pub fn new(
        events: Arc<dyn EventStore>,
        catalog: Arc<dyn ProductCatalog>,
        inventory: Arc<dyn InventoryAllocator>,
        links: Arc<dyn RemoteLinks>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            events,
            catalog,
            inventory,
            links,
            notifier,
        }
    }

    /// Run the full choreography for one event id.
    pub async fn accept(&self, event_id: &str) -> StepResult<AcceptanceOutcome> {
        let mut compensations: Vec<Compensation> = Vec::new();
        match self.run(event_id, &mut compensations).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::error!(event = event_id, "Acceptance failed, compensating: {}", err);
                self.unwind(compensations).await;
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        event_id: &str,
        compensations: &mut Vec<Compensation>,
    ) -> StepResult<AcceptanceOutcome> {
        // 1. Load the event
        let event = self
            .events
            .load(event_id)
            .await?
            .ok_or_else(|| AcceptError::EventNotFound(event_id.to_string()))?;

        // 2. Load the template product it was requested against
        let template_id = event
            .template_product
            .clone()
            .ok_or_else(|| AcceptError::TemplateMissing(event_id.to_string()))?;
        let template = self
            .catalog
            .load(&template_id)
            .await?
            .ok_or_else(|| AcceptError::TemplateNotFound(template_id.to_string()))?;

        // 3. Display strings
        let display = EventDisplay::from_event(&event);

        // 4-5. Build and create the sellable product (+ inventory item)
        let definition = build_event_product(&event, &template, &display)?;
        let product = self.catalog.create_event_product(definition).await?;
        let product_id = product
            .id
            .clone()
            .ok_or_else(|| AcceptError::Catalog("created product has no id".to_string()))?;
        compensations.push(Compensation::DeleteProduct(product_id.clone()));

        // 6. A dedicated stock location named after the product
        let location = self.inventory.create_location(product.title.clone()).await?;
        let location_id = location
            .id
            .clone()
            .ok_or_else(|| AcceptError::Inventory("created location has no id".to_string()))?;
        compensations.push(Compensation::DeleteLocation(location_id.clone()));

        // 7. Default sales channel serves the new location
        let channel = self.inventory.default_sales_channel().await?;
        let channel_id = channel
            .id
            .clone()
            .ok_or_else(|| AcceptError::Inventory("sales channel has no id".to_string()))?;
        self.links
            .link(channel_id.clone(), location_id.clone(), kind::CHANNEL_LOCATION)
            .await?;
        compensations.push(Compensation::Unlink {
            from: channel_id,
            to: location_id.clone(),
            kind: kind::CHANNEL_LOCATION,
        });

        // 8. Stock the location with one ticket per guest
        let sku = event_sku(&event)?;
        let item = self
            .inventory
            .find_item_by_sku(&sku)
            .await?
            .ok_or_else(|| AcceptError::InventoryItemMissing(sku.clone()))?;
        let item_id = item
            .id
            .clone()
            .ok_or_else(|| AcceptError::Inventory("inventory item has no id".to_string()))?;
        let level = self
            .inventory
            .create_level(item_id, location_id.clone(), event.party_size)
            .await?;
        if let Some(level_id) = level.id.clone() {
            compensations.push(Compensation::DeleteLevel(level_id));
        }

        // 9. Manual fulfillment serves the location
        let provider = self.inventory.manual_provider().await?;
        let provider_id = provider
            .id
            .clone()
            .ok_or_else(|| AcceptError::Inventory("fulfillment provider has no id".to_string()))?;
        self.links
            .link(location_id.clone(), provider_id.clone(), kind::LOCATION_FULFILLMENT)
            .await?;
        compensations.push(Compensation::Unlink {
            from: location_id,
            to: provider_id,
            kind: kind::LOCATION_FULFILLMENT,
        });

        // 10. Tie the template's menu to the new product
        if let Some(menu_id) = template.menu.clone() {
            self.links
                .link(menu_id.clone(), product_id.clone(), kind::MENU_PRODUCT)
                .await?;
            compensations.push(Compensation::Unlink {
                from: menu_id,
                to: product_id.clone(),
                kind: kind::MENU_PRODUCT,
            });
        }

        // 11. Tie the event to the new product
        let event_record = event
            .id
            .clone()
            .ok_or_else(|| AcceptError::Store("event has no id".to_string()))?;
        self.links
            .link(event_record.clone(), product_id.clone(), kind::EVENT_PRODUCT)
            .await?;
        compensations.push(Compensation::Unlink {
            from: event_record,
            to: product_id.clone(),
            kind: kind::EVENT_PRODUCT,
        });

        // 12. Flip the booking to confirmed
        let confirmed = self.events.confirm(event_id, product_id.clone()).await?;

        // 13. Tell the customer. Never fatal, never compensated.
        let mut data = TemplateData::for_event(confirmed.clone());
        data.product_title = Some(product.title.clone());
        data.product_id = Some(product_id.key().to_string());
        self.notifier
            .dispatch(TemplateKind::AcceptanceConfirmation.name(), data);

        Ok(AcceptanceOutcome {
            event: confirmed,
            product,
        })
    }

    /// Best-effort reverse unwind; failures are logged and skipped.
    async fn unwind(&self, compensations: Vec<Compensation>) {
        for compensation in compensations.into_iter().rev() {
            let result = match compensation {
                Compensation::DeleteProduct(id) => self.catalog.delete_product(&id).await,
                Compensation::DeleteLocation(id) => self.inventory.delete_location(&id).await,
                Compensation::DeleteLevel(id) => self.inventory.delete_level(&id).await,
                Compensation::Unlink { from, to, kind } => self.links.unlink(from, to, kind).await,
            };
            if let Err(e) = result {
                tracing::warn!("Compensation failed (continuing): {}", e);
            }
        }
    }
}

/// Sku of the ticket item for one event
fn event_sku(event: &ChefEvent) -> StepResult<String> {
    let id = event
        .id
        .as_ref()
        .ok_or_else(|| AcceptError::Store("event has no id".to_string()))?;
    Ok(format!("{}{}", EVENT_SKU_PREFIX, id.key()))
}

/// Assemble the product definition for an accepted event.
fn build_event_product(
    event: &ChefEvent,
    template: &Product,
    display: &EventDisplay,
) -> StepResult<Product> {
    if event.party_size <= 0 {
        return Err(AcceptError::Catalog(format!(
            "party_size {} cannot price a ticket",
            event.party_size
        )));
    }
    let template_id = template
        .id
        .clone()
        .ok_or_else(|| AcceptError::Catalog("template product has no id".to_string()))?;
    let event_id = event
        .id
        .clone()
        .ok_or_else(|| AcceptError::Store("event has no id".to_string()))?;
    let currency_code = template
        .ticket_variant()
        .map(|v| v.currency_code.clone())
        .unwrap_or_else(|| "usd".to_string());

    Ok(Product {
        id: None,
        title: event_product_title(&template.title, display),
        description: template.description.clone(),
        status: ProductStatus::Published,
        menu: None,
        variants: vec![EmbeddedVariant {
            title: TICKET_VARIANT_TITLE.to_string(),
            sku: event_sku(event)?,
            price_cents: event.total_price_cents / event.party_size,
            currency_code,
        }],
        event_meta: Some(EventProductMeta {
            chef_event: event_id,
            template_product: template_id,
            event_type: event.event_type,
            event_date: event.requested_date.clone(),
            event_time: event.requested_time.clone(),
            party_size: event.party_size,
        }),
        created_at: None,
        updated_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::memory::{MemoryPlatform, RecordingNotifier};
    use super::*;
    use shared::models::{EventStatus, EventType, LocationType};

    fn pending_event(template_key: Option<&str>) -> ChefEvent {
        ChefEvent {
            id: None,
            status: EventStatus::Pending,
            requested_date: "2026-09-15".to_string(),
            requested_time: "18:30".to_string(),
            party_size: 4,
            event_type: EventType::CookingClass,
            location_type: LocationType::CustomerLocation,
            location_address: "12 Long Street, Springfield".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            notes: None,
            special_requirements: None,
            total_price_cents: 47_996,
            deposit_paid: false,
            estimated_duration_minutes: 180,
            assigned_chef_id: None,
            template_product: template_key
                .map(|k| surrealdb::RecordId::from_table_key("product", k)),
            product: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn template_product(menu_key: Option<&str>) -> Product {
        Product {
            id: None,
            title: "Tuscan Table".to_string(),
            description: Some("Four courses from the hills of Tuscany".to_string()),
            status: ProductStatus::Published,
            menu: menu_key.map(|k| surrealdb::RecordId::from_table_key("menu", k)),
            variants: vec![EmbeddedVariant {
                title: "Per Guest".to_string(),
                sku: "TPL-tuscan".to_string(),
                price_cents: 11_999,
                currency_code: "usd".to_string(),
            }],
            event_meta: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn saga(
        platform: &Arc<MemoryPlatform>,
        notifier: &Arc<RecordingNotifier>,
    ) -> AcceptanceSaga {
        AcceptanceSaga::new(
            platform.clone(),
            platform.clone(),
            platform.clone(),
            platform.clone(),
            notifier.clone(),
        )
    }

    #[tokio::test]
    async fn accept_confirms_and_allocates() {
        let platform = Arc::new(MemoryPlatform::new());
        let notifier = Arc::new(RecordingNotifier::default());
        platform.insert_product("tpl1", template_product(Some("m1")));
        platform.insert_event("ev1", pending_event(Some("tpl1")));

        let outcome = saga(&platform, &notifier).accept("ev1").await.unwrap();

        assert_eq!(outcome.event.status, EventStatus::Confirmed);
        assert!(outcome.event.product.is_some());

        // One ticket variant priced total / party_size
        let variant = outcome.product.ticket_variant().unwrap();
        assert_eq!(variant.price_cents, 11_999);
        assert_eq!(variant.sku, "EVENT-ev1");

        // Inventory level stocked to the party size
        let levels = platform.levels.lock().unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels.values().next().unwrap().stocked, 4);
        drop(levels);

        // channel-location, location-fulfillment, menu-product, event-product
        assert_eq!(platform.link_count(), 4);

        let dispatched = notifier.dispatched.lock().unwrap();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].0, "acceptance_confirmation");
    }

    #[tokio::test]
    async fn title_and_metadata_reference_the_origin() {
        let platform = Arc::new(MemoryPlatform::new());
        let notifier = Arc::new(RecordingNotifier::default());
        platform.insert_product("tpl1", template_product(None));
        platform.insert_event("ev1", pending_event(Some("tpl1")));

        let outcome = saga(&platform, &notifier).accept("ev1").await.unwrap();

        assert!(outcome.product.title.starts_with("Tuscan Table Cooking Class"));
        let meta = outcome.product.event_meta.as_ref().unwrap();
        assert_eq!(meta.party_size, 4);
        assert_eq!(meta.event_date, "2026-09-15");
        // No menu on the template: only 3 links
        assert_eq!(platform.link_count(), 3);
    }

    #[tokio::test]
    async fn double_accept_creates_two_products() {
        // Pins the known-undesirable behavior: there is no idempotency
        // guard, so a second accept of a confirmed event builds a
        // second product.
        let platform = Arc::new(MemoryPlatform::new());
        let notifier = Arc::new(RecordingNotifier::default());
        platform.insert_product("tpl1", template_product(Some("m1")));
        platform.insert_event("ev1", pending_event(Some("tpl1")));

        let s = saga(&platform, &notifier);
        s.accept("ev1").await.unwrap();
        s.accept("ev1").await.unwrap();

        // template + two event products
        assert_eq!(platform.product_count(), 3);
        assert_eq!(platform.location_count(), 2);
    }

    #[tokio::test]
    async fn failure_mid_flight_compensates_everything() {
        let platform = Arc::new(MemoryPlatform::new());
        let notifier = Arc::new(RecordingNotifier::default());
        platform.insert_product("tpl1", template_product(Some("m1")));
        platform.insert_event("ev1", pending_event(Some("tpl1")));
        platform.fail_at("create_level");

        let err = saga(&platform, &notifier).accept("ev1").await.unwrap_err();
        assert!(err.to_string().contains("injected failure"));

        // Product and location rolled back, links removed, event untouched
        assert_eq!(platform.product_count(), 1); // template only
        assert_eq!(platform.location_count(), 0);
        assert_eq!(platform.level_count(), 0);
        assert_eq!(platform.link_count(), 0);
        let events = platform.events.lock().unwrap();
        assert_eq!(events.get("ev1").unwrap().status, EventStatus::Pending);
        drop(events);
        assert!(notifier.dispatched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let platform = Arc::new(MemoryPlatform::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let err = saga(&platform, &notifier).accept("ghost").await.unwrap_err();
        assert!(matches!(err, AcceptError::EventNotFound(_)));
    }

    #[tokio::test]
    async fn event_without_template_cannot_be_accepted() {
        let platform = Arc::new(MemoryPlatform::new());
        let notifier = Arc::new(RecordingNotifier::default());
        platform.insert_event("ev1", pending_event(None));

        let err = saga(&platform, &notifier).accept("ev1").await.unwrap_err();
        assert!(matches!(err, AcceptError::TemplateMissing(_)));
        assert_eq!(platform.product_count(), 0);
    }
}
