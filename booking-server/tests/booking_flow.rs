//! End-to-end booking flow over a real embedded database:
//! template curation, request intake, conflict check, acceptance.

use std::sync::Arc;

use booking_server::acceptance::memory::RecordingNotifier;
use booking_server::acceptance::{
    AcceptanceSaga, SurrealCatalog, SurrealEventStore, SurrealInventory, SurrealLinks,
};
use booking_server::booking::conflict::ConflictChecker;
use booking_server::booking::{IntakeService, PricingSource};
use booking_server::db::DbService;
use booking_server::db::repository::{
    InventoryRepository, LinkRepository, MenuRepository, ProductRepository, link,
};
use chrono::{Duration, Utc};
use shared::models::{
    ChefEventCreate, CourseInput, DishInput, EventStatus, EventType, LocationType, MenuCreate,
    TemplateProductCreate,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tempfile::TempDir;

struct TestEnv {
    _dir: TempDir,
    db: Surreal<Db>,
    notifier: Arc<RecordingNotifier>,
}

impl TestEnv {
    async fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let service = DbService::new(&dir.path().join("db"))
            .await
            .expect("open database");
        Self {
            _dir: dir,
            db: service.db,
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    fn intake(&self, pricing: PricingSource) -> IntakeService {
        IntakeService::new(self.db.clone(), pricing, self.notifier.clone())
    }

    fn saga(&self) -> AcceptanceSaga {
        AcceptanceSaga::new(
            Arc::new(SurrealEventStore::new(self.db.clone())),
            Arc::new(SurrealCatalog::new(self.db.clone())),
            Arc::new(SurrealInventory::new(self.db.clone())),
            Arc::new(SurrealLinks::new(self.db.clone())),
            self.notifier.clone(),
        )
    }

    /// Curate a menu and a template product referencing it
    async fn seed_template(&self) -> String {
        let menus = MenuRepository::new(self.db.clone());
        let menu = menus
            .create(MenuCreate {
                name: "Tuscan Table".to_string(),
                description: Some("Four courses from the hills of Tuscany".to_string()),
                courses: vec![CourseInput {
                    name: "Primi".to_string(),
                    description: None,
                    dishes: vec![DishInput {
                        name: "Pici cacio e pepe".to_string(),
                        description: None,
                        ingredients: Vec::new(),
                    }],
                }],
            })
            .await
            .expect("create menu");

        let products = ProductRepository::new(self.db.clone());
        let template = products
            .create_template(TemplateProductCreate {
                title: "Tuscan Table".to_string(),
                description: Some("Four courses from the hills of Tuscany".to_string()),
                menu_id: menu.id.as_ref().map(|id| id.to_string()),
                ticket_price_cents: 11_999,
                currency_code: None,
            })
            .await
            .expect("create template");
        template.id.expect("template id").to_string()
    }
}

fn request(template_id: Option<String>, date: &str, time: &str) -> ChefEventCreate {
    ChefEventCreate {
        requested_date: date.to_string(),
        requested_time: time.to_string(),
        party_size: 4,
        event_type: EventType::CookingClass,
        template_product_id: template_id,
        location_type: LocationType::CustomerLocation,
        location_address: "12 Long Street, Springfield".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        notes: None,
        special_requirements: None,
    }
}

fn bookable_date() -> String {
    (Utc::now().date_naive() + Duration::days(30)).to_string()
}

#[tokio::test]
async fn intake_prices_and_persists_a_pending_event() {
    let env = TestEnv::new().await;
    let template_id = env.seed_template().await;

    let event = env
        .intake(PricingSource::Fixed)
        .submit(request(Some(template_id), &bookable_date(), "18:30"))
        .await
        .expect("intake");

    assert_eq!(event.status, EventStatus::Pending);
    assert_eq!(event.total_price_cents, 47_996);
    assert!(!event.deposit_paid);
    assert_eq!(event.estimated_duration_minutes, 180);

    // Customer confirmation + chef alert went out
    let dispatched = env.notifier.dispatched.lock().unwrap();
    let names: Vec<&str> = dispatched.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["request_confirmation", "chef_alert"]);
}

#[tokio::test]
async fn conflict_is_exact_match_only() {
    let env = TestEnv::new().await;
    let date = bookable_date();

    env.intake(PricingSource::Fixed)
        .submit(request(None, &date, "18:30"))
        .await
        .expect("intake");

    let conflicts = ConflictChecker::new(env.db.clone());
    assert!(conflicts.has_conflict(&date, "18:30").await.unwrap());
    assert!(!conflicts.has_conflict(&date, "18:31").await.unwrap());
    assert!(!conflicts.has_conflict(&date, "18:29").await.unwrap());

    // Cancelled events release the slot
    env.db
        .query("UPDATE chef_event SET status = 'cancelled'")
        .await
        .unwrap();
    assert!(!conflicts.has_conflict(&date, "18:30").await.unwrap());
}

#[tokio::test]
async fn second_request_is_flagged_but_not_blocked() {
    let env = TestEnv::new().await;
    let date = bookable_date();
    let intake = env.intake(PricingSource::Fixed);

    intake
        .submit(request(None, &date, "18:30"))
        .await
        .expect("first request");
    intake
        .submit(request(None, &date, "18:30"))
        .await
        .expect("second request still goes through");

    let dispatched = env.notifier.dispatched.lock().unwrap();
    let chef_alerts: Vec<_> = dispatched
        .iter()
        .filter(|(n, _)| n == "chef_alert")
        .collect();
    assert_eq!(chef_alerts.len(), 2);
    assert!(!chef_alerts[0].1.has_conflict);
    assert!(chef_alerts[1].1.has_conflict);
}

#[tokio::test]
async fn acceptance_builds_the_full_catalog_side() {
    let env = TestEnv::new().await;
    let template_id = env.seed_template().await;

    let event = env
        .intake(PricingSource::Fixed)
        .submit(request(Some(template_id), &bookable_date(), "18:30"))
        .await
        .expect("intake");
    let event_id = event.id.clone().expect("event id");

    let outcome = env
        .saga()
        .accept(&event_id.to_string())
        .await
        .expect("accept");

    // Status flipped, product linked back
    assert_eq!(outcome.event.status, EventStatus::Confirmed);
    let product_id = outcome.product.id.clone().expect("product id");
    assert_eq!(outcome.event.product.as_ref(), Some(&product_id));

    // One ticket variant priced per guest
    let variant = outcome.product.ticket_variant().expect("variant");
    assert_eq!(variant.price_cents, 11_999);
    assert_eq!(variant.sku, format!("EVENT-{}", event_id.key()));

    // Inventory stocked to the party size
    let inventory = InventoryRepository::new(env.db.clone());
    let item = inventory
        .find_item_by_sku(&variant.sku)
        .await
        .unwrap()
        .expect("inventory item");
    let levels = inventory
        .find_levels_for_item(item.id.clone().expect("item id"))
        .await
        .unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].stocked, 4);

    // Event linked to the product via the generic link edge
    let links = LinkRepository::new(env.db.clone());
    let targets = links
        .targets(event_id, link::kind::EVENT_PRODUCT)
        .await
        .unwrap();
    assert_eq!(targets, vec![product_id]);

    // Customer got the confirmation
    let dispatched = env.notifier.dispatched.lock().unwrap();
    assert!(
        dispatched
            .iter()
            .any(|(n, _)| n == "acceptance_confirmation")
    );
}

#[tokio::test]
async fn double_accept_creates_two_products() {
    // Regression pin: acceptance has no idempotency guard, so a second
    // run on a confirmed event creates a second product.
    let env = TestEnv::new().await;
    let template_id = env.seed_template().await;

    let event = env
        .intake(PricingSource::Fixed)
        .submit(request(Some(template_id), &bookable_date(), "18:30"))
        .await
        .expect("intake");
    let event_id = event.id.clone().expect("event id").to_string();

    let saga = env.saga();
    saga.accept(&event_id).await.expect("first accept");
    saga.accept(&event_id).await.expect("second accept");

    let products = ProductRepository::new(env.db.clone());
    let event_products: Vec<_> = products
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.event_meta.is_some())
        .collect();
    assert_eq!(event_products.len(), 2);
}

#[tokio::test]
async fn template_pricing_uses_the_variant_price() {
    let env = TestEnv::new().await;
    let template_id = env.seed_template().await;

    let event = env
        .intake(PricingSource::Template)
        .submit(request(Some(template_id), &bookable_date(), "18:30"))
        .await
        .expect("intake");

    // 11_999 from the template variant × 4 guests
    assert_eq!(event.total_price_cents, 47_996);
}

#[tokio::test]
async fn intake_rejects_dangling_template_reference() {
    let env = TestEnv::new().await;
    let err = env
        .intake(PricingSource::Fixed)
        .submit(request(
            Some("product:doesnotexist".to_string()),
            &bookable_date(),
            "18:30",
        ))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}
