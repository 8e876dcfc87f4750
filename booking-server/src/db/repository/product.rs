//! Product Repository
//!
//! Template products and event products share the `product` table; event
//! product creation also writes the sku-bearing inventory item row the
//! acceptance flow later looks up.

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::{EmbeddedVariant, InventoryItem, Product, ProductStatus};
use crate::utils::time::now_millis;
use shared::models::TemplateProductCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

const TABLE: &str = "product";
const ITEM_TABLE: &str = "inventory_item";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> =
            self.base.db().select((TABLE, record_key(TABLE, id))).await?;
        Ok(product)
    }

    /// Create a template product (admin curation)
    pub async fn create_template(&self, data: TemplateProductCreate) -> RepoResult<Product> {
        if data.ticket_price_cents <= 0 {
            return Err(RepoError::Validation(
                "ticket_price_cents must be positive".into(),
            ));
        }
        let now = now_millis();
        let product = Product {
            id: None,
            title: data.title,
            description: data.description,
            status: ProductStatus::Published,
            menu: data.menu_id.map(|m| record_id("menu", &m)),
            variants: vec![EmbeddedVariant {
                title: "Per Guest".to_string(),
                sku: format!("TPL-{}", Uuid::new_v4().simple()),
                price_cents: data.ticket_price_cents,
                currency_code: data.currency_code.unwrap_or_else(|| "usd".to_string()),
            }],
            event_meta: None,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create template product".to_string()))
    }

    /// Create an event product together with its inventory item row
    pub async fn create_event_product(&self, mut product: Product) -> RepoResult<Product> {
        let Some(variant) = product.variants.first().cloned() else {
            return Err(RepoError::Validation(
                "event product requires a ticket variant".into(),
            ));
        };
        let now = now_millis();
        product.id = None;
        product.created_at = Some(now);
        product.updated_at = Some(now);

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))?;

        let product_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Created product has no id".to_string()))?;
        let item = InventoryItem {
            id: None,
            sku: variant.sku,
            product: product_id,
        };
        let _: Option<InventoryItem> = self.base.db().create(ITEM_TABLE).content(item).await?;

        Ok(created)
    }

    /// Delete a product and the inventory items pointing at it.
    ///
    /// The item's product reference is stored as a "table:key" string,
    /// so the filter binds the string form.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = record_id(TABLE, id);
        self.base
            .db()
            .query("DELETE inventory_item WHERE product = $product")
            .bind(("product", thing.to_string()))
            .await?;
        let deleted: Option<Product> =
            self.base.db().delete((TABLE, record_key(TABLE, id))).await?;
        Ok(deleted.is_some())
    }
}
