//! Product entity
//!
//! Two flavors share this table:
//! - template products: admin-curated, carry a menu reference, no event
//!   metadata;
//! - event products: created by the acceptance flow, one "ticket" variant
//!   and an [`EventProductMeta`] back-reference block.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::EventType;
use surrealdb::RecordId;

pub type ProductId = RecordId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    Published,
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::Published
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ProductId>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,

    /// Menu this product showcases (templates) or inherited from the
    /// template (event products, linked separately via the link edge)
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub menu: Option<RecordId>,

    #[serde(default)]
    pub variants: Vec<EmbeddedVariant>,

    /// Present only on event products
    pub event_meta: Option<EventProductMeta>,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Product {
    /// The single sellable variant. Event products always have exactly
    /// one; templates use it as the per-guest price basis.
    pub fn ticket_variant(&self) -> Option<&EmbeddedVariant> {
        self.variants.first()
    }
}

/// Variant embedded in its product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedVariant {
    pub title: String,
    pub sku: String,
    /// Price in minor currency units
    pub price_cents: i64,
    pub currency_code: String,
}

/// Back-references an event product carries to its origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventProductMeta {
    #[serde(with = "serde_helpers::record_id")]
    pub chef_event: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub template_product: RecordId,
    pub event_type: EventType,
    pub event_date: String,
    pub event_time: String,
    pub party_size: i64,
}
