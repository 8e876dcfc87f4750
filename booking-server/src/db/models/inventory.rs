//! Inventory entities
//!
//! One stock location per accepted event, one inventory item per event
//! product (sku `EVENT-<event key>`), one level row tying them together
//! with the stocked ticket count.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Stock location, named after the event product it serves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLocation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub address: Option<String>,
    pub created_at: Option<i64>,
}

/// Sku-bearing inventory row created alongside an event product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub sku: String,
    #[serde(with = "serde_helpers::record_id")]
    pub product: RecordId,
}

/// Stocked quantity of one item at one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLevel {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub item: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub location: RecordId,
    pub stocked: i64,
}

/// Sales channel; a default row is seeded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesChannel {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_default: bool,
}

/// Fulfillment provider; the fixed `manual_manual` row is seeded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentProvider {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
}
