//! Template product payloads
//!
//! Template products are the admin-curated basis an event request points
//! at: they carry the display title/description and, under template
//! pricing, the per-guest ticket price.

use serde::{Deserialize, Serialize};

/// Create template product payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateProductCreate {
    pub title: String,
    pub description: Option<String>,
    /// Menu this template showcases
    pub menu_id: Option<String>,
    /// Per-guest ticket price in minor currency units
    pub ticket_price_cents: i64,
    /// ISO 4217 lowercase, defaults to "usd"
    pub currency_code: Option<String>,
}
