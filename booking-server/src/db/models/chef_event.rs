//! Chef event entity

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::{EventStatus, EventType, LocationType};
use surrealdb::RecordId;

pub type ChefEventId = RecordId;

/// Chef event: the booking record and root of truth for the request state.
///
/// Date and time are kept as the validated wire strings (`YYYY-MM-DD`,
/// `HH:MM`): conflict checks are exact string matches on the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefEvent {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ChefEventId>,

    #[serde(default)]
    pub status: EventStatus,

    pub requested_date: String,
    pub requested_time: String,
    pub party_size: i64,
    pub event_type: EventType,

    pub location_type: LocationType,
    pub location_address: String,

    // Contact
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,

    pub notes: Option<String>,
    pub special_requirements: Option<String>,

    /// Total booking price in minor currency units
    pub total_price_cents: i64,

    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub deposit_paid: bool,

    pub estimated_duration_minutes: i64,

    pub assigned_chef_id: Option<String>,

    /// Template product the request was made against
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub template_product: Option<RecordId>,

    /// Product created at acceptance
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub product: Option<RecordId>,

    /// Unix timestamp millis
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl ChefEvent {
    /// Customer display name
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
