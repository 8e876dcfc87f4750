//! Chef event payloads and enums

use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// Transitions: `Pending` → `Confirmed` (accept) or `Pending` → `Cancelled`
/// (reject). `Completed` is reserved for a post-event flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl EventStatus {
    /// Statuses that occupy a date/time slot for conflict checking
    pub fn occupies_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

/// Kind of engagement the customer is booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CookingClass,
    PlatedDinner,
    BuffetStyle,
    Custom,
}

impl EventType {
    /// Human-facing label used in product titles and emails
    pub fn label(&self) -> &'static str {
        match self {
            Self::CookingClass => "Cooking Class",
            Self::PlatedDinner => "Plated Dinner",
            Self::BuffetStyle => "Buffet Style",
            Self::Custom => "Custom Event",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CookingClass => "cooking_class",
            Self::PlatedDinner => "plated_dinner",
            Self::BuffetStyle => "buffet_style",
            Self::Custom => "custom",
        }
    }
}

/// Where the event takes place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    CustomerLocation,
    ChefLocation,
}

impl LocationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CustomerLocation => "at your location",
            Self::ChefLocation => "at the chef's venue",
        }
    }
}

/// Create chef event payload (storefront intake)
///
/// `requested_date` accepts `YYYY-MM-DD` or a full ISO datetime string
/// (only the date part is used). `requested_time` is local `HH:MM`, 24h.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefEventCreate {
    pub requested_date: String,
    pub requested_time: String,
    pub party_size: i64,
    pub event_type: EventType,
    pub template_product_id: Option<String>,
    pub location_type: LocationType,
    pub location_address: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub special_requirements: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_wire_format() {
        let json = serde_json::to_string(&EventType::CookingClass).unwrap();
        assert_eq!(json, "\"cooking_class\"");
        let back: EventType = serde_json::from_str("\"plated_dinner\"").unwrap();
        assert_eq!(back, EventType::PlatedDinner);
    }

    #[test]
    fn status_slot_occupancy() {
        assert!(EventStatus::Pending.occupies_slot());
        assert!(EventStatus::Confirmed.occupies_slot());
        assert!(!EventStatus::Cancelled.occupies_slot());
        assert!(!EventStatus::Completed.occupies_slot());
    }
}
