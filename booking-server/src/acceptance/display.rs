//! Display formatting for acceptance
//!
//! Pure presentation: the strings embedded in the created product title
//! and the acceptance email.

use crate::db::models::ChefEvent;
use crate::utils::time::{display_date, parse_request_date};

/// Human-facing labels for one event
#[derive(Debug, Clone)]
pub struct EventDisplay {
    pub date_label: String,
    pub time_label: String,
    pub type_label: &'static str,
    pub location_label: &'static str,
}

impl EventDisplay {
    /// Stored dates are pre-validated; an unparsable one falls back to
    /// the raw string rather than failing presentation.
    pub fn from_event(event: &ChefEvent) -> Self {
        let date_label = parse_request_date(&event.requested_date)
            .map(display_date)
            .unwrap_or_else(|_| event.requested_date.clone());
        Self {
            date_label,
            time_label: event.requested_time.clone(),
            type_label: event.event_type.label(),
            location_label: event.location_type.label(),
        }
    }
}

/// Title of the product created for an accepted event:
/// template title + event-type label + formatted date.
pub fn event_product_title(template_title: &str, display: &EventDisplay) -> String {
    format!(
        "{} {} ({})",
        template_title, display.type_label, display.date_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{EventStatus, EventType, LocationType};

    #[test]
    fn title_embeds_template_type_and_date() {
        let event = ChefEvent {
            id: None,
            status: EventStatus::Pending,
            requested_date: "2026-03-14".to_string(),
            requested_time: "18:30".to_string(),
            party_size: 4,
            event_type: EventType::CookingClass,
            location_type: LocationType::ChefLocation,
            location_address: "1 Kitchen Lane, Springfield".to_string(),
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
            template_product: None,
            product: None,
            created_at: None,
            updated_at: None,
        };
        let display = EventDisplay::from_event(&event);
        let title = event_product_title("Tuscan Table", &display);
        assert_eq!(title, "Tuscan Table Cooking Class (Saturday, March 14 2026)");
    }
}
