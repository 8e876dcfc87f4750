//! Email templates
//!
//! Closed template set, rendered to subject + HTML by plain formatting.
//! Dispatch is by template name; unknown names resolve to `None` and the
//! caller no-ops.

use crate::db::models::ChefEvent;
use crate::utils::time::{display_date, parse_request_date};

/// The closed set of templates this platform can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Customer: "we received your request"
    RequestConfirmation,
    /// Chef/admin: new request, with accept/reject links and conflict flag
    ChefAlert,
    /// Customer: "your event is confirmed, here is your booking"
    AcceptanceConfirmation,
}

impl TemplateKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "request_confirmation" => Some(Self::RequestConfirmation),
            "chef_alert" => Some(Self::ChefAlert),
            "acceptance_confirmation" => Some(Self::AcceptanceConfirmation),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestConfirmation => "request_confirmation",
            Self::ChefAlert => "chef_alert",
            Self::AcceptanceConfirmation => "acceptance_confirmation",
        }
    }
}

/// Everything a template render can draw on
#[derive(Debug, Clone)]
pub struct TemplateData {
    pub event: ChefEvent,
    /// Another event already holds the same slot (chef alert only)
    pub has_conflict: bool,
    /// Title of the product created at acceptance
    pub product_title: Option<String>,
    /// Wire id of the product created at acceptance
    pub product_id: Option<String>,
}

impl TemplateData {
    pub fn for_event(event: ChefEvent) -> Self {
        Self {
            event,
            has_conflict: false,
            product_title: None,
            product_id: None,
        }
    }
}

/// Base URLs the templates build action links from
#[derive(Debug, Clone)]
pub struct LinkContext {
    pub admin_base: String,
    pub storefront_base: String,
}

/// A rendered email body
#[derive(Debug, Clone)]
pub struct Rendered {
    pub subject: String,
    pub html: String,
}

/// Render a template against its data
pub fn render(kind: TemplateKind, data: &TemplateData, links: &LinkContext) -> Rendered {
    let event = &data.event;
    let date_label = parse_request_date(&event.requested_date)
        .map(display_date)
        .unwrap_or_else(|_| event.requested_date.clone());
    let summary = format!(
        "<ul>\
         <li>Event: {}</li>\
         <li>Date: {} at {}</li>\
         <li>Guests: {}</li>\
         <li>Location: {} ({})</li>\
         <li>Total: {}</li>\
         </ul>",
        event.event_type.label(),
        date_label,
        event.requested_time,
        event.party_size,
        event.location_address,
        event.location_type.label(),
        format_price(event.total_price_cents),
    );

    match kind {
        TemplateKind::RequestConfirmation => Rendered {
            subject: format!("We received your {} request", event.event_type.label()),
            html: format!(
                "<p>Hi {},</p>\
                 <p>Thanks for your request. Our chef will review it and you \
                 will hear back from us shortly.</p>{}",
                event.first_name, summary
            ),
        },
        TemplateKind::ChefAlert => {
            let event_id = event_wire_id(event);
            let conflict_note = if data.has_conflict {
                "<p><strong>Heads up:</strong> another request already holds \
                 this date and time.</p>"
            } else {
                ""
            };
            Rendered {
                subject: format!(
                    "New event request: {} on {}",
                    event.event_type.label(),
                    event.requested_date
                ),
                html: format!(
                    "<p>{} requested a {}.</p>{}{}\
                     <p><a href=\"{}/admin/events/{}/accept\">Accept</a> | \
                     <a href=\"{}/admin/events/{}/reject\">Reject</a></p>",
                    event.customer_name(),
                    event.event_type.label(),
                    summary,
                    conflict_note,
                    links.admin_base,
                    event_id,
                    links.admin_base,
                    event_id,
                ),
            }
        }
        TemplateKind::AcceptanceConfirmation => {
            let product_line = match (&data.product_title, &data.product_id) {
                (Some(title), Some(id)) => format!(
                    "<p>Your booking: <a href=\"{}/products/{}\">{}</a></p>",
                    links.storefront_base, id, title
                ),
                _ => String::new(),
            };
            Rendered {
                subject: "Your event is confirmed".to_string(),
                html: format!(
                    "<p>Hi {},</p>\
                     <p>Great news: the chef accepted your request.</p>{}{}",
                    event.first_name, summary, product_line
                ),
            }
        }
    }
}

fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Bare record key of the event, for building action links
fn event_wire_id(event: &ChefEvent) -> String {
    event
        .id
        .as_ref()
        .map(|id| id.key().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{EventStatus, EventType, LocationType};

    fn sample_event() -> ChefEvent {
        ChefEvent {
            id: Some(surrealdb::RecordId::from_table_key("chef_event", "ev1")),
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
            template_product: None,
            product: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn links() -> LinkContext {
        LinkContext {
            admin_base: "https://admin.example.com".to_string(),
            storefront_base: "https://shop.example.com".to_string(),
        }
    }

    #[test]
    fn unknown_template_name_resolves_to_none() {
        assert_eq!(TemplateKind::from_name("order-placed"), None);
        assert_eq!(
            TemplateKind::from_name("chef_alert"),
            Some(TemplateKind::ChefAlert)
        );
    }

    #[test]
    fn chef_alert_embeds_action_links_and_conflict() {
        let mut data = TemplateData::for_event(sample_event());
        data.has_conflict = true;
        let rendered = render(TemplateKind::ChefAlert, &data, &links());
        assert!(
            rendered
                .html
                .contains("https://admin.example.com/admin/events/ev1/accept")
        );
        assert!(rendered.html.contains("ev1/reject"));
        assert!(rendered.html.contains("already holds"));
    }

    #[test]
    fn confirmation_formats_price_in_major_units() {
        let data = TemplateData::for_event(sample_event());
        let rendered = render(TemplateKind::RequestConfirmation, &data, &links());
        assert!(rendered.html.contains("$479.96"));
        assert!(rendered.subject.contains("Cooking Class"));
    }

    #[test]
    fn acceptance_links_to_the_product() {
        let mut data = TemplateData::for_event(sample_event());
        data.product_title = Some("Tuscan Table Cooking Class".to_string());
        data.product_id = Some("prod1".to_string());
        let rendered = render(TemplateKind::AcceptanceConfirmation, &data, &links());
        assert!(
            rendered
                .html
                .contains("https://shop.example.com/products/prod1")
        );
    }
}
