//! Event request intake
//!
//! Validates a storefront submission, prices it, persists the pending
//! event and fans out the two intake notifications. Validation is the
//! single canonical schema: lead-time window, business hours, party
//! bounds, priceable type, deliverable address.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use shared::models::ChefEventCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::booking::conflict::ConflictChecker;
use crate::booking::pricing::{self, PricingSource};
use crate::db::models::{ChefEvent, Product};
use crate::db::repository::{ChefEventRepository, ProductRepository};
use crate::notify::{Notifier, TemplateData, TemplateKind};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_address, validate_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// Smallest party a chef will cook for
pub const MIN_PARTY_SIZE: i64 = 2;

/// Largest party a chef will cook for
pub const MAX_PARTY_SIZE: i64 = 50;

#[derive(Clone)]
pub struct IntakeService {
    events: ChefEventRepository,
    products: ProductRepository,
    conflicts: ConflictChecker,
    notifier: Arc<dyn Notifier>,
    pricing: PricingSource,
}

impl IntakeService {
    pub fn new(db: Surreal<Db>, pricing: PricingSource, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            events: ChefEventRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            conflicts: ConflictChecker::new(db),
            notifier,
            pricing,
        }
    }

    /// Validate, price and persist a request; returns the pending event.
    pub async fn submit(&self, payload: ChefEventCreate) -> AppResult<ChefEvent> {
        let (date, _time) = validate_payload(&payload, time::today())?;

        let template = self.load_template(&payload).await?;
        let quote = pricing::quote(
            self.pricing,
            payload.event_type,
            payload.party_size,
            template.as_ref(),
        )?;

        // Advisory only: flagged to the chef, never blocks the request
        let has_conflict = self
            .conflicts
            .has_conflict(&date.to_string(), &payload.requested_time)
            .await?;

        let event = ChefEvent {
            id: None,
            status: Default::default(),
            requested_date: date.to_string(),
            requested_time: payload.requested_time.clone(),
            party_size: payload.party_size,
            event_type: payload.event_type,
            location_type: payload.location_type,
            location_address: payload.location_address.clone(),
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            notes: payload.notes.clone(),
            special_requirements: payload.special_requirements.clone(),
            total_price_cents: quote.total_price_cents,
            deposit_paid: false,
            estimated_duration_minutes: pricing::estimated_duration_minutes(payload.event_type),
            assigned_chef_id: None,
            template_product: template.as_ref().and_then(|t| t.id.clone()),
            product: None,
            created_at: None,
            updated_at: None,
        };

        let created = self.events.create(event).await?;
        tracing::info!(
            event = %created.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
            total_cents = created.total_price_cents,
            conflict = has_conflict,
            "Chef event request received"
        );

        self.notifier.dispatch(
            TemplateKind::RequestConfirmation.name(),
            TemplateData::for_event(created.clone()),
        );
        let mut chef_data = TemplateData::for_event(created.clone());
        chef_data.has_conflict = has_conflict;
        self.notifier
            .dispatch(TemplateKind::ChefAlert.name(), chef_data);

        Ok(created)
    }

    /// Resolve the referenced template product, if any. A dangling
    /// reference is a validation error; absence is fine (acceptance will
    /// demand one later).
    async fn load_template(&self, payload: &ChefEventCreate) -> AppResult<Option<Product>> {
        let Some(id) = &payload.template_product_id else {
            return Ok(None);
        };
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::validation(format!("template product {} not found", id)))?;
        Ok(Some(product))
    }
}

/// Validate the raw payload; returns the parsed (date, time) pair.
pub fn validate_payload(
    payload: &ChefEventCreate,
    today: NaiveDate,
) -> AppResult<(NaiveDate, NaiveTime)> {
    let date = time::parse_request_date(&payload.requested_date)?;
    time::validate_lead_time(date, today)?;
    let parsed_time = time::parse_request_time(&payload.requested_time)?;
    time::validate_business_hours(parsed_time)?;

    if payload.party_size < MIN_PARTY_SIZE || payload.party_size > MAX_PARTY_SIZE {
        return Err(AppError::validation(format!(
            "party_size must be between {} and {} (got {})",
            MIN_PARTY_SIZE, MAX_PARTY_SIZE, payload.party_size
        )));
    }

    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_address(&payload.location_address)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    validate_optional_text(
        &payload.special_requirements,
        "special_requirements",
        MAX_NOTE_LEN,
    )?;

    Ok((date, parsed_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::models::{EventType, LocationType};

    fn base_payload(today: NaiveDate) -> ChefEventCreate {
        ChefEventCreate {
            requested_date: (today + Duration::days(30)).to_string(),
            requested_time: "18:30".to_string(),
            party_size: 4,
            event_type: EventType::CookingClass,
            template_product_id: None,
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        assert!(validate_payload(&base_payload(today()), today()).is_ok());
    }

    #[test]
    fn rejects_party_size_out_of_bounds() {
        let mut p = base_payload(today());
        p.party_size = 1;
        assert!(validate_payload(&p, today()).is_err());
        p.party_size = 51;
        assert!(validate_payload(&p, today()).is_err());
        p.party_size = 2;
        assert!(validate_payload(&p, today()).is_ok());
        p.party_size = 50;
        assert!(validate_payload(&p, today()).is_ok());
    }

    #[test]
    fn rejects_short_lead_time() {
        let mut p = base_payload(today());
        p.requested_date = (today() + Duration::days(3)).to_string();
        assert!(validate_payload(&p, today()).is_err());
    }

    #[test]
    fn rejects_far_future_date() {
        let mut p = base_payload(today());
        p.requested_date = (today() + Duration::days(200)).to_string();
        assert!(validate_payload(&p, today()).is_err());
    }

    #[test]
    fn rejects_after_hours_time() {
        let mut p = base_payload(today());
        p.requested_time = "21:00".to_string();
        assert!(validate_payload(&p, today()).is_err());
    }

    #[test]
    fn rejects_short_address() {
        let mut p = base_payload(today());
        p.location_address = "nowhere".to_string();
        assert!(validate_payload(&p, today()).is_err());
    }

    #[test]
    fn rejects_bad_email() {
        let mut p = base_payload(today());
        p.email = "not-an-email".to_string();
        assert!(validate_payload(&p, today()).is_err());
    }

    #[test]
    fn accepts_iso_datetime_date() {
        let mut p = base_payload(today());
        p.requested_date = format!("{}T00:00:00.000Z", today() + Duration::days(30));
        assert!(validate_payload(&p, today()).is_ok());
    }
}
