//! Event pricing
//!
//! One pricing source is active per deployment, selected by config.
//! All prices are integer minor currency units; the booking total is
//! always `unit price × party size`, so the per-ticket price recovered
//! at acceptance (`total / party_size`) is exact.

use crate::db::models::Product;
use crate::utils::{AppError, AppResult};
use shared::models::EventType;

/// Where the per-guest unit price comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingSource {
    /// Static per-type price table
    Fixed,
    /// Ticket variant price of the linked template product
    Template,
}

impl PricingSource {
    /// Parse the config value; unknown values fall back to `Fixed`.
    pub fn from_config(value: &str) -> Self {
        match value {
            "template" => Self::Template,
            "fixed" => Self::Fixed,
            other => {
                tracing::warn!("Unknown PRICING_SOURCE '{}', using 'fixed'", other);
                Self::Fixed
            }
        }
    }
}

/// Static per-type unit price in cents
pub const fn fixed_unit_price_cents(event_type: EventType) -> Option<i64> {
    match event_type {
        EventType::BuffetStyle => Some(9_999),
        EventType::CookingClass => Some(11_999),
        EventType::PlatedDinner => Some(14_999),
        EventType::Custom => None,
    }
}

/// Rough duration used for scheduling hints, per event type
pub const fn estimated_duration_minutes(event_type: EventType) -> i64 {
    match event_type {
        EventType::CookingClass => 180,
        EventType::PlatedDinner => 150,
        EventType::BuffetStyle => 120,
        EventType::Custom => 180,
    }
}

/// A priced booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub unit_price_cents: i64,
    pub total_price_cents: i64,
}

/// Price a booking request.
///
/// `template` must be present under [`PricingSource::Template`]; it is
/// ignored under [`PricingSource::Fixed`].
pub fn quote(
    source: PricingSource,
    event_type: EventType,
    party_size: i64,
    template: Option<&Product>,
) -> AppResult<Quote> {
    let unit_price_cents = match source {
        PricingSource::Fixed => fixed_unit_price_cents(event_type).ok_or_else(|| {
            AppError::validation(format!(
                "event_type {} cannot be priced",
                event_type.as_str()
            ))
        })?,
        PricingSource::Template => {
            let template = template.ok_or_else(|| {
                AppError::validation("template_product_id is required for template pricing")
            })?;
            let variant = template.ticket_variant().ok_or_else(|| {
                AppError::validation(format!(
                    "template product {} has no price variant",
                    template.title
                ))
            })?;
            variant.price_cents
        }
    };

    Ok(Quote {
        unit_price_cents,
        total_price_cents: unit_price_cents * party_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{EmbeddedVariant, Product, ProductStatus};

    fn template_with_price(price_cents: i64) -> Product {
        Product {
            id: None,
            title: "Tasting Menu".to_string(),
            description: None,
            status: ProductStatus::Published,
            menu: None,
            variants: vec![EmbeddedVariant {
                title: "Per Guest".to_string(),
                sku: "TPL-test".to_string(),
                price_cents,
                currency_code: "usd".to_string(),
            }],
            event_meta: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn fixed_table_prices() {
        assert_eq!(
            fixed_unit_price_cents(EventType::BuffetStyle),
            Some(9_999)
        );
        assert_eq!(
            fixed_unit_price_cents(EventType::CookingClass),
            Some(11_999)
        );
        assert_eq!(
            fixed_unit_price_cents(EventType::PlatedDinner),
            Some(14_999)
        );
        assert_eq!(fixed_unit_price_cents(EventType::Custom), None);
    }

    #[test]
    fn cooking_class_for_four() {
        let q = quote(PricingSource::Fixed, EventType::CookingClass, 4, None).unwrap();
        assert_eq!(q.total_price_cents, 47_996);
        assert_eq!(q.unit_price_cents, 11_999);
    }

    #[test]
    fn custom_type_is_not_priceable() {
        let err = quote(PricingSource::Fixed, EventType::Custom, 4, None).unwrap_err();
        assert!(err.to_string().contains("cannot be priced"));
    }

    #[test]
    fn template_pricing_uses_variant() {
        let template = template_with_price(8_500);
        let q = quote(
            PricingSource::Template,
            EventType::PlatedDinner,
            6,
            Some(&template),
        )
        .unwrap();
        assert_eq!(q.unit_price_cents, 8_500);
        assert_eq!(q.total_price_cents, 51_000);
    }

    #[test]
    fn template_pricing_requires_template() {
        assert!(quote(PricingSource::Template, EventType::PlatedDinner, 6, None).is_err());
    }

    #[test]
    fn unknown_config_falls_back_to_fixed() {
        assert_eq!(PricingSource::from_config("banana"), PricingSource::Fixed);
        assert_eq!(
            PricingSource::from_config("template"),
            PricingSource::Template
        );
    }
}
