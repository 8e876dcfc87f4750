//! Time helpers: request date/time parsing and booking windows
//!
//! All date/time validation happens at the intake boundary; repositories
//! only ever see the already-validated `YYYY-MM-DD` / `HH:MM` strings.

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};

use super::{AppError, AppResult};

/// Earliest a request may be booked, in days from today
pub const MIN_LEAD_DAYS: i64 = 7;

/// Latest a request may be booked, in days from today (~6 months)
pub const MAX_LEAD_DAYS: i64 = 183;

/// Business hours: first bookable slot
pub const OPENING_TIME: (u32, u32) = (10, 0);

/// Business hours: last bookable slot
pub const CLOSING_TIME: (u32, u32) = (20, 30);

/// Parse a request date: `YYYY-MM-DD`, or a full ISO datetime whose date
/// part is used.
pub fn parse_request_date(raw: &str) -> AppResult<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid requested_date: {}", raw)))
}

/// Parse a request time: strict `HH:MM`, 24h
pub fn parse_request_time(raw: &str) -> AppResult<NaiveTime> {
    let bytes = raw.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(AppError::validation(format!(
            "Invalid requested_time: {} (expected HH:MM)",
            raw
        )));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid requested_time: {}", raw)))
}

/// Validate the booking lead-time window relative to `today`
pub fn validate_lead_time(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    let lead = (date - today).num_days();
    if lead < MIN_LEAD_DAYS {
        return Err(AppError::validation(format!(
            "requested_date must be at least {} days ahead (got {})",
            MIN_LEAD_DAYS, date
        )));
    }
    if lead > MAX_LEAD_DAYS {
        return Err(AppError::validation(format!(
            "requested_date must be within {} days (got {})",
            MAX_LEAD_DAYS, date
        )));
    }
    Ok(())
}

/// Validate that a time falls inside business hours (inclusive bounds)
pub fn validate_business_hours(time: NaiveTime) -> AppResult<()> {
    let open = NaiveTime::from_hms_opt(OPENING_TIME.0, OPENING_TIME.1, 0).unwrap();
    let close = NaiveTime::from_hms_opt(CLOSING_TIME.0, CLOSING_TIME.1, 0).unwrap();
    if time < open || time > close {
        return Err(AppError::validation(format!(
            "requested_time {} is outside business hours ({:02}:{:02}-{:02}:{:02})",
            time.format("%H:%M"),
            OPENING_TIME.0,
            OPENING_TIME.1,
            CLOSING_TIME.0,
            CLOSING_TIME.1
        )));
    }
    Ok(())
}

/// Today's calendar date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current Unix timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a date for display: "Saturday, March 14 2026"
pub fn display_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        date.format("%A"),
        date.format("%B"),
        date.day(),
        date.year()
    )
}
