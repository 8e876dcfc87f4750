//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! the intake and admin CRUD handlers.

use super::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menus, courses, dishes, template products, contact names
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, special requirements
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers and the like
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Event addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Event addresses must be usable by a chef to actually show up
pub const MIN_ADDRESS_LEN: usize = 10;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with a dotted domain after it.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(AppError::validation(format!("Invalid email: {value}")));
    };
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') || domain.contains('@') {
        return Err(AppError::validation(format!("Invalid email: {value}")));
    }
    Ok(())
}

/// Validate the event address: long enough to be deliverable, bounded above.
pub fn validate_address(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "location_address", MAX_ADDRESS_LEN)?;
    if value.trim().len() < MIN_ADDRESS_LEN {
        return Err(AppError::validation(format!(
            "location_address is too short (min {MIN_ADDRESS_LEN} chars)"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversize() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("fine", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@nodot").is_err());
    }

    #[test]
    fn address_minimum_length() {
        assert!(validate_address("short st").is_err());
        assert!(validate_address("12 Long Street, Springfield").is_ok());
    }
}
