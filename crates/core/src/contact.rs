//! Client contact-field validation.
//!
//! Length limits match the column widths of the original schema
//! (name 120, email 255, phone 50). Email validation is intentionally
//! shallow: a local part, an `@`, and a dotted domain. Anything
//! stricter belongs to a verification flow, not a CRUD layer.

use crate::error::CoreError;

/// Maximum length for a client name.
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length for an email address.
pub const MAX_EMAIL_LEN: usize = 255;

/// Maximum length for a phone number.
pub const MAX_PHONE_LEN: usize = 50;

/// Validate a client name: non-empty and within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Client name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Client name too long: {} chars (max {MAX_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate an email address shape.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.len() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "Email too long: {} chars (max {MAX_EMAIL_LEN})",
            email.len()
        )));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(CoreError::Validation(format!(
            "Invalid email address: '{email}'"
        )));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(CoreError::Validation(format!(
            "Invalid email address: '{email}'"
        )));
    }
    Ok(())
}

/// Validate an optional phone number: only a length check, formats vary
/// too widely to be worth policing here.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if phone.len() > MAX_PHONE_LEN {
        return Err(CoreError::Validation(format!(
            "Phone number too long: {} chars (max {MAX_PHONE_LEN})",
            phone.len()
        )));
    }
    Ok(())
}
