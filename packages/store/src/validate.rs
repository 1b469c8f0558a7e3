//! Form input validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! names, then email, then phone.

use crate::models::UserFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("First and last names are required.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
}

/// Validate the four editable fields of a record.
pub fn validate(fields: &UserFields) -> Result<(), ValidationError> {
    if fields.first_name.trim().is_empty() || fields.last_name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&fields.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// `local@domain.label`: exactly one `@`, no whitespace anywhere, a non-empty
/// local part, and a domain containing a dot with characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}
