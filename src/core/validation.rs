//! Email validation for lead capture
//!
//! A cheap syntactic filter equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`,
//! restricted to ASCII. It does not check deliverability.

use serde::{Deserialize, Serialize};

/// Message shown to the visitor when the email field is rejected
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field is empty
    #[error("Email cannot be empty")]
    Empty,
    /// Missing `@`, more than one `@`, or empty local part
    #[error("Email must have the form name@domain.tld")]
    MalformedLocalPart,
    /// Domain has no dot with text on both sides
    #[error("Email domain must contain a dot, e.g. example.com")]
    MalformedDomain,
    #[error("Email cannot contain spaces")]
    ContainsWhitespace,
    #[error("Email can only contain ASCII characters")]
    NonAscii,
}

/// An email address that passed [`validate_email`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap a raw input value
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_email(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_email(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

/// Validates the value of an email input exactly as given.
///
/// Whitespace anywhere in the value, including at either end, is rejected.
pub fn validate_email(value: &str) -> Result<EmailAddress, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }

    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::ContainsWhitespace);
    }

    if !value.is_ascii() {
        return Err(ValidationError::NonAscii);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::MalformedLocalPart);
    };

    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::MalformedLocalPart);
    }

    if !has_inner_dot(domain) {
        return Err(ValidationError::MalformedDomain);
    }

    Ok(EmailAddress(value.to_string()))
}

/// Convenience check used by form components
pub fn is_valid_email(raw: &str) -> bool {
    validate_email(raw).is_ok()
}

// A dot with at least one character before it and one after it
fn has_inner_dot(domain: &str) -> bool {
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
