//! Recipient value object
//!
//! Gupshup addresses WhatsApp users by their bare MSISDN (country code plus
//! subscriber number, no `+`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

const MIN_DIGITS: usize = 5;
const MAX_DIGITS: usize = 15;

/// A validated WhatsApp recipient number in provider format (digits only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Recipient {
    value: String,
}

impl Recipient {
    /// Create a new recipient, normalizing common formatting
    ///
    /// Accepts an optional leading `+` as well as spaces, dashes and
    /// parentheses, which are stripped. The remainder must be 5-15 digits.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let raw = number.into();
        let cleaned = raw.trim().replace([' ', '-', '(', ')'], "");
        let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

        if digits.is_empty() {
            return Err(DomainError::InvalidRecipient(
                "Recipient is required".to_string(),
            ));
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidRecipient(format!(
                "Recipient must contain only digits: {raw}"
            )));
        }

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(DomainError::InvalidRecipient(format!(
                "Recipient must have {MIN_DIGITS}-{MAX_DIGITS} digits: {raw}"
            )));
        }

        Ok(Self {
            value: digits.to_string(),
        })
    }

    /// The number as sent to the provider
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Recipient {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Recipient {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Recipient> for String {
    fn from(recipient: Recipient) -> Self {
        recipient.value
    }
}
