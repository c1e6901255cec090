//! Email Address

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use EmailAddressError::*;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
}

/// An error that can occur when creating an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email {0:?} is invalid")]
    InvalidEmailAddress(String),
}

/// A recipient email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address, trimming surrounding whitespace
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(InvalidEmailAddress(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create an email address without validating it
    #[cfg(test)]
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
