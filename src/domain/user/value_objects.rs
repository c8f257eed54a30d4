use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejected email input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid email: {0}")]
pub struct InvalidEmail(pub String);

/// Email address accepted for sign-up, profile edits and login
///
/// # Invariants
/// - Surrounding whitespace is removed
/// - Contains an '@' with text on both sides
/// - At least 3 characters long
/// - No control characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and validates an email address
    ///
    /// # Example
    /// ```
    /// use social_api::domain::user::Email;
    ///
    /// let email = Email::new("  a@x.com ").expect("valid email");
    /// assert_eq!(email.as_str(), "a@x.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, InvalidEmail> {
        let raw = email.into();
        let trimmed = raw.trim();

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidEmail(raw));
        }

        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Email(trimmed.to_string()))
            }
            _ => Err(InvalidEmail(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
