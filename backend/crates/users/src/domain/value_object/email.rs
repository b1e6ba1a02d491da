//! Email Value Object
//!
//! A syntactically plausible, lower-cased email address. This is the login
//! identity and the uniqueness key of the `users` table.

use std::str::FromStr;

use crate::error::{UserError, UserResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> UserResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(UserError::Validation("Email cannot be empty".to_string()));
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(UserError::Validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }
        if !is_valid_format(&email) {
            return Err(UserError::Validation("Invalid email format".to_string()));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One `@`, a non-empty local part, a dotted domain of letters, digits and hyphens
fn is_valid_format(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
        return false;
    }

    !domain.is_empty()
        && domain.contains('.')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !domain.starts_with(['.', '-'])
        && !domain.ends_with(['.', '-'])
        && !domain.contains("..")
}

impl FromStr for Email {
    type Err = UserError;

    fn from_str(s: &str) -> UserResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
