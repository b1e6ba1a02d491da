//! Identity Value Object
//!
//! The key login attempts are counted under: the submitted email, trimmed
//! and lower-cased. It is not checked for email syntax, so a typo still
//! counts against the string that was typed.

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(raw: &str) -> AuthResult<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
