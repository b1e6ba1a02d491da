//! User Name Value Object
//!
//! Display name: trimmed, non-empty, at most 100 characters.

use crate::error::{UserError, UserResult};

const USER_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: &str) -> UserResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserError::Validation("Name cannot be empty".to_string()));
        }
        if trimmed.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(UserError::Validation(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(UserError::Validation(
                "Name contains invalid characters".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
