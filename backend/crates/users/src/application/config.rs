//! Application Configuration

/// Users application configuration
#[derive(Debug, Clone, Default)]
pub struct UsersConfig {
    /// Password pepper; must match the one the auth module verifies with
    pub password_pepper: Option<Vec<u8>>,
}

impl UsersConfig {
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
