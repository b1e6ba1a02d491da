//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use chrono::TimeDelta;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Consecutive failures that trigger a lockout (6)
    pub max_failed_attempts: u32,
    /// How long a lockout lasts (30 minutes)
    pub lockout_duration: Duration,
    /// HMAC key for bearer tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Bearer token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 6,
            lockout_duration: Duration::from_secs(30 * 60),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development. Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn lockout_window(&self) -> TimeDelta {
        TimeDelta::from_std(self.lockout_duration).unwrap_or(TimeDelta::MAX)
    }

    /// Full lockout length in minutes, rounded up, as shown to the caller
    pub fn lockout_minutes(&self) -> i64 {
        i64::try_from(self.lockout_duration.as_secs().div_ceil(60)).unwrap_or(i64::MAX)
    }

    pub fn token_lifetime(&self) -> TimeDelta {
        TimeDelta::from_std(self.token_ttl).unwrap_or(TimeDelta::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
