//! Session Token
//!
//! Stateless bearer token: `{user_id}.{expires_at_ms}.{signature}` where the
//! signature is unpadded URL-safe base64 of HMAC-SHA256 over
//! `{user_id}.{expires_at_ms}`.

use chrono::{DateTime, TimeDelta, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64_url, hmac_sha256, hmac_sha256_verify, to_base64_url};

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    pub user_id: UserId,
    pub expires_at_ms: i64,
}

impl SessionToken {
    pub fn issue(user_id: UserId, now: DateTime<Utc>, ttl: TimeDelta) -> Self {
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            user_id,
            expires_at_ms: expires_at.timestamp_millis(),
        }
    }

    fn payload(&self) -> String {
        format!("{}.{}", self.user_id, self.expires_at_ms)
    }

    pub fn encode(&self, secret: &[u8]) -> String {
        let payload = self.payload();
        let signature = hmac_sha256(secret, payload.as_bytes());
        format!("{}.{}", payload, to_base64_url(&signature))
    }

    /// Check signature and expiry. Every failure is `TokenInvalid`.
    pub fn verify(token: &str, secret: &[u8], now: DateTime<Utc>) -> AuthResult<Self> {
        let (payload, signature) = token.rsplit_once('.').ok_or(AuthError::TokenInvalid)?;
        let signature = from_base64_url(signature).map_err(|_| AuthError::TokenInvalid)?;

        if !hmac_sha256_verify(secret, payload.as_bytes(), &signature) {
            tracing::warn!("Bearer token with bad signature");
            return Err(AuthError::TokenInvalid);
        }

        let (user_id, expires_at_ms) = payload.split_once('.').ok_or(AuthError::TokenInvalid)?;
        let user_id = UserId::parse_str(user_id).ok_or(AuthError::TokenInvalid)?;
        let expires_at_ms: i64 = expires_at_ms.parse().map_err(|_| AuthError::TokenInvalid)?;

        if now.timestamp_millis() >= expires_at_ms {
            tracing::debug!(user_id = %user_id, "Bearer token expired");
            return Err(AuthError::TokenInvalid);
        }

        Ok(Self {
            user_id,
            expires_at_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [9u8; 32];

    #[test]
    fn test_issue_and_verify() {
        let now = Utc::now();
        let user_id = UserId::new();
        let token = SessionToken::issue(user_id, now, TimeDelta::hours(24));
        let encoded = token.encode(&SECRET);

        assert_eq!(encoded.split('.').count(), 3);
        assert!(encoded.starts_with(&user_id.to_string()));

        let verified = SessionToken::verify(&encoded, &SECRET, now).unwrap();
        assert_eq!(verified, token);
    }

    #[test]
    fn test_expired() {
        let now = Utc::now();
        let encoded = SessionToken::issue(UserId::new(), now, TimeDelta::hours(24)).encode(&SECRET);
        let later = now + TimeDelta::hours(24);
        assert!(matches!(
            SessionToken::verify(&encoded, &SECRET, later),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_forged_or_malformed() {
        let now = Utc::now();
        let token = SessionToken::issue(UserId::new(), now, TimeDelta::hours(1));
        let encoded = token.encode(&SECRET);

        assert!(SessionToken::verify(&encoded, &[1u8; 32], now).is_err());

        // extend the expiry without re-signing
        let (_, signature) = encoded.rsplit_once('.').unwrap();
        let tampered = format!("{}.{}.{}", token.user_id, token.expires_at_ms + 1, signature);
        assert!(SessionToken::verify(&tampered, &SECRET, now).is_err());

        for junk in ["", "abc", "a.b", "a.b.c", "...", "x.1.!!!"] {
            assert!(SessionToken::verify(junk, &SECRET, now).is_err(), "{junk}");
        }
    }
}
