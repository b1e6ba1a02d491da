//! Login Use Case (Login Guard)
//!
//! Gates credential verification behind a per-identity failure counter.
//!
//! Every attempt for one identity runs under that identity's keyed mutex,
//! from reading the attempt record to writing it back. Concurrent failures
//! therefore never lose an increment, and attempts queued behind the one
//! that triggers a lockout see the lockout and never reach the verifier.

use std::sync::Arc;

use kernel::id::UserId;
use platform::clock::Clock;
use platform::keyed_lock::KeyedMutex;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialVerifier, LoginAttemptStore};
use crate::domain::value_object::{identity::Identity, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<S, V>
where
    S: LoginAttemptStore,
    V: CredentialVerifier,
{
    store: Arc<S>,
    verifier: Arc<V>,
    locks: Arc<KeyedMutex>,
    clock: Arc<dyn Clock>,
    config: Arc<AuthConfig>,
}

impl<S, V> LoginUseCase<S, V>
where
    S: LoginAttemptStore,
    V: CredentialVerifier,
{
    /// `locks` must be shared by every use case instance over the same `store`.
    pub fn new(
        store: Arc<S>,
        verifier: Arc<V>,
        locks: Arc<KeyedMutex>,
        clock: Arc<dyn Clock>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            store,
            verifier,
            locks,
            clock,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let identity = Identity::new(&input.email)?;

        let _guard = self.locks.lock(identity.as_str()).await;

        let now = self.clock.now();
        let record = match self.store.get(&identity).await? {
            Some(record) if record.is_locked_at(now) => {
                return Err(AuthError::LockedOut {
                    minutes: record.remaining_minutes(now),
                });
            }
            Some(record) if record.lock_expired_at(now) => {
                self.store.delete(&identity).await?;
                tracing::info!(identity = %identity, "Lockout expired, attempt counter reset");
                None
            }
            other => other,
        };

        match self.verifier.verify(&identity, &input.password).await? {
            Some(user) => {
                if record.is_some() {
                    self.store.delete(&identity).await?;
                }

                let token = SessionToken::issue(
                    user.user_id,
                    self.clock.now(),
                    self.config.token_lifetime(),
                )
                .encode(&self.config.token_secret);

                tracing::info!(user_id = %user.user_id, "User logged in");

                Ok(LoginOutput {
                    user_id: user.user_id,
                    email: user.email,
                    name: user.name,
                    token,
                })
            }
            None => {
                let mut record = record.unwrap_or_default();
                let locked = record.record_failure(
                    self.config.max_failed_attempts,
                    self.config.lockout_window(),
                    self.clock.now(),
                );
                let failures = record.failure_count;
                self.store.set(&identity, record).await?;

                if locked {
                    tracing::warn!(
                        identity = %identity,
                        failures,
                        "Too many failed logins, identity locked"
                    );
                    Err(AuthError::LockedOut {
                        minutes: self.config.lockout_minutes(),
                    })
                } else {
                    tracing::debug!(identity = %identity, failures, "Failed login recorded");
                    Err(AuthError::InvalidCredentials)
                }
            }
        }
    }
}
