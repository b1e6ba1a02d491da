//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use platform::clock::Clock;
use platform::keyed_lock::KeyedMutex;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase};
use crate::domain::repository::{CredentialVerifier, LoginAttemptStore};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse};

/// Shared state for auth handlers
pub struct AuthAppState<S, V>
where
    S: LoginAttemptStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub verifier: Arc<V>,
    /// One per process; shared by every login request
    pub locks: Arc<KeyedMutex>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<AuthConfig>,
}

impl<S, V> Clone for AuthAppState<S, V>
where
    S: LoginAttemptStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            verifier: self.verifier.clone(),
            locks: self.locks.clone(),
            clock: self.clock.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /authentication/login
pub async fn login<S, V>(
    State(state): State<AuthAppState<S, V>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    S: LoginAttemptStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.store.clone(),
        state.verifier.clone(),
        state.locks.clone(),
        state.clock.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        user_id: output.user_id.to_string(),
        email: output.email,
        name: output.name,
        token: output.token,
    }))
}
