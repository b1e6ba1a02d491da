//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::clock::{Clock, SystemClock};
use platform::keyed_lock::KeyedMutex;

use crate::application::PasswordCredentialVerifier;
use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialVerifier, LoginAttemptStore};
use crate::infra::{memory::InMemoryLoginAttemptStore, postgres::PgAuthRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL credentials and in-memory attempt state
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    let verifier = PasswordCredentialVerifier::new(Arc::new(repo), config.password_pepper.clone());

    auth_router_generic(
        InMemoryLoginAttemptStore::new(),
        verifier,
        Arc::new(SystemClock),
        config,
    )
}

/// Create a generic Auth router for any store and verifier
pub fn auth_router_generic<S, V>(
    store: S,
    verifier: V,
    clock: Arc<dyn Clock>,
    config: AuthConfig,
) -> Router
where
    S: LoginAttemptStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    let state = AuthAppState {
        store: Arc::new(store),
        verifier: Arc::new(verifier),
        locks: Arc::new(KeyedMutex::new()),
        clock,
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::login::<S, V>))
        .with_state(state)
}
