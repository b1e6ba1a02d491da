//! Repository Traits
//!
//! Interfaces for attempt state and credential lookup. Implementations are
//! in the infrastructure layer.

use crate::domain::entity::{credentials::UserCredentials, login_attempt::LoginAttemptRecord};
use crate::domain::value_object::identity::Identity;
use crate::error::AuthResult;

pub use crate::domain::entity::credentials::VerifiedUser;

/// Failed-login state keyed by identity.
///
/// Implementations need no per-key atomicity of their own: the Login Guard
/// serializes every read-modify-write for one identity.
#[trait_variant::make(LoginAttemptStore: Send)]
pub trait LocalLoginAttemptStore {
    async fn get(&self, identity: &Identity) -> AuthResult<Option<LoginAttemptRecord>>;

    async fn set(&self, identity: &Identity, record: LoginAttemptRecord) -> AuthResult<()>;

    async fn delete(&self, identity: &Identity) -> AuthResult<()>;
}

/// Checks a submitted secret for an identity.
///
/// `Ok(None)` is a failed check (unknown identity or wrong secret). `Err` is
/// reserved for the verifier itself failing.
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    async fn verify(&self, identity: &Identity, secret: &str) -> AuthResult<Option<VerifiedUser>>;
}

/// Stored credentials lookup
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// `email` is already normalized
    async fn find_credentials_by_email(&self, email: &str) -> AuthResult<Option<UserCredentials>>;
}
