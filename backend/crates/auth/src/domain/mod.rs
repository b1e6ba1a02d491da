//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{credentials::UserCredentials, login_attempt::LoginAttemptRecord};
pub use repository::{CredentialRepository, CredentialVerifier, LoginAttemptStore};
pub use value_object::{identity::Identity, session_token::SessionToken};
