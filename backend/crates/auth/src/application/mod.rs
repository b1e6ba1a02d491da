//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credential_verifier;
pub mod login;

// Re-exports
pub use config::AuthConfig;
pub use credential_verifier::PasswordCredentialVerifier;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
