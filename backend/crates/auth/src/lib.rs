//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - login attempt records, identity, session tokens, repository traits
//! - `application/` - Login Guard use case, password credential verifier
//! - `infra/` - in-memory attempt store, PostgreSQL credential lookup
//! - `presentation/` - login handler, DTOs, router, bearer-token middleware
//!
//! ## Login Guard
//! Failed logins are counted per identity (the submitted email, normalized).
//! The 6th consecutive failure locks the identity for 30 minutes; while
//! locked, attempts are rejected without checking the password. A success
//! clears the counter. Expired lockouts are cleared lazily on the next
//! attempt.
//!
//! Attempt state is process-local. A restart resets every lockout.
//! Lockouts are keyed by the claimed email, not the caller, so anyone who
//! knows an address can lock its owner out.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryLoginAttemptStore, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
