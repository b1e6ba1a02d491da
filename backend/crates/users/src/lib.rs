//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - user entity, email value object, repository trait
//! - `application/` - list/get/create/update/delete and change-password use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Listing goes through `platform::query` with [`domain::entity::user::USER_QUERY_PROFILE`]:
//! `email` and `name` are searchable (case-insensitive substring) and
//! sortable, and without `page_size` every user is returned on one page.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::{users_router, users_router_generic};
