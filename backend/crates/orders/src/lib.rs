//! Orders Backend Module
//!
//! - `domain/` - order entity, product/quantity/price value objects, repository trait
//! - `application/` - list/get/create/update/delete use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! `GET /orders` searches `product`, `quantity` and `price` with a
//! case-insensitive regular expression, sorts by `product:asc` unless told
//! otherwise, and pages ten orders at a time.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use error::{OrderError, OrderResult};
pub use infra::{memory::InMemoryOrderRepository, postgres::PgOrderRepository};
pub use presentation::router::{orders_router, orders_router_generic};
