//! Infrastructure Layer
//!
//! Attempt store and database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryLoginAttemptStore;
pub use postgres::PgAuthRepository;
