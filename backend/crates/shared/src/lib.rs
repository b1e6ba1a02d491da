//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the vocabulary every feature crate agrees on:
//! - The unified error type and its HTTP classification
//! - Typed identifiers for persisted records
//! - The authenticated caller handed from middleware to handlers
//!
//! Anything that is specific to one resource (users, orders, login)
//! belongs in that resource's crate, not here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod caller;
pub mod id;
