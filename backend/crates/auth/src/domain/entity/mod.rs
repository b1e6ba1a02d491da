//! Entity Module

pub mod credentials;
pub mod login_attempt;
