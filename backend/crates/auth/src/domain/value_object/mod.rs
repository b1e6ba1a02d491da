//! Value Object Module

pub mod identity;
pub mod session_token;
