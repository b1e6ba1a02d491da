//! Entity Module

pub mod order;
