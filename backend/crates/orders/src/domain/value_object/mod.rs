//! Value Object Module

pub mod price;
pub mod product;
pub mod quantity;
