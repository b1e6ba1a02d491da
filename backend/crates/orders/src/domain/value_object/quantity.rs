//! Quantity Value Object

use std::fmt;

use crate::error::{OrderError, OrderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> OrderResult<Self> {
        if value < 0 {
            return Err(OrderError::Validation(
                "Quantity cannot be negative".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn from_db(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
