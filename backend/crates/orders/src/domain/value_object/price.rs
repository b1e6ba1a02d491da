//! Price Value Object
//!
//! Unit price as a finite, non-negative number. Displayed the shortest way
//! that round-trips, so `10.0` reads as `10` and `2.5` as `2.5`.

use std::fmt;

use crate::error::{OrderError, OrderResult};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> OrderResult<Self> {
        if !value.is_finite() {
            return Err(OrderError::Validation("Price must be a number".to_string()));
        }
        if value < 0.0 {
            return Err(OrderError::Validation("Price cannot be negative".to_string()));
        }
        // no negative zero
        Ok(Self(value + 0.0))
    }

    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
