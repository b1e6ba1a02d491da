//! Product Value Object

use crate::error::{OrderError, OrderResult};

const PRODUCT_MAX_LENGTH: usize = 200;

/// Product name: trimmed, non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product(String);

impl Product {
    pub fn new(raw: &str) -> OrderResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OrderError::Validation("Product is required".to_string()));
        }
        if trimmed.chars().count() > PRODUCT_MAX_LENGTH {
            return Err(OrderError::Validation(format!(
                "Product must be at most {} characters",
                PRODUCT_MAX_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_db(product: impl Into<String>) -> Self {
        Self(product.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
