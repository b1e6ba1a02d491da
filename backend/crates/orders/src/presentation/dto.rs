//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::OrderInput;

/// Create and update request body
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<OrderRequest> for OrderInput {
    fn from(req: OrderRequest) -> Self {
        OrderInput {
            product: req.product,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

/// Create order response
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}

/// Id of the order a mutation touched
#[derive(Debug, Clone, Serialize)]
pub struct OrderIdResponse {
    pub id: String,
}
