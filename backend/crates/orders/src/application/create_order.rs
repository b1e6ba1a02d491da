//! Create Order Use Case

use std::sync::Arc;

use crate::domain::entity::order::Order;
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::{price::Price, product::Product, quantity::Quantity};
use crate::error::OrderResult;

/// Editable order fields, shared by create and update
pub struct OrderInput {
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}

impl OrderInput {
    pub(crate) fn validate(&self) -> OrderResult<(Product, Quantity, Price)> {
        Ok((
            Product::new(&self.product)?,
            Quantity::new(self.quantity)?,
            Price::new(self.price)?,
        ))
    }
}

pub struct CreateOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> CreateOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: OrderInput) -> OrderResult<Order> {
        let (product, quantity, price) = input.validate()?;

        let order = Order::new(product, quantity, price);
        self.repo.create(&order).await?;

        tracing::info!(order_id = %order.id, "Order created");
        Ok(order)
    }
}
