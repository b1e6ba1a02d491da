//! Update Order Use Case

use std::sync::Arc;

use kernel::id::OrderId;

use crate::application::create_order::OrderInput;
use crate::application::parse_order_id;
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

pub struct UpdateOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, input: OrderInput) -> OrderResult<OrderId> {
        let id = parse_order_id(id)?;
        let (product, quantity, price) = input.validate()?;

        let mut order = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(OrderError::NotFound)?;

        order.replace(product, quantity, price);
        if !self.repo.update(&order).await? {
            return Err(OrderError::NotFound);
        }

        tracing::info!(order_id = %order.id, "Order updated");
        Ok(order.id)
    }
}
