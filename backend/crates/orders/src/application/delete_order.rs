//! Delete Order Use Case

use std::sync::Arc;

use kernel::id::OrderId;

use crate::application::parse_order_id;
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

pub struct DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> OrderResult<OrderId> {
        let id = parse_order_id(id)?;
        if !self.repo.delete(&id).await? {
            return Err(OrderError::NotFound);
        }

        tracing::info!(order_id = %id, "Order deleted");
        Ok(id)
    }
}
