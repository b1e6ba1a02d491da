//! Get Order Use Case

use std::sync::Arc;

use crate::application::parse_order_id;
use crate::domain::entity::order::OrderView;
use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

pub struct GetOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> GetOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> OrderResult<OrderView> {
        let id = parse_order_id(id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .map(OrderView::from)
            .ok_or(OrderError::NotFound)
    }
}
