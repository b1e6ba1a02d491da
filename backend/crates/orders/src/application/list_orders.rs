//! List Orders Use Case

use std::sync::Arc;

use platform::query::{ListQuery, PageResult, QueryRequest, query_page};

use crate::domain::entity::order::{ORDER_QUERY_PROFILE, OrderView};
use crate::domain::repository::OrderRepository;
use crate::error::OrderResult;

pub struct ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, params: &ListQuery) -> OrderResult<PageResult<OrderView>> {
        let request = QueryRequest::from_params(params, &ORDER_QUERY_PROFILE);
        let orders = self.repo.fetch_all().await?;
        Ok(query_page(orders, &request, &ORDER_QUERY_PROFILE, OrderView::from))
    }
}
