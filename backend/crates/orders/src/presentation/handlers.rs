//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use std::sync::Arc;
use tracing::Instrument;

use kernel::caller::AuthenticatedUser;
use platform::query::{ListQuery, PageResult};

use crate::application::{
    CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderUseCase,
};
use crate::domain::entity::order::OrderView;
use crate::domain::repository::OrderRepository;
use crate::error::OrderResult;
use crate::presentation::dto::{CreateOrderResponse, OrderIdResponse, OrderRequest};

/// Shared state for order handlers
pub struct OrdersAppState<R>
where
    R: OrderRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for OrdersAppState<R>
where
    R: OrderRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /orders
pub async fn list_orders<R>(
    State(state): State<OrdersAppState<R>>,
    Query(params): Query<ListQuery>,
) -> OrderResult<Json<PageResult<OrderView>>>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let page = ListOrdersUseCase::new(state.repo.clone())
        .execute(&params)
        .await?;
    Ok(Json(page))
}

/// GET /orders/{id}
pub async fn get_order<R>(
    State(state): State<OrdersAppState<R>>,
    Path(id): Path<String>,
) -> OrderResult<Json<OrderView>>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let order = GetOrderUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(order))
}

/// POST /orders
pub async fn create_order<R>(
    State(state): State<OrdersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Json(req): Json<OrderRequest>,
) -> OrderResult<Json<CreateOrderResponse>>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let order = CreateOrderUseCase::new(state.repo.clone())
        .execute(req.into())
        .instrument(caller_span(caller))
        .await?;

    Ok(Json(CreateOrderResponse {
        product: order.product.as_str().to_string(),
        quantity: order.quantity.value(),
        price: order.price.value(),
    }))
}

/// PUT /orders/{id}
pub async fn update_order<R>(
    State(state): State<OrdersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    Json(req): Json<OrderRequest>,
) -> OrderResult<Json<OrderIdResponse>>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let id = UpdateOrderUseCase::new(state.repo.clone())
        .execute(&id, req.into())
        .instrument(caller_span(caller))
        .await?;
    Ok(Json(OrderIdResponse { id: id.to_string() }))
}

/// DELETE /orders/{id}
pub async fn delete_order<R>(
    State(state): State<OrdersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> OrderResult<Json<OrderIdResponse>>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let id = DeleteOrderUseCase::new(state.repo.clone())
        .execute(&id)
        .instrument(caller_span(caller))
        .await?;
    Ok(Json(OrderIdResponse { id: id.to_string() }))
}

/// Span that tags the use case's logs with the caller
fn caller_span(caller: Option<Extension<AuthenticatedUser>>) -> tracing::Span {
    let caller = caller.map(|Extension(user)| user);
    tracing::info_span!("caller", actor = %AuthenticatedUser::actor(caller.as_ref()))
}
