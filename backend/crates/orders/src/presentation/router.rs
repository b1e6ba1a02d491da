//! Orders Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::OrderRepository;
use crate::infra::postgres::PgOrderRepository;
use crate::presentation::handlers::{self, OrdersAppState};

/// Create the Orders router with PostgreSQL repository
pub fn orders_router(repo: PgOrderRepository) -> Router {
    orders_router_generic(repo)
}

/// Create a generic Orders router for any repository implementation
pub fn orders_router_generic<R>(repo: R) -> Router
where
    R: OrderRepository + Send + Sync + 'static,
{
    let state = OrdersAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_orders::<R>).post(handlers::create_order::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_order::<R>)
                .put(handlers::update_order::<R>)
                .delete(handlers::delete_order::<R>),
        )
        .with_state(state)
}
