//! Application Layer
//!
//! Use cases and application services.

pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod list_orders;
pub mod update_order;

// Re-exports
pub use create_order::{CreateOrderUseCase, OrderInput};
pub use delete_order::DeleteOrderUseCase;
pub use get_order::GetOrderUseCase;
pub use list_orders::ListOrdersUseCase;
pub use update_order::UpdateOrderUseCase;

use kernel::id::OrderId;

use crate::error::{OrderError, OrderResult};

/// Path ids that are not UUIDs name no order
pub(crate) fn parse_order_id(raw: &str) -> OrderResult<OrderId> {
    OrderId::parse_str(raw).ok_or(OrderError::NotFound)
}
