//! Repository Traits

use kernel::id::OrderId;

use crate::domain::entity::order::Order;
use crate::error::OrderResult;

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Every order, in insertion order
    async fn fetch_all(&self) -> OrderResult<Vec<Order>>;

    async fn find_by_id(&self, id: &OrderId) -> OrderResult<Option<Order>>;

    async fn create(&self, order: &Order) -> OrderResult<()>;

    /// Returns `false` if the order no longer exists
    async fn update(&self, order: &Order) -> OrderResult<bool>;

    /// Returns `false` if there was nothing to delete
    async fn delete(&self, id: &OrderId) -> OrderResult<bool>;
}
