//! In-memory Order Repository

use kernel::id::OrderId;
use tokio::sync::RwLock;

use crate::domain::entity::order::Order;
use crate::domain::repository::OrderRepository;
use crate::error::OrderResult;

/// Orders kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    async fn fetch_all(&self) -> OrderResult<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn find_by_id(&self, id: &OrderId) -> OrderResult<Option<Order>> {
        Ok(self.orders.read().await.iter().find(|o| o.id == *id).cloned())
    }

    async fn create(&self, order: &Order) -> OrderResult<()> {
        self.orders.write().await.push(order.clone());
        Ok(())
    }

    async fn update(&self, order: &Order) -> OrderResult<bool> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => {
                *slot = order.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &OrderId) -> OrderResult<bool> {
        let mut orders = self.orders.write().await;
        let before = orders.len();
        orders.retain(|o| o.id != *id);
        Ok(orders.len() < before)
    }
}
