//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::OrderId;

use crate::domain::entity::order::Order;
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::{price::Price, product::Product, quantity::Quantity};
use crate::error::OrderResult;

/// PostgreSQL-backed order repository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for PgOrderRepository {
    async fn fetch_all(&self) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                id,
                product,
                quantity,
                price,
                created_at,
                updated_at
            FROM orders
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderRow::into_order).collect())
    }

    async fn find_by_id(&self, id: &OrderId) -> OrderResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                id,
                product,
                quantity,
                price,
                created_at,
                updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(OrderRow::into_order))
    }

    async fn create(&self, order: &Order) -> OrderResult<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (
                id,
                product,
                quantity,
                price,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.product.as_str())
        .bind(order.quantity.value())
        .bind(order.price.value())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, order: &Order) -> OrderResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                product = $2,
                quantity = $3,
                price = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.product.as_str())
        .bind(order.quantity.value())
        .bind(order.price.value())
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &OrderId) -> OrderResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    product: String,
    quantity: i64,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Order {
        Order {
            id: OrderId::from_uuid(self.id),
            product: Product::from_db(self.product),
            quantity: Quantity::from_db(self.quantity),
            price: Price::from_db(self.price),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
