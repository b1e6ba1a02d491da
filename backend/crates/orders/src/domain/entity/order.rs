//! Order Entity

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use kernel::id::OrderId;
use platform::query::{MatchStrategy, PageSize, QueryProfile, Queryable};
use serde::Serialize;

use crate::domain::value_object::{price::Price, product::Product, quantity::Quantity};

/// Search and sort configuration for `GET /orders`
pub const ORDER_QUERY_PROFILE: QueryProfile = QueryProfile {
    searchable: &["product", "quantity", "price"],
    sortable: &["product", "quantity", "price"],
    strategy: MatchStrategy::Regex,
    default_page_size: PageSize::Limited(10),
    default_sort: Some("product:asc"),
};

#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub product: Product,
    pub quantity: Quantity,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(product: Product, quantity: Quantity, price: Price) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            product,
            quantity,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field
    pub fn replace(&mut self, product: Product, quantity: Quantity, price: Price) {
        self.product = product;
        self.quantity = quantity;
        self.price = price;
        self.updated_at = Utc::now();
    }

    pub fn view(&self) -> OrderView {
        OrderView {
            id: self.id,
            product: self.product.as_str().to_string(),
            quantity: self.quantity.value(),
            price: self.price.value(),
        }
    }
}

// Numbers are compared and matched by their decimal text, so `quantity:1`
// also finds 10 and 12 and sorting 9 after 10 is expected.
impl Queryable for Order {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "product" => Some(Cow::Borrowed(self.product.as_str())),
            "quantity" => Some(Cow::Owned(self.quantity.to_string())),
            "price" => Some(Cow::Owned(self.price.to_string())),
            _ => None,
        }
    }
}

/// Public projection of an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        order.view()
    }
}
