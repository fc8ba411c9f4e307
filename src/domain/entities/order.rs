//! Order domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::ProductId;
use super::user::UserId;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data needed to create a new order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    /// Customer-facing order reference
    pub reference: String,
}

/// Data needed to create an order line
#[derive(Debug, Clone)]
pub struct NewOrderProduct {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    /// Unit cost at time of purchase
    pub cost: f64,
}
