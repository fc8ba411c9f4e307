//! Product domain entity
//!
//! A catalog item offered by a vendor company.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::company::CompanyId;

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub company_id: CompanyId,
    pub name: String,
    pub cost: f64,
    pub shippable: bool,
    pub free_delivery: bool,
    pub short_description: String,
    pub long_description: String,
    pub product_details: String,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Cost formatted for display, two decimal places with a currency sign
    pub fn formatted_cost(&self) -> String {
        format!("£{:.2}", self.cost)
    }

    /// Public path to this product's detail page
    pub fn path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

/// Data needed to create a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub company_id: CompanyId,
    pub name: String,
    pub cost: f64,
    pub shippable: bool,
    pub free_delivery: bool,
    pub short_description: String,
    pub long_description: String,
    pub product_details: String,
    pub image_path: Option<String>,
}
