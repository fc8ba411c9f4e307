//! HTTP handlers
//!
//! Axum request handlers for the storefront pages. Successful responses
//! are layout-wrapped HTML; a catalog failure produces a JSON error body
//! instead - that divergence is part of the wire contract.

pub mod home;
pub mod products;

pub use home::get_home;
pub use products::list_products;

use serde::Deserialize;

/// Body returned when a product fetch fails
pub const FETCH_PRODUCTS_ERROR: &str = "Failed to fetch products.";

/// Query parameters for product listings. Values stay strings here; the
/// catalog accessor owns the parsing policy.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListingQuery {
    pub fn page(&self) -> &str {
        self.page.as_deref().unwrap_or("1")
    }

    pub fn page_size(&self) -> &str {
        self.page_size.as_deref().unwrap_or("10")
    }
}
