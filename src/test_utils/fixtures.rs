//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Duration, Utc};

use crate::domain::entities::{CompanyId, Product, ProductId};

/// Create a test product with default values
pub fn test_product() -> Product {
    test_product_named("Test Product")
}

/// Create a test product with a specific name
pub fn test_product_named(name: &str) -> Product {
    Product {
        id: ProductId::new(),
        company_id: CompanyId::new(),
        name: name.to_string(),
        cost: 19.99,
        shippable: true,
        free_delivery: false,
        short_description: format!("{} short description", name),
        long_description: format!("{} long description", name),
        product_details: "Dispatched within 2 working days.".to_string(),
        image_path: None,
        created_at: Utc::now(),
    }
}

/// Create `count` products named "Product 01", "Product 02", ... with
/// staggered creation times so listing order matches naming order.
pub fn test_products(count: usize) -> Vec<Product> {
    let base = Utc::now() - Duration::hours(count as i64);
    (1..=count)
        .map(|i| {
            let mut product = test_product_named(&format!("Product {:02}", i));
            product.created_at = base + Duration::minutes(i as i64);
            product
        })
        .collect()
}
