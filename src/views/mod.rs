//! Views
//!
//! The template renderer and the typed context structs handed to it.
//! Each page gets a small serializable struct instead of a stringly-typed
//! map, so templates and handlers agree on field names at compile time.

pub mod renderer;

pub use renderer::ViewRenderer;

use serde::Serialize;

use crate::domain::entities::Product;

/// A product prepared for template consumption
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub name: String,
    /// Display cost, already formatted with the currency sign
    pub cost: String,
    pub path: String,
    pub short_description: String,
    pub free_delivery: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            cost: product.formatted_cost(),
            path: product.path(),
            short_description: product.short_description.clone(),
            free_delivery: product.free_delivery,
        }
    }
}

/// Context for the product listing pages (home and /products)
#[derive(Debug, Serialize)]
pub struct ProductListPage {
    pub title: String,
    pub products: Vec<ProductRow>,
}

impl ProductListPage {
    /// Context for the home page
    pub fn home(products: &[Product]) -> Self {
        Self {
            title: "Hello, World!".to_string(),
            products: products.iter().map(Into::into).collect(),
        }
    }

    /// Context for the product listing page
    pub fn products(products: &[Product]) -> Self {
        Self {
            title: "Products".to_string(),
            products: products.iter().map(Into::into).collect(),
        }
    }
}
