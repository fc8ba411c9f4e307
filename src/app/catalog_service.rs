//! Catalog service
//!
//! The catalog accessor: owns the query-parameter parsing policy and
//! delegates paginated reads to the ProductCatalog port. Page values
//! arrive as raw query-string text; invalid values are rejected rather
//! than clamped.

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::ports::ProductCatalog;
use crate::error::{AppError, DomainError};

/// Upper bound on a single listing query
pub const MAX_PAGE_SIZE: u64 = 100;

/// Service for paginated product reads
pub struct CatalogService {
    catalog: Arc<dyn ProductCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    /// Fetch one page of products. Both parameters are raw query-string
    /// values and must parse to positive integers.
    pub async fn get_products(
        &self,
        page: &str,
        page_size: &str,
    ) -> Result<Vec<Product>, AppError> {
        let page = parse_page_param("page", page)?;
        let page_size = parse_page_param("page_size", page_size)?;

        if page_size > MAX_PAGE_SIZE {
            return Err(DomainError::Validation(format!(
                "page_size must be at most {}",
                MAX_PAGE_SIZE
            ))
            .into());
        }

        Ok(self.catalog.find_page(page, page_size).await?)
    }
}

fn parse_page_param(name: &str, raw: &str) -> Result<u64, DomainError> {
    let value: u64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::Validation(format!("{} must be a positive integer", name)))?;

    if value == 0 {
        return Err(DomainError::Validation(format!(
            "{} must be at least 1",
            name
        )));
    }

    Ok(value)
}
