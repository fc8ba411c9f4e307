//! Product catalog port

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::error::DomainError;

/// Paginated read access to the product catalog
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch one page of products. `page` is 1-based; the result holds at
    /// most `page_size` products offset by `(page - 1) * page_size`, in
    /// stable listing order.
    async fn find_page(&self, page: u64, page_size: u64) -> Result<Vec<Product>, DomainError>;
}
