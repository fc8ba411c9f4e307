//! PostgreSQL adapter for ProductCatalog

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use crate::domain::entities::Product;
use crate::domain::ports::ProductCatalog;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductCatalog
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCatalog for PostgresProductRepository {
    async fn find_page(&self, page: u64, page_size: u64) -> Result<Vec<Product>, DomainError> {
        // page is 1-based; the id tie-break keeps paging stable when
        // several rows share a creation timestamp
        let offset = page.saturating_sub(1) * page_size;

        let results = products::Entity::find()
            .order_by_asc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id)
            .offset(offset)
            .limit(page_size)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}
