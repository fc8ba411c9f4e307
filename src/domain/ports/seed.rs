//! Seed store port
//!
//! Write access used by the startup seeder. Inserts that later seed tasks
//! depend on return the created id so dependents can reference real rows.

use async_trait::async_trait;

use crate::domain::entities::{
    CompanyId, NewAddress, NewCompany, NewFlaggedReview, NewOrder, NewOrderProduct, NewPayment,
    NewProduct, NewProductReview, NewUser, NewVendorApplication, OrderId, ProductId,
    ProductReviewId, UserId,
};
use crate::error::DomainError;

/// Persistence operations for the ten seed entities
#[async_trait]
pub trait SeedStore: Send + Sync {
    async fn insert_user(&self, user: &NewUser) -> Result<UserId, DomainError>;

    async fn insert_company(&self, company: &NewCompany) -> Result<CompanyId, DomainError>;

    async fn insert_vendor_application(
        &self,
        application: &NewVendorApplication,
    ) -> Result<(), DomainError>;

    async fn insert_product(&self, product: &NewProduct) -> Result<ProductId, DomainError>;

    async fn insert_product_review(
        &self,
        review: &NewProductReview,
    ) -> Result<ProductReviewId, DomainError>;

    async fn insert_flagged_review(&self, flag: &NewFlaggedReview) -> Result<(), DomainError>;

    async fn insert_order(&self, order: &NewOrder) -> Result<OrderId, DomainError>;

    async fn insert_order_product(&self, line: &NewOrderProduct) -> Result<(), DomainError>;

    async fn insert_address(&self, address: &NewAddress) -> Result<(), DomainError>;

    async fn insert_payment(&self, payment: &NewPayment) -> Result<(), DomainError>;
}
