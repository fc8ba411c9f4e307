//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They
//! store data in memory and record calls so tests can verify behavior.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{
    CompanyId, NewAddress, NewCompany, NewFlaggedReview, NewOrder, NewOrderProduct, NewPayment,
    NewProduct, NewProductReview, NewUser, NewVendorApplication, OrderId, Product, ProductId,
    ProductReviewId, UserId,
};
use crate::domain::ports::{ProductCatalog, SeedStore};
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Catalog
// ============================================================================

/// In-memory ProductCatalog that pages over a fixed product list and
/// records every effective (page, page_size) query.
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
    fail: bool,
    calls: Arc<Mutex<Vec<(u64, u64)>>>,
}

impl InMemoryProductCatalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A catalog whose every query fails, for error-path tests
    pub fn failing() -> Self {
        Self {
            products: Vec::new(),
            fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded (page, page_size) queries
    pub fn calls(&self) -> Arc<Mutex<Vec<(u64, u64)>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_page(&self, page: u64, page_size: u64) -> Result<Vec<Product>, DomainError> {
        self.calls.lock().unwrap().push((page, page_size));

        if self.fail {
            return Err(DomainError::Database("connection refused".to_string()));
        }

        let offset = (page.saturating_sub(1) * page_size) as usize;
        Ok(self
            .products
            .iter()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Recording Seed Store
// ============================================================================

/// One recorded insert, with the references later assertions care about
#[derive(Debug, Clone)]
pub enum SeedRecord {
    User { id: UserId },
    Company { id: CompanyId, user_id: UserId },
    VendorApplication { company_id: CompanyId },
    Product { id: ProductId, company_id: CompanyId },
    ProductReview { id: ProductReviewId },
    FlaggedReview { product_review_id: ProductReviewId },
    Order { id: OrderId, user_id: UserId },
    OrderProduct { order_id: OrderId, product_id: ProductId },
    Address { user_id: UserId },
    Payment { user_id: UserId },
}

impl SeedRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            SeedRecord::User { .. } => "users",
            SeedRecord::Company { .. } => "companies",
            SeedRecord::VendorApplication { .. } => "vendor_applications",
            SeedRecord::Product { .. } => "products",
            SeedRecord::ProductReview { .. } => "product_reviews",
            SeedRecord::FlaggedReview { .. } => "flagged_reviews",
            SeedRecord::Order { .. } => "orders",
            SeedRecord::OrderProduct { .. } => "order_products",
            SeedRecord::Address { .. } => "addresses",
            SeedRecord::Payment { .. } => "payments",
        }
    }
}

/// SeedStore that records every insert in order and can be configured to
/// fail when a given entity kind is first inserted.
pub struct RecordingSeedStore {
    records: Arc<Mutex<Vec<SeedRecord>>>,
    fail_on: Option<&'static str>,
}

impl RecordingSeedStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
        }
    }

    /// Fail the first insert of the named entity kind
    pub fn failing_on(kind: &'static str) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail_on: Some(kind),
        }
    }

    /// Snapshot of everything inserted so far, in insertion order
    pub fn records(&self) -> Vec<SeedRecord> {
        self.records.lock().unwrap().clone()
    }

    fn record(&self, record: SeedRecord) -> Result<(), DomainError> {
        if self.fail_on == Some(record.kind()) {
            return Err(DomainError::Database(format!(
                "simulated failure inserting {}",
                record.kind()
            )));
        }
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

impl Default for RecordingSeedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeedStore for RecordingSeedStore {
    async fn insert_user(&self, _user: &NewUser) -> Result<UserId, DomainError> {
        let id = UserId::new();
        self.record(SeedRecord::User { id })?;
        Ok(id)
    }

    async fn insert_company(&self, company: &NewCompany) -> Result<CompanyId, DomainError> {
        let id = CompanyId::new();
        self.record(SeedRecord::Company {
            id,
            user_id: company.user_id,
        })?;
        Ok(id)
    }

    async fn insert_vendor_application(
        &self,
        application: &NewVendorApplication,
    ) -> Result<(), DomainError> {
        self.record(SeedRecord::VendorApplication {
            company_id: application.company_id,
        })
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<ProductId, DomainError> {
        let id = ProductId::new();
        self.record(SeedRecord::Product {
            id,
            company_id: product.company_id,
        })?;
        Ok(id)
    }

    async fn insert_product_review(
        &self,
        _review: &NewProductReview,
    ) -> Result<ProductReviewId, DomainError> {
        let id = ProductReviewId::new();
        self.record(SeedRecord::ProductReview { id })?;
        Ok(id)
    }

    async fn insert_flagged_review(&self, flag: &NewFlaggedReview) -> Result<(), DomainError> {
        self.record(SeedRecord::FlaggedReview {
            product_review_id: flag.product_review_id,
        })
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<OrderId, DomainError> {
        let id = OrderId::new();
        self.record(SeedRecord::Order {
            id,
            user_id: order.user_id,
        })?;
        Ok(id)
    }

    async fn insert_order_product(&self, line: &NewOrderProduct) -> Result<(), DomainError> {
        self.record(SeedRecord::OrderProduct {
            order_id: line.order_id,
            product_id: line.product_id,
        })
    }

    async fn insert_address(&self, address: &NewAddress) -> Result<(), DomainError> {
        self.record(SeedRecord::Address {
            user_id: address.user_id,
        })
    }

    async fn insert_payment(&self, payment: &NewPayment) -> Result<(), DomainError> {
        self.record(SeedRecord::Payment {
            user_id: payment.user_id,
        })
    }
}
