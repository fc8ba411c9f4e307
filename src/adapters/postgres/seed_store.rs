//! PostgreSQL adapter for SeedStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::domain::entities::{
    CompanyId, NewAddress, NewCompany, NewFlaggedReview, NewOrder, NewOrderProduct, NewPayment,
    NewProduct, NewProductReview, NewUser, NewVendorApplication, OrderId, ProductId,
    ProductReviewId, UserId,
};
use crate::domain::ports::SeedStore;
use crate::entity::{
    addresses, companies, flagged_reviews, order_products, orders, payments, product_reviews,
    products, users, vendor_applications,
};
use crate::error::DomainError;

/// PostgreSQL implementation of SeedStore
pub struct PostgresSeedStore {
    db: DatabaseConnection,
}

impl PostgresSeedStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeedStore for PostgresSeedStore {
    async fn insert_user(&self, user: &NewUser) -> Result<UserId, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        users::ActiveModel {
            id: Set(id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(UserId(id))
    }

    async fn insert_company(&self, company: &NewCompany) -> Result<CompanyId, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        companies::ActiveModel {
            id: Set(id),
            user_id: Set(company.user_id.0),
            name: Set(company.name.clone()),
            slug: Set(company.slug.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(CompanyId(id))
    }

    async fn insert_vendor_application(
        &self,
        application: &NewVendorApplication,
    ) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        vendor_applications::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_id: Set(application.company_id.0),
            status: Set(application.status.to_string()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<ProductId, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        products::ActiveModel {
            id: Set(id),
            company_id: Set(product.company_id.0),
            name: Set(product.name.clone()),
            cost: Set(product.cost),
            shippable: Set(product.shippable),
            free_delivery: Set(product.free_delivery),
            short_description: Set(product.short_description.clone()),
            long_description: Set(product.long_description.clone()),
            product_details: Set(product.product_details.clone()),
            image_path: Set(product.image_path.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ProductId(id))
    }

    async fn insert_product_review(
        &self,
        review: &NewProductReview,
    ) -> Result<ProductReviewId, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        product_reviews::ActiveModel {
            id: Set(id),
            user_id: Set(review.user_id.0),
            product_id: Set(review.product_id.0),
            score: Set(review.score),
            content: Set(review.content.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ProductReviewId(id))
    }

    async fn insert_flagged_review(&self, flag: &NewFlaggedReview) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        flagged_reviews::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_review_id: Set(flag.product_review_id.0),
            flagged_from_ip: Set(flag.flagged_from_ip.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<OrderId, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        orders::ActiveModel {
            id: Set(id),
            user_id: Set(order.user_id.0),
            reference: Set(order.reference.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(OrderId(id))
    }

    async fn insert_order_product(&self, line: &NewOrderProduct) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        order_products::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(line.order_id.0),
            product_id: Set(line.product_id.0),
            quantity: Set(line.quantity),
            cost: Set(line.cost),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn insert_address(&self, address: &NewAddress) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        addresses::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(address.user_id.0),
            phone_number_extension: Set(address.phone_number_extension.clone()),
            phone_number: Set(address.phone_number.clone()),
            building_name: Set(address.building_name.clone()),
            street_address1: Set(address.street_address1.clone()),
            city: Set(address.city.clone()),
            country: Set(address.country.clone()),
            postcode: Set(address.postcode.clone()),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn insert_payment(&self, payment: &NewPayment) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(payment.user_id.0),
            card_number: Set(payment.card_number.clone()),
            expiry_month: Set(payment.expiry_month),
            expiry_year: Set(payment.expiry_year),
            created_at: Set(Some(now)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}
