//! Startup demo-data seeding
//!
//! Ten seed tasks run strictly in the order given by `SEED_ORDER`, so that
//! dependent rows are only created after the rows they reference exist
//! (order lines after orders and products, and so on). The first failing
//! task aborts the run; rows created by earlier tasks stay committed.
//! The seeder runs once, before the listener starts accepting traffic.

use std::sync::Arc;

use rand::Rng;

use crate::domain::entities::{
    hidden_card_number, CompanyId, NewAddress, NewCompany, NewFlaggedReview, NewOrder,
    NewOrderProduct, NewPayment, NewProduct, NewProductReview, NewUser, NewVendorApplication,
    OrderId, ProductId, ProductReviewId, UserId, VendorApplicationStatus,
};
use crate::domain::ports::SeedStore;
use crate::error::{DomainError, SeedError};

/// One entity-seeding step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTask {
    Users,
    Companies,
    VendorApplications,
    Products,
    ProductReviews,
    FlaggedReviews,
    Orders,
    OrderProducts,
    Addresses,
    Payments,
}

impl SeedTask {
    pub fn name(self) -> &'static str {
        match self {
            SeedTask::Users => "users",
            SeedTask::Companies => "companies",
            SeedTask::VendorApplications => "vendor_applications",
            SeedTask::Products => "products",
            SeedTask::ProductReviews => "product_reviews",
            SeedTask::FlaggedReviews => "flagged_reviews",
            SeedTask::Orders => "orders",
            SeedTask::OrderProducts => "order_products",
            SeedTask::Addresses => "addresses",
            SeedTask::Payments => "payments",
        }
    }
}

impl std::fmt::Display for SeedTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entity order is load-bearing: each task may reference rows created by
/// the tasks before it.
pub const SEED_ORDER: [SeedTask; 10] = [
    SeedTask::Users,
    SeedTask::Companies,
    SeedTask::VendorApplications,
    SeedTask::Products,
    SeedTask::ProductReviews,
    SeedTask::FlaggedReviews,
    SeedTask::Orders,
    SeedTask::OrderProducts,
    SeedTask::Addresses,
    SeedTask::Payments,
];

const DEMO_USERS: usize = 5;
const DEMO_COMPANIES: usize = 3;
const DEMO_VENDOR_APPLICATIONS: usize = 2;
const DEMO_PRODUCTS: usize = 12;
const DEMO_REVIEWS: usize = 10;
const DEMO_FLAGGED_REVIEWS: usize = 2;
const DEMO_ORDERS: usize = 4;

const FIRST_NAMES: [&str; DEMO_USERS] = ["Amara", "Dominic", "Freya", "Kofi", "Imogen"];
const LAST_NAMES: [&str; DEMO_USERS] = ["Osei", "Hartley", "Lindqvist", "Mensah", "Brooke"];

const COMPANY_NAMES: [&str; DEMO_COMPANIES] =
    ["Harbour Goods", "Fenwick & Drake", "Moss Lane Supply"];

const PRODUCT_NAMES: [&str; DEMO_PRODUCTS] = [
    "Walnut Chopping Board",
    "Enamel Teapot",
    "Linen Apron",
    "Cast Iron Skillet",
    "Stoneware Mug",
    "Beeswax Candles",
    "Oak Serving Tray",
    "Copper Pour-Over Kettle",
    "Wool Picnic Blanket",
    "Ceramic Butter Dish",
    "Leather Journal",
    "Brass Desk Lamp",
];

const REVIEW_PHRASES: [&str; 5] = [
    "Exactly as described, arrived quickly.",
    "Solid quality for the price.",
    "Not quite what I expected, but it grew on me.",
    "Bought one as a gift and kept one for myself.",
    "Does the job. Packaging could be better.",
];

const STREETS: [&str; DEMO_USERS] = [
    "14 Alderton Road",
    "3 Whitefriars Lane",
    "88 Penrose Street",
    "52 Cobbler's Yard",
    "7 Marsh View",
];
const CITIES: [&str; DEMO_USERS] =
    ["Leeds", "Bristol", "Norwich", "Glasgow", "Sheffield"];
const POSTCODES: [&str; DEMO_USERS] = ["LS1 4DY", "BS2 8QH", "NR3 1AB", "G12 8QQ", "S1 2HE"];

/// Ids created by earlier tasks, consumed by later ones
#[derive(Default)]
struct SeedContext {
    users: Vec<UserId>,
    companies: Vec<CompanyId>,
    products: Vec<ProductId>,
    reviews: Vec<ProductReviewId>,
    orders: Vec<OrderId>,
}

/// Runs the fixed seed sequence against a SeedStore
pub struct Seeder {
    store: Arc<dyn SeedStore>,
}

impl Seeder {
    pub fn new(store: Arc<dyn SeedStore>) -> Self {
        Self { store }
    }

    /// Execute every task in `SEED_ORDER`, stopping at the first failure.
    pub async fn run(&self) -> Result<(), SeedError> {
        let mut ctx = SeedContext::default();

        for task in SEED_ORDER {
            tracing::info!(task = task.name(), "seeding");
            self.run_task(task, &mut ctx)
                .await
                .map_err(|source| SeedError {
                    task: task.name(),
                    source,
                })?;
        }

        Ok(())
    }

    async fn run_task(&self, task: SeedTask, ctx: &mut SeedContext) -> Result<(), DomainError> {
        match task {
            SeedTask::Users => self.seed_users(ctx).await,
            SeedTask::Companies => self.seed_companies(ctx).await,
            SeedTask::VendorApplications => self.seed_vendor_applications(ctx).await,
            SeedTask::Products => self.seed_products(ctx).await,
            SeedTask::ProductReviews => self.seed_product_reviews(ctx).await,
            SeedTask::FlaggedReviews => self.seed_flagged_reviews(ctx).await,
            SeedTask::Orders => self.seed_orders(ctx).await,
            SeedTask::OrderProducts => self.seed_order_products(ctx).await,
            SeedTask::Addresses => self.seed_addresses(ctx).await,
            SeedTask::Payments => self.seed_payments(ctx).await,
        }
    }

    async fn seed_users(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for i in 0..DEMO_USERS {
            let user = NewUser {
                first_name: FIRST_NAMES[i].to_string(),
                last_name: LAST_NAMES[i].to_string(),
                email: format!(
                    "{}.{}@example.com",
                    FIRST_NAMES[i].to_lowercase(),
                    LAST_NAMES[i].to_lowercase()
                ),
                // demo accounts share one throwaway hash
                password_hash: "$2b$12$demo-seed-password-hash".to_string(),
            };
            let id = self.store.insert_user(&user).await?;
            ctx.users.push(id);
        }
        Ok(())
    }

    async fn seed_companies(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for (i, name) in COMPANY_NAMES.iter().enumerate() {
            let company = NewCompany {
                user_id: ctx.users[i % ctx.users.len()],
                name: name.to_string(),
                slug: name
                    .to_lowercase()
                    .split_whitespace()
                    .filter(|word| *word != "&")
                    .collect::<Vec<_>>()
                    .join("-"),
            };
            let id = self.store.insert_company(&company).await?;
            ctx.companies.push(id);
        }
        Ok(())
    }

    async fn seed_vendor_applications(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for i in 0..DEMO_VENDOR_APPLICATIONS {
            let application = NewVendorApplication {
                company_id: ctx.companies[i % ctx.companies.len()],
                status: if i == 0 {
                    VendorApplicationStatus::Approved
                } else {
                    VendorApplicationStatus::Pending
                },
            };
            self.store.insert_vendor_application(&application).await?;
        }
        Ok(())
    }

    async fn seed_products(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for (i, name) in PRODUCT_NAMES.iter().enumerate() {
            let product = NewProduct {
                company_id: ctx.companies[i % ctx.companies.len()],
                name: name.to_string(),
                cost: demo_cost(),
                shippable: true,
                free_delivery: i % 4 == 0,
                short_description: format!("{} from an independent maker.", name),
                long_description: format!(
                    "{} made in small batches. Each piece is checked by hand before dispatch.",
                    name
                ),
                product_details: "Dispatched within 2 working days.".to_string(),
                image_path: None,
            };
            let id = self.store.insert_product(&product).await?;
            ctx.products.push(id);
        }
        Ok(())
    }

    async fn seed_product_reviews(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for i in 0..DEMO_REVIEWS {
            let review = NewProductReview {
                user_id: ctx.users[i % ctx.users.len()],
                product_id: ctx.products[i % ctx.products.len()],
                score: rand::thread_rng().gen_range(1..=5),
                content: REVIEW_PHRASES[i % REVIEW_PHRASES.len()].to_string(),
            };
            let id = self.store.insert_product_review(&review).await?;
            ctx.reviews.push(id);
        }
        Ok(())
    }

    async fn seed_flagged_reviews(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for i in 0..DEMO_FLAGGED_REVIEWS {
            let flag = NewFlaggedReview {
                product_review_id: ctx.reviews[i % ctx.reviews.len()],
                flagged_from_ip: format!("203.0.113.{}", 10 + i),
            };
            self.store.insert_flagged_review(&flag).await?;
        }
        Ok(())
    }

    async fn seed_orders(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for i in 0..DEMO_ORDERS {
            let order = NewOrder {
                user_id: ctx.users[i % ctx.users.len()],
                reference: format!("ORD-{:05}", i + 1),
            };
            let id = self.store.insert_order(&order).await?;
            ctx.orders.push(id);
        }
        Ok(())
    }

    async fn seed_order_products(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for (i, order_id) in ctx.orders.iter().enumerate() {
            let line_count = rand::thread_rng().gen_range(1..=3);
            for line in 0..line_count {
                let order_line = NewOrderProduct {
                    order_id: *order_id,
                    product_id: ctx.products[(i + line) % ctx.products.len()],
                    quantity: rand::thread_rng().gen_range(1..=3),
                    cost: demo_cost(),
                };
                self.store.insert_order_product(&order_line).await?;
            }
        }
        Ok(())
    }

    async fn seed_addresses(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for (i, user_id) in ctx.users.iter().enumerate() {
            let address = NewAddress {
                user_id: *user_id,
                phone_number_extension: "+44".to_string(),
                phone_number: format!("7700 9001{:02}", i),
                building_name: (i + 1).to_string(),
                street_address1: STREETS[i % STREETS.len()].to_string(),
                city: CITIES[i % CITIES.len()].to_string(),
                country: "United Kingdom".to_string(),
                postcode: POSTCODES[i % POSTCODES.len()].to_string(),
            };
            self.store.insert_address(&address).await?;
        }
        Ok(())
    }

    async fn seed_payments(&self, ctx: &mut SeedContext) -> Result<(), DomainError> {
        for user_id in &ctx.users {
            let payment = demo_payment(*user_id);
            self.store.insert_payment(&payment).await?;
            tracing::debug!(
                card = %hidden_card_number(&payment.card_number),
                "seeded payment method"
            );
        }
        Ok(())
    }
}

/// A plausible demo price between £4.00 and £79.99
fn demo_cost() -> f64 {
    rand::thread_rng().gen_range(400..8000) as f64 / 100.0
}

fn demo_payment(user_id: UserId) -> NewPayment {
    let mut rng = rand::thread_rng();
    NewPayment {
        user_id,
        card_number: format!("4{:015}", rng.gen_range(0..1_000_000_000_000_000_u64)),
        expiry_month: rng.gen_range(1..=12),
        expiry_year: rng.gen_range(2027..=2031),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingSeedStore, SeedRecord};

    fn kinds_in_first_seen_order(records: &[SeedRecord]) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        for record in records {
            if kinds.last() != Some(&record.kind()) {
                kinds.push(record.kind());
            }
        }
        kinds
    }

    #[tokio::test]
    async fn tasks_run_in_the_fixed_entity_order() {
        let store = Arc::new(RecordingSeedStore::new());
        let seeder = Seeder::new(store.clone());

        seeder.run().await.unwrap();

        let records = store.records();
        let expected: Vec<&'static str> = SEED_ORDER.iter().map(|t| t.name()).collect();
        assert_eq!(kinds_in_first_seen_order(&records), expected);
    }

    #[tokio::test]
    async fn a_failed_task_stops_the_sequence() {
        let store = Arc::new(RecordingSeedStore::failing_on("products"));
        let seeder = Seeder::new(store.clone());

        let err = seeder.run().await.unwrap_err();

        assert_eq!(err.task, "products");
        let kinds: Vec<&'static str> =
            store.records().iter().map(|r| r.kind()).collect();
        assert!(kinds.contains(&"users"));
        assert!(kinds.contains(&"companies"));
        assert!(kinds.contains(&"vendor_applications"));
        assert!(!kinds.contains(&"products"));
        assert!(!kinds.contains(&"product_reviews"));
        assert!(!kinds.contains(&"orders"));
        assert!(!kinds.contains(&"payments"));
    }

    #[tokio::test]
    async fn earlier_rows_stay_recorded_after_a_failure() {
        let store = Arc::new(RecordingSeedStore::failing_on("companies"));
        let seeder = Seeder::new(store.clone());

        seeder.run().await.unwrap_err();

        let user_count = store
            .records()
            .iter()
            .filter(|r| r.kind() == "users")
            .count();
        assert_eq!(user_count, DEMO_USERS);
    }

    #[tokio::test]
    async fn dependent_rows_reference_seeded_ids() {
        let store = Arc::new(RecordingSeedStore::new());
        let seeder = Seeder::new(store.clone());

        seeder.run().await.unwrap();

        let records = store.records();
        let users: Vec<UserId> = records
            .iter()
            .filter_map(|r| match r {
                SeedRecord::User { id } => Some(*id),
                _ => None,
            })
            .collect();
        let companies: Vec<CompanyId> = records
            .iter()
            .filter_map(|r| match r {
                SeedRecord::Company { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        let products: Vec<ProductId> = records
            .iter()
            .filter_map(|r| match r {
                SeedRecord::Product { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        let reviews: Vec<ProductReviewId> = records
            .iter()
            .filter_map(|r| match r {
                SeedRecord::ProductReview { id } => Some(*id),
                _ => None,
            })
            .collect();
        let orders: Vec<OrderId> = records
            .iter()
            .filter_map(|r| match r {
                SeedRecord::Order { id, .. } => Some(*id),
                _ => None,
            })
            .collect();

        for record in &records {
            match record {
                SeedRecord::Company { user_id, .. } | SeedRecord::Order { user_id, .. } => {
                    assert!(users.contains(user_id));
                }
                SeedRecord::VendorApplication { company_id }
                | SeedRecord::Product { company_id, .. } => {
                    assert!(companies.contains(company_id));
                }
                SeedRecord::FlaggedReview { product_review_id } => {
                    assert!(reviews.contains(product_review_id));
                }
                SeedRecord::OrderProduct {
                    order_id,
                    product_id,
                } => {
                    assert!(orders.contains(order_id));
                    assert!(products.contains(product_id));
                }
                SeedRecord::Address { user_id } | SeedRecord::Payment { user_id } => {
                    assert!(users.contains(user_id));
                }
                SeedRecord::User { .. } | SeedRecord::ProductReview { .. } => {}
            }
        }
    }

    #[tokio::test]
    async fn seeds_the_documented_demo_volumes() {
        let store = Arc::new(RecordingSeedStore::new());
        let seeder = Seeder::new(store.clone());

        seeder.run().await.unwrap();

        let records = store.records();
        let count = |kind: &str| records.iter().filter(|r| r.kind() == kind).count();

        assert_eq!(count("users"), DEMO_USERS);
        assert_eq!(count("companies"), DEMO_COMPANIES);
        assert_eq!(count("vendor_applications"), DEMO_VENDOR_APPLICATIONS);
        assert_eq!(count("products"), DEMO_PRODUCTS);
        assert_eq!(count("product_reviews"), DEMO_REVIEWS);
        assert_eq!(count("flagged_reviews"), DEMO_FLAGGED_REVIEWS);
        assert_eq!(count("orders"), DEMO_ORDERS);
        assert_eq!(count("addresses"), DEMO_USERS);
        assert_eq!(count("payments"), DEMO_USERS);
    }
}
