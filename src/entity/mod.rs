//! SeaORM table models
//!
//! One module per table. The adapters layer maps these to and from the
//! domain entities.

pub mod addresses;
pub mod companies;
pub mod flagged_reviews;
pub mod order_products;
pub mod orders;
pub mod payments;
pub mod product_reviews;
pub mod products;
pub mod users;
pub mod vendor_applications;
