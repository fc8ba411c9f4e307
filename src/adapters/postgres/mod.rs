//! PostgreSQL adapters
//!
//! Implementations of the catalog and seed-store traits using SeaORM and
//! PostgreSQL.

pub mod product_repo;
pub mod seed_store;

pub use product_repo::PostgresProductRepository;
pub use seed_store::PostgresSeedStore;
