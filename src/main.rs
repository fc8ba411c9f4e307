//! Storefront web application
//!
//! Server-rendered product listings over a PostgreSQL catalog. On boot the
//! process seeds demo data (users through payment methods, in dependency
//! order), then serves the home and product listing pages plus static
//! assets.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use sea_orm::Database;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod seed;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresProductRepository, PostgresSeedStore};
use app::CatalogService;
use config::Config;
use seed::Seeder;
use views::ViewRenderer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub renderer: Arc<ViewRenderer>,
}

/// Build the router: two page routes, static assets as the fallback, and
/// request logging over everything.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::get_home))
        .route("/products", get(handlers::list_products))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storefront...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    let renderer = Arc::new(
        ViewRenderer::from_glob(&config.templates_glob).expect("Failed to load templates"),
    );

    // Seed demo data before the listener starts; a failure here is fatal
    tracing::info!("Seeding demo data...");
    let seeder = Seeder::new(Arc::new(PostgresSeedStore::new(db.clone())));
    seeder.run().await.expect("Seeding failed");
    tracing::info!("Seeding complete");

    let catalog = Arc::new(CatalogService::new(Arc::new(
        PostgresProductRepository::new(db.clone()),
    )));

    let state = AppState { catalog, renderer };
    let app = build_router(state, &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
