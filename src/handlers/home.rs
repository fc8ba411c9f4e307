//! Home page handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{AppError, DomainError};
use crate::handlers::{ListingQuery, FETCH_PRODUCTS_ERROR};
use crate::views::ProductListPage;
use crate::AppState;

/// GET /
///
/// Renders the storefront home page with a paginated product listing.
/// `page` defaults to "1" and `page_size` to "10" when absent.
pub async fn get_home(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let products = match state
        .catalog
        .get_products(query.page(), query.page_size())
        .await
    {
        Ok(products) => products,
        Err(err @ AppError::Domain(DomainError::Validation(_))) => return err.into_response(),
        Err(err) => {
            tracing::error!("home page product fetch failed: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FETCH_PRODUCTS_ERROR })),
            )
                .into_response();
        }
    };

    match state
        .renderer
        .render("index", &ProductListPage::home(&products), "layouts/master")
    {
        Ok(html) => Html(html).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
