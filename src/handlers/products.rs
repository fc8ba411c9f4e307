//! Product listing handler

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

/// GET /products
///
/// Renders the full product listing page. Same pagination contract as the
/// home page: `page` defaults to "1", `page_size` to "10".
pub async fn list_products(
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
            tracing::error!("product listing fetch failed: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FETCH_PRODUCTS_ERROR })),
            )
                .into_response();
        }
    };

    match state.renderer.render(
        "products",
        &ProductListPage::products(&products),
        "layouts/master",
    ) {
        Ok(html) => Html(html).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
