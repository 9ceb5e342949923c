//! Catalog route handlers.

use axum::{Json, extract::State};

use myshop_core::Product;

use crate::state::AppState;

/// `GET /api/products` - the full catalog in storage order.
///
/// Never fails for storage reasons: an unreachable store yields the
/// single placeholder record (see `CatalogService::list_products`).
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().list_products().await)
}
