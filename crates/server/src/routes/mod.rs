//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (verifies storage)
//!
//! # API (JSON)
//! GET  /api/products        - Full catalog (placeholder on storage outage)
//! POST /api/register        - Create an account
//! POST /api/login           - Verify credentials, issue session token
//! ```

pub mod accounts;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
}
