//! Account route handlers: registration and login.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/register` - create an account.
///
/// Responds 201 with a message only; no sensitive data is echoed.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let account = state
        .auth()
        .register(&body.username, &body.email, &body.password)
        .await?;

    tracing::info!(account_id = %account.id, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "registration successful" })),
    ))
}

/// `POST /api/login` - verify credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let outcome = state.auth().login(&body.email, &body.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        username: outcome.username,
    }))
}
