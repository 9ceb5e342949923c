//! JSON API client for the shop server.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use myshop_core::Product;

/// Default API host when `MYSHOP_API_URL` is unset.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Errors from API calls.
///
/// Server 4xx messages are carried verbatim in [`ApiError::Rejected`] so
/// they can be shown to the user as-is; every other failure collapses to
/// a single generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request (4xx); message is safe to display.
    #[error("{0}")]
    Rejected(String),

    /// Network failure or any non-4xx error response.
    #[error("could not reach the shop, please try again")]
    Transport,

    /// The configured base URL is invalid.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for ApiError {
    fn from(_: reqwest::Error) -> Self {
        Self::Transport
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    /// Bearer token asserting identity (opaque to the client).
    pub token: String,
    /// Username to display.
    pub username: String,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Client for the shop's JSON API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BaseUrl` if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Create a client from `MYSHOP_API_URL`, defaulting to localhost.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BaseUrl` if the configured URL does not parse.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            std::env::var("MYSHOP_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(&base_url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` on network failure. The server never
    /// fails this read for storage reasons (it degrades to a placeholder
    /// record instead).
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/products")?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Register a new account, returning the server's success message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's message for a
    /// duplicate email or invalid input; `ApiError::Transport` otherwise.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/register")?)
            .json(&RegisterBody {
                username,
                email,
                password,
            })
            .send()
            .await?;
        let response = check_status(response).await?;
        let body: MessageBody = response.json().await?;
        Ok(body.message)
    }

    /// Login, returning the token and username to persist.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` for bad credentials (the server does
    /// not say which part was wrong); `ApiError::Transport` otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/api/login")?)
            .json(&LoginBody { email, password })
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Map an error response to the client error taxonomy.
///
/// 4xx bodies carry a displayable `{"error": ...}` message; anything else
/// (5xx, malformed body) collapses to the generic transport error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status.is_client_error() {
        if let Ok(body) = response.json::<ErrorBody>().await {
            return Err(ApiError::Rejected(body.error));
        }
    }

    Err(ApiError::Transport)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BaseUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_path() {
        let client = ApiClient::new("http://localhost:5000").unwrap();
        let url = client.endpoint("/api/products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/products");
    }

    #[test]
    fn test_transport_error_message_is_generic() {
        assert_eq!(
            ApiError::Transport.to_string(),
            "could not reach the shop, please try again"
        );
    }

    #[test]
    fn test_rejected_message_is_verbatim() {
        let err = ApiError::Rejected("email already registered".to_owned());
        assert_eq!(err.to_string(), "email already registered");
    }
}
