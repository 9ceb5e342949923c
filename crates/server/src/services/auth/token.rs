//! Session token issuance.
//!
//! Tokens are stateless HS256 JWTs binding an account id and username
//! with a fixed one-hour expiry. Validity is entirely determined by
//! signature and expiry at verification time; there is no server-side
//! session store, and no protected route consumes the token in the
//! current scope.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::models::Account;

use super::AuthError;

/// Token lifetime in seconds (1 hour).
pub const TOKEN_TTL_SECS: i64 = 3600;

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - account ID (standard JWT `sub` claim).
    pub sub: String,
    /// Username bound to the account.
    pub username: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Issue a signed session token for an account.
///
/// # Errors
///
/// Returns `AuthError::TokenSigning` if encoding fails.
pub fn issue_token(account: &Account, secret: &SecretString) -> Result<String, AuthError> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: account.id.to_string(),
        username: account.username.clone(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|_| AuthError::TokenSigning)
}

/// Decode and validate a session token (signature + expiry).
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` for any bad token - expired,
/// tampered, or signed with a different secret.
pub fn decode_token(token: &str, secret: &SecretString) -> Result<Claims, AuthError> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use myshop_core::{AccountId, Email};

    use super::*;

    fn account() -> Account {
        Account {
            id: AccountId::new(42),
            username: "alice".to_owned(),
            email: Email::parse("alice@example.com").unwrap(),
            created_at: Utc::now(),
        }
    }

    fn secret() -> SecretString {
        SecretString::from("kJ8#mN2$pQ5&rS9!tU3@vW6^xY0*zA4%")
    }

    #[test]
    fn test_token_roundtrip_binds_id_and_username() {
        let token = issue_token(&account(), &secret()).unwrap();
        let claims = decode_token(&token, &secret()).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_token_expires_after_stated_window() {
        let token = issue_token(&account(), &secret()).unwrap();
        let claims = decode_token(&token, &secret()).unwrap();

        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = issue_token(&account(), &secret()).unwrap();
        let other = SecretString::from("qX7!wE2@rT5#yU8$iO1%pA4^sD6&fG9*");

        assert!(matches!(
            decode_token(&token, &other),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            decode_token("not-a-token", &secret()),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
