//! Authentication service.
//!
//! Registration hashes the password (bcrypt, fixed cost) and creates the
//! account; login verifies the hash and issues a stateless session token.

mod error;
mod token;

pub use error::AuthError;
pub use token::{Claims, TOKEN_TTL_SECS, decode_token, issue_token};

use secrecy::SecretString;
use sqlx::SqlitePool;

use myshop_core::Email;

use crate::db::RepositoryError;
use crate::db::accounts::AccountRepository;
use crate::models::Account;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Fixed bcrypt cost factor (rounds).
const HASH_COST: u32 = 10;

/// A successful login: the signed token plus the username to display.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed bearer token (HS256 JWT, 1-hour expiry).
    pub token: String,
    /// Username bound into the token.
    pub username: String,
}

/// Authentication service.
///
/// Handles account registration and login.
pub struct AuthService<'a> {
    accounts: AccountRepository<'a>,
    jwt_secret: &'a SecretString,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, jwt_secret: &'a SecretString) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
            jwt_secret,
        }
    }

    /// Register a new account with username, email, and password.
    ///
    /// The password is stored only as a salted one-way hash; nothing
    /// sensitive is echoed back on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthError> {
        // Validate email
        let email = Email::parse(email)?;

        // Validate password
        validate_password(password)?;

        // Hash password
        let password_hash = hash_password(password)?;

        // Create account; the storage-level unique index reports the
        // duplicate, so there is no check-then-insert race window.
        let account = self
            .accounts
            .create(username, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::DuplicateEmail,
                other => AuthError::Repository(other),
            })?;

        Ok(account)
    }

    /// Login with email and password, issuing a session token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password - the two are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        // A malformed email can't match any account; same opaque error.
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let (account, password_hash) = self
            .accounts
            .get_with_password(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        let token = issue_token(&account, self.jwt_secret)?;

        Ok(LoginOutcome {
            token,
            username: account.username,
        })
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using bcrypt at the fixed cost factor.
fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, HASH_COST).map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    match bcrypt::verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(AuthError::InvalidCredentials),
    }
}
