//! Database operations for the shop's `SQLite` store.
//!
//! ## Tables
//!
//! - `products` - The catalog (read path; seeded via the operator CLI)
//! - `accounts` - Email/password credentials (hash only, never plaintext)
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p myshop-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use thiserror::Error;

pub mod accounts;
pub mod products;

pub use accounts::AccountRepository;
pub use products::ProductRepository;

/// Embedded migrations for the shop database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The requested row does not exist.
    #[error("not found")]
    NotFound,

    /// A stored value failed to parse into its domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
