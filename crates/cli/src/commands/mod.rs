//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::SqlitePool;

/// Connect to the shop database using the environment configuration.
///
/// Shared setup for every command: load `.env`, resolve the database URL
/// the same way the server does, and open a pool.
pub async fn connect() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("MYSHOP_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "MYSHOP_DATABASE_URL not set")?;

    let pool = myshop_server::db::create_pool(&database_url).await?;
    Ok(pool)
}
