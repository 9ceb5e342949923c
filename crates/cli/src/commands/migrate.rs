//! Database migration command.
//!
//! Runs the migrations embedded in the server crate. The server does not
//! migrate on startup; this command is the one place the schema changes.

use tracing::info;

use myshop_server::db::MIGRATOR;

/// Run the shop database migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    info!("Running migrations...");
    MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    Ok(())
}
