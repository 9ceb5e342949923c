//! Account repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use myshop_core::{AccountId, Email};

use super::RepositoryError;
use crate::models::Account;

/// Row shape for the `accounts` table.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = RepositoryError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AccountId::new(row.id),
            username: row.username,
            email,
            created_at: row.created_at,
        })
    }
}

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new account with a pre-hashed password.
    ///
    /// The unique index on `email` is the authority on duplicates; a
    /// violation maps to `RepositoryError::Conflict` so concurrent
    /// registrations cannot create two records.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<Account, RepositoryError> {
        let row: AccountRow = sqlx::query_as(
            r"
            INSERT INTO accounts (username, email, password_hash)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, email, created_at
            ",
        )
        .bind(username)
        .bind(email.as_str())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// Get an account and its password hash by email.
    ///
    /// Returns `None` if no account exists for the email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password(
        &self,
        email: &Email,
    ) -> Result<Option<(Account, String)>, RepositoryError> {
        let row: Option<(i64, String, String, DateTime<Utc>, String)> = sqlx::query_as(
            r"
            SELECT id, username, email, created_at, password_hash
            FROM accounts
            WHERE email = ?1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some((id, username, email, created_at, password_hash)) = row else {
            return Ok(None);
        };

        let account = AccountRow {
            id,
            username,
            email,
            created_at,
        }
        .try_into()?;

        Ok(Some((account, password_hash)))
    }
}
