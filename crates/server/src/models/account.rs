//! Account domain types.
//!
//! These types represent validated domain objects separate from database
//! row types. The password hash is deliberately not a field here - it is
//! only handed out by the repository call that verifies credentials.

use chrono::{DateTime, Utc};

use myshop_core::{AccountId, Email};

/// A shop account (domain type).
///
/// Created on registration; never mutated or deleted in this scope.
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Display name chosen at registration.
    pub username: String,
    /// The account's email address (unique).
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
