//! User entity model.

use serde::Serialize;
use sqlx::FromRow;

use compass_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `password_hash` never leaves the backend; handlers expose the public
/// subset through their own response types.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// One of `free`, `standard`, `premium`.
    pub subscription_tier: String,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user.
#[derive(Debug)]
pub struct CreateUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub subscription_tier: &'a str,
}
