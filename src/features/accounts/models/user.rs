use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a user account.
///
/// `admin_key_hash` holds the per-account secondary credential required by
/// the admin verification step; it is only ever set for superusers.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub admin_key_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}
