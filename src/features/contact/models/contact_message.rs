use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a contact form message. Append-only.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
