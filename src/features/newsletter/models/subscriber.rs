use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a newsletter subscriber. Append-only; the unique
/// email enforces dedup.
#[derive(Debug, Clone, FromRow)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}
