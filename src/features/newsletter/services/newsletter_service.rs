use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::newsletter::dtos::SubscribeResponseDto;

/// Service for newsletter subscriptions
pub struct NewsletterService {
    pool: SqlitePool,
}

impl NewsletterService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Subscribe an email. Duplicates are not an error: the unique
    /// constraint backs the upsert and the outcome reports whether a row
    /// was created.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeResponseDto> {
        let email = email.trim().to_lowercase();

        let result = sqlx::query(
            "INSERT INTO subscribers (email, subscribed_at) VALUES (?1, ?2) \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(&email)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to subscribe email: {:?}", e);
            AppError::Database(e)
        })?;

        let subscribed = result.rows_affected() == 1;
        if subscribed {
            tracing::info!("Newsletter subscription: email={}", email);
        }

        Ok(SubscribeResponseDto { subscribed, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn test_subscribe_dedups_by_email() {
        let pool = test_pool().await;
        let service = NewsletterService::new(pool.clone());

        let first = service.subscribe("reader@example.com").await.unwrap();
        assert!(first.subscribed);

        // Case/whitespace variants land on the same row
        let second = service.subscribe("  Reader@Example.com ").await.unwrap();
        assert!(!second.subscribed);

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscribers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
