use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::{ContactMessageResponseDto, CreateContactMessageDto};
use crate::features::contact::models::ContactMessage;

/// Service for contact form submissions
pub struct ContactService {
    pool: SqlitePool,
}

impl ContactService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a contact form message
    pub async fn create(&self, dto: CreateContactMessageDto) -> Result<ContactMessageResponseDto> {
        let subject = dto
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let message = sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (name, email, subject, message, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id, name, email, subject, message, created_at",
        )
        .bind(dto.name.trim())
        .bind(dto.email.trim())
        .bind(subject)
        .bind(dto.message.trim())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store contact message: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Contact message stored: id={}, email={}",
            message.id,
            message.email
        );

        Ok(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn test_create_message_without_subject() {
        let pool = test_pool().await;
        let service = ContactService::new(pool);

        let message = service
            .create(CreateContactMessageDto {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                subject: Some("  ".to_string()),
                message: "Hello there".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(message.name, "Alice");
        // Blank subjects collapse to none
        assert!(message.subject.is_none());
    }
}
