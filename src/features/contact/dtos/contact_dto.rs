use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::contact::models::ContactMessage;

/// Request DTO for the contact form
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactMessageDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 200, message = "Subject must not exceed 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Response DTO for a stored contact message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageResponseDto {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

/// Static about-page payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AboutDto {
    pub name: String,
    pub tagline: String,
    pub description: String,
}
