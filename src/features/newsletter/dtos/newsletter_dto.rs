use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::newsletter::models::Subscriber;

/// Request DTO for a newsletter subscription
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubscribeRequestDto {
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
}

/// Response DTO for a subscription attempt
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscribeResponseDto {
    /// False when the email was already subscribed
    pub subscribed: bool,
    pub email: String,
}

/// One subscriber in the admin listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriberResponseDto {
    pub id: i64,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

impl From<Subscriber> for SubscriberResponseDto {
    fn from(s: Subscriber) -> Self {
        Self {
            id: s.id,
            email: s.email,
            subscribed_at: s.subscribed_at,
        }
    }
}
