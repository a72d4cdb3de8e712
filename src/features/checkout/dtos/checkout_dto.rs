use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::features::cart::dtos::CartLineDto;
use crate::features::catalog::dtos::CourseResponseDto;
use crate::features::checkout::models::PaymentMethod;

/// Query params for the checkout endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CheckoutQuery {
    /// Direct-buy course id, honored only when the cart is empty
    pub course_id: Option<i64>,
}

/// Request DTO for placing a checkout
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckoutRequestDto {
    /// Omitting the payment method fails the checkout
    pub payment_method: Option<PaymentMethod>,
}

/// Pre-submission preview: whichever source applies plus its total
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckoutPreviewDto {
    pub items: Vec<CartLineDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_course: Option<CourseResponseDto>,
    pub total: f64,
}

/// Outcome of a placed checkout
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResultDto {
    pub orders_created: i64,
    pub total: f64,
}

/// One purchase record in the history listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckoutRecordDto {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub price: f64,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

/// Static payload for the payment outcome pages
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentPageDto {
    pub status: String,
}
