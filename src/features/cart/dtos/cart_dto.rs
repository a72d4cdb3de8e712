use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One cart line joined with its course
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CartLineDto {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub price: f64,
    pub added_at: DateTime<Utc>,
}

/// Cart page payload; the total is computed at read time
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartViewDto {
    pub items: Vec<CartLineDto>,
    pub total: f64,
}

/// Outcome of an add-to-cart request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartAddResponseDto {
    /// False when the course was already in the cart
    pub added: bool,
    pub count: i64,
}

/// Updated cart figures after a removal
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartMutationDto {
    pub count: i64,
    pub total: f64,
}

/// JSON-wrapped rendered HTML for the header cart widget
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartSnippetDto {
    pub html: String,
}
