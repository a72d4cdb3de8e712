use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One favorite joined with its course
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FavoriteDto {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub price: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToggleStatus {
    Added,
    Removed,
}

/// Outcome of a favorite toggle
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteToggleDto {
    pub status: ToggleStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RemoveStatus {
    Success,
    NotFound,
}

/// Outcome of an explicit favorite removal; removing an absent favorite is
/// reported, not failed
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRemoveDto {
    pub status: RemoveStatus,
}
