use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::session::SessionAccount;
use crate::features::favorites::dtos::{FavoriteDto, FavoriteRemoveDto, FavoriteToggleDto};
use crate::features::favorites::services::FavoriteService;
use crate::shared::types::ApiResponse;

/// Toggle a favorite
///
/// One endpoint handles both directions based on the current state.
#[utoipa::path(
    post,
    path = "/api/favorites/{course_id}/toggle",
    params(
        ("course_id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Favorite toggled", body = ApiResponse<FavoriteToggleDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "favorites"
)]
pub async fn toggle_favorite(
    State(service): State<Arc<FavoriteService>>,
    account: SessionAccount,
    Path(course_id): Path<i64>,
) -> Result<Json<ApiResponse<FavoriteToggleDto>>> {
    let status = service.toggle(account.user_id, course_id).await?;
    Ok(Json(ApiResponse::success(
        Some(FavoriteToggleDto { status }),
        None,
        None,
    )))
}

/// List favorites
#[utoipa::path(
    get,
    path = "/api/favorites",
    responses(
        (status = 200, description = "Favorite courses", body = ApiResponse<Vec<FavoriteDto>>),
    ),
    tag = "favorites"
)]
pub async fn list_favorites(
    State(service): State<Arc<FavoriteService>>,
    account: SessionAccount,
) -> Result<Json<ApiResponse<Vec<FavoriteDto>>>> {
    let favorites = service.list(account.user_id).await?;
    Ok(Json(ApiResponse::success(Some(favorites), None, None)))
}

/// Remove a favorite
///
/// Idempotent: removing an absent favorite reports `not_found` instead of
/// failing.
#[utoipa::path(
    delete,
    path = "/api/favorites/{course_id}",
    params(
        ("course_id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Removal outcome", body = ApiResponse<FavoriteRemoveDto>),
    ),
    tag = "favorites"
)]
pub async fn remove_favorite(
    State(service): State<Arc<FavoriteService>>,
    account: SessionAccount,
    Path(course_id): Path<i64>,
) -> Result<Json<ApiResponse<FavoriteRemoveDto>>> {
    let status = service.remove(account.user_id, course_id).await?;
    Ok(Json(ApiResponse::success(
        Some(FavoriteRemoveDto { status }),
        None,
        None,
    )))
}
