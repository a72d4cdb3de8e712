use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::session::SessionAccount;
use crate::features::cart::dtos::{
    CartAddResponseDto, CartMutationDto, CartSnippetDto, CartViewDto,
};
use crate::features::cart::services::CartService;
use crate::features::cart::snippet::render_cart_snippet;
use crate::shared::types::ApiResponse;

/// Add a course to the cart
///
/// Idempotent: adding a course that is already in the cart reports
/// `added: false` and changes nothing.
#[utoipa::path(
    post,
    path = "/api/cart/{course_id}",
    params(
        ("course_id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Cart updated", body = ApiResponse<CartAddResponseDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    State(service): State<Arc<CartService>>,
    account: SessionAccount,
    Path(course_id): Path<i64>,
) -> Result<Json<ApiResponse<CartAddResponseDto>>> {
    let outcome = service.add(account.user_id, course_id).await?;
    Ok(Json(ApiResponse::success(Some(outcome), None, None)))
}

/// View the cart
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines and total", body = ApiResponse<CartViewDto>),
    ),
    tag = "cart"
)]
pub async fn view_cart(
    State(service): State<Arc<CartService>>,
    account: SessionAccount,
) -> Result<Json<ApiResponse<CartViewDto>>> {
    let view = service.view(account.user_id).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Remove a cart line
///
/// Only the owner's rows are reachable; other users' item ids read as
/// not found.
#[utoipa::path(
    delete,
    path = "/api/cart/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Cart item id")
    ),
    responses(
        (status = 200, description = "Updated count and total", body = ApiResponse<CartMutationDto>),
        (status = 404, description = "Cart item not found")
    ),
    tag = "cart"
)]
pub async fn remove_from_cart(
    State(service): State<Arc<CartService>>,
    account: SessionAccount,
    Path(item_id): Path<i64>,
) -> Result<Json<ApiResponse<CartMutationDto>>> {
    let outcome = service.remove(account.user_id, item_id).await?;
    Ok(Json(ApiResponse::success(Some(outcome), None, None)))
}

/// Header cart widget fragment
///
/// Returns the rendered HTML snippet, JSON-wrapped.
#[utoipa::path(
    get,
    path = "/api/cart/snippet",
    responses(
        (status = 200, description = "Rendered cart fragment", body = ApiResponse<CartSnippetDto>),
    ),
    tag = "cart"
)]
pub async fn cart_snippet(
    State(service): State<Arc<CartService>>,
    account: SessionAccount,
) -> Result<Json<ApiResponse<CartSnippetDto>>> {
    let view = service.view(account.user_id).await?;
    let html = render_cart_snippet(&view)?;
    Ok(Json(ApiResponse::success(
        Some(CartSnippetDto { html }),
        None,
        None,
    )))
}
