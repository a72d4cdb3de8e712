use std::sync::Arc;

use axum::{extract::State, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::{Notice, SessionState};
use crate::features::newsletter::dtos::{SubscribeRequestDto, SubscribeResponseDto};
use crate::features::newsletter::services::NewsletterService;
use crate::shared::types::ApiResponse;

/// Subscribe to the newsletter
///
/// An already-subscribed email is reported back, not treated as a failure.
#[utoipa::path(
    post,
    path = "/api/subscribe",
    request_body = SubscribeRequestDto,
    responses(
        (status = 200, description = "Subscription outcome", body = ApiResponse<SubscribeResponseDto>),
        (status = 400, description = "Invalid email")
    ),
    tag = "newsletter"
)]
pub async fn subscribe(
    State(service): State<Arc<NewsletterService>>,
    session: Session,
    AppJson(dto): AppJson<SubscribeRequestDto>,
) -> Result<Json<ApiResponse<SubscribeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = service.subscribe(&dto.email).await?;

    let state = SessionState::new(session);
    let message = if outcome.subscribed {
        state
            .push_notice(Notice::success("Subscribed successfully!"))
            .await?;
        "Subscribed successfully!"
    } else {
        state
            .push_notice(Notice::info("You are already subscribed."))
            .await?;
        "You are already subscribed."
    };

    Ok(Json(ApiResponse::success(
        Some(outcome),
        Some(message.to_string()),
        None,
    )))
}
