use std::sync::Arc;

use axum::{extract::State, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::{Notice, SessionState};
use crate::features::contact::dtos::{
    AboutDto, ContactMessageResponseDto, CreateContactMessageDto,
};
use crate::features::contact::services::ContactService;
use crate::shared::types::ApiResponse;

/// Submit a contact form message
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message stored", body = ApiResponse<ContactMessageResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn create_contact_message(
    State(service): State<Arc<ContactService>>,
    session: Session,
    AppJson(dto): AppJson<CreateContactMessageDto>,
) -> Result<Json<ApiResponse<ContactMessageResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.create(dto).await?;

    SessionState::new(session)
        .push_notice(Notice::success(
            "Thank you! We will connect with you shortly.",
        ))
        .await?;

    Ok(Json(ApiResponse::success(
        Some(message),
        Some("Thank you! We will connect with you shortly.".to_string()),
        None,
    )))
}

/// About page payload
#[utoipa::path(
    get,
    path = "/api/about",
    responses(
        (status = 200, description = "About payload", body = ApiResponse<AboutDto>),
    ),
    tag = "contact"
)]
pub async fn about() -> Json<ApiResponse<AboutDto>> {
    Json(ApiResponse::success(
        Some(AboutDto {
            name: "CodePilot".to_string(),
            tagline: "Learn from industry experts".to_string(),
            description: "CodePilot is a course marketplace where learners browse courses \
                          and instructors, build a cart, and purchase with the payment \
                          method of their choice."
                .to_string(),
        }),
        None,
        None,
    ))
}
