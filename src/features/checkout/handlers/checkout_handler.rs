use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tower_sessions::Session;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::{Notice, SessionAccount, SessionState};
use crate::features::checkout::dtos::{
    CheckoutPreviewDto, CheckoutQuery, CheckoutRecordDto, CheckoutRequestDto, CheckoutResultDto,
    PaymentPageDto,
};
use crate::features::checkout::services::CheckoutService;
use crate::shared::types::ApiResponse;

/// Checkout preview
///
/// Shows the cart lines, or the single selected course in direct-buy mode
/// when the cart is empty, plus the total the user is about to pay.
#[utoipa::path(
    get,
    path = "/api/checkout",
    params(CheckoutQuery),
    responses(
        (status = 200, description = "Checkout preview", body = ApiResponse<CheckoutPreviewDto>),
        (status = 404, description = "Direct-buy course not found")
    ),
    tag = "checkout"
)]
pub async fn checkout_preview(
    State(service): State<Arc<CheckoutService>>,
    account: SessionAccount,
    Query(query): Query<CheckoutQuery>,
) -> Result<Json<ApiResponse<CheckoutPreviewDto>>> {
    let preview = service.preview(account.user_id, query.course_id).await?;
    Ok(Json(ApiResponse::success(Some(preview), None, None)))
}

/// Place a checkout
///
/// Converts every cart line into an immutable purchase record and clears
/// the cart in one transaction; with an empty cart and a `course_id` query
/// parameter, buys exactly that course.
#[utoipa::path(
    post,
    path = "/api/checkout",
    params(CheckoutQuery),
    request_body = CheckoutRequestDto,
    responses(
        (status = 200, description = "Checkout placed", body = ApiResponse<CheckoutResultDto>),
        (status = 400, description = "No payment method selected"),
        (status = 404, description = "Direct-buy course not found")
    ),
    tag = "checkout"
)]
pub async fn place_checkout(
    State(service): State<Arc<CheckoutService>>,
    session: Session,
    account: SessionAccount,
    Query(query): Query<CheckoutQuery>,
    AppJson(dto): AppJson<CheckoutRequestDto>,
) -> Result<Json<ApiResponse<CheckoutResultDto>>> {
    let state = SessionState::new(session);

    match service
        .place(account.user_id, dto.payment_method, query.course_id)
        .await
    {
        Ok(result) => {
            state.push_notice(Notice::success("Checkout successful!")).await?;
            Ok(Json(ApiResponse::success(Some(result), None, None)))
        }
        Err(e) => {
            if matches!(e, AppError::Validation(_)) {
                state
                    .push_notice(Notice::error("Please select a payment method."))
                    .await?;
            }
            Err(e)
        }
    }
}

/// Purchase history, newest first
#[utoipa::path(
    get,
    path = "/api/checkout/history",
    responses(
        (status = 200, description = "Purchase records", body = ApiResponse<Vec<CheckoutRecordDto>>),
    ),
    tag = "checkout"
)]
pub async fn checkout_history(
    State(service): State<Arc<CheckoutService>>,
    account: SessionAccount,
) -> Result<Json<ApiResponse<Vec<CheckoutRecordDto>>>> {
    let records = service.history(account.user_id).await?;
    Ok(Json(ApiResponse::success(Some(records), None, None)))
}

/// Payment success page payload
#[utoipa::path(
    get,
    path = "/api/payments/success",
    responses(
        (status = 200, description = "Static success payload", body = ApiResponse<PaymentPageDto>),
    ),
    tag = "checkout"
)]
pub async fn payment_success() -> Json<ApiResponse<PaymentPageDto>> {
    Json(ApiResponse::success(
        Some(PaymentPageDto {
            status: "success".to_string(),
        }),
        Some("Payment completed successfully.".to_string()),
        None,
    ))
}

/// Payment failed page payload
#[utoipa::path(
    get,
    path = "/api/payments/failed",
    responses(
        (status = 200, description = "Static failure payload", body = ApiResponse<PaymentPageDto>),
    ),
    tag = "checkout"
)]
pub async fn payment_failed() -> Json<ApiResponse<PaymentPageDto>> {
    Json(ApiResponse::success(
        Some(PaymentPageDto {
            status: "failed".to_string(),
        }),
        Some("Payment failed. Please try again.".to_string()),
        None,
    ))
}
