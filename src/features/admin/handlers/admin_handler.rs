use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, RequireVerifiedAdmin};
use crate::features::admin::dtos::{CourseInputDto, InstructorInputDto};
use crate::features::admin::services::AdminService;
use crate::features::catalog::dtos::{CourseResponseDto, InstructorResponseDto};
use crate::features::contact::dtos::ContactMessageResponseDto;
use crate::features::newsletter::dtos::SubscriberResponseDto;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a course
#[utoipa::path(
    post,
    path = "/api/admin/courses",
    request_body = CourseInputDto,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Verified admin session required"),
        (status = 404, description = "Instructor not found")
    ),
    tag = "admin"
)]
pub async fn create_course(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(admin): RequireVerifiedAdmin,
    AppJson(dto): AppJson<CourseInputDto>,
) -> Result<Json<ApiResponse<CourseResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!("Admin {} creating course '{}'", admin.username, dto.title);

    let course = service.create_course(dto).await?;
    Ok(Json(ApiResponse::success(Some(course), None, None)))
}

/// Replace a course
#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course id")
    ),
    request_body = CourseInputDto,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Verified admin session required"),
        (status = 404, description = "Course or instructor not found")
    ),
    tag = "admin"
)]
pub async fn update_course(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(_admin): RequireVerifiedAdmin,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<CourseInputDto>,
) -> Result<Json<ApiResponse<CourseResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let course = service.update_course(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(course), None, None)))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 403, description = "Verified admin session required"),
        (status = 404, description = "Course not found")
    ),
    tag = "admin"
)]
pub async fn delete_course(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(_admin): RequireVerifiedAdmin,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_course(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Course deleted.".to_string()),
        None,
    )))
}

/// Create an instructor
#[utoipa::path(
    post,
    path = "/api/admin/instructors",
    request_body = InstructorInputDto,
    responses(
        (status = 201, description = "Instructor created", body = ApiResponse<InstructorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Verified admin session required"),
        (status = 409, description = "Instructor email already registered")
    ),
    tag = "admin"
)]
pub async fn create_instructor(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(_admin): RequireVerifiedAdmin,
    AppJson(dto): AppJson<InstructorInputDto>,
) -> Result<Json<ApiResponse<InstructorResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let instructor = service.create_instructor(dto).await?;
    Ok(Json(ApiResponse::success(Some(instructor), None, None)))
}

/// Delete an instructor (their courses cascade away)
#[utoipa::path(
    delete,
    path = "/api/admin/instructors/{id}",
    params(
        ("id" = i64, Path, description = "Instructor id")
    ),
    responses(
        (status = 200, description = "Instructor deleted"),
        (status = 403, description = "Verified admin session required"),
        (status = 404, description = "Instructor not found")
    ),
    tag = "admin"
)]
pub async fn delete_instructor(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(_admin): RequireVerifiedAdmin,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_instructor(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Instructor deleted.".to_string()),
        None,
    )))
}

/// List contact messages
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Contact messages", body = ApiResponse<Vec<ContactMessageResponseDto>>),
        (status = 403, description = "Verified admin session required")
    ),
    tag = "admin"
)]
pub async fn list_messages(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(_admin): RequireVerifiedAdmin,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ContactMessageResponseDto>>>> {
    let (messages, total) = service.list_messages(&pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(messages),
        None,
        Some(Meta { total }),
    )))
}

/// List newsletter subscribers
#[utoipa::path(
    get,
    path = "/api/admin/subscribers",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Subscribers", body = ApiResponse<Vec<SubscriberResponseDto>>),
        (status = 403, description = "Verified admin session required")
    ),
    tag = "admin"
)]
pub async fn list_subscribers(
    State(service): State<Arc<AdminService>>,
    RequireVerifiedAdmin(_admin): RequireVerifiedAdmin,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<SubscriberResponseDto>>>> {
    let (subscribers, total) = service.list_subscribers(&pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(subscribers),
        None,
        Some(Meta { total }),
    )))
}
