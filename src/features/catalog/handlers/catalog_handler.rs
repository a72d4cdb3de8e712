use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};

use crate::core::error::Result;
use crate::features::catalog::dtos::{
    CourseResponseDto, HomeDto, InstructorResponseDto, SearchQuery, SearchSuggestionDto,
};
use crate::features::catalog::services::CatalogService;
use crate::shared::types::{ApiResponse, Meta};

/// Home page payload
///
/// Returns the first four courses and instructors for the landing page.
#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Home payload", body = ApiResponse<HomeDto>),
    ),
    tag = "catalog"
)]
pub async fn home(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<HomeDto>>> {
    let home = service.home().await?;
    Ok(Json(ApiResponse::success(Some(home), None, None)))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = ApiResponse<Vec<CourseResponseDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_courses(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<CourseResponseDto>>>> {
    let courses = service.list_courses().await?;
    let total = courses.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(courses),
        None,
        Some(Meta { total }),
    )))
}

/// Get course by id
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = ApiResponse<CourseResponseDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "catalog"
)]
pub async fn get_course(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CourseResponseDto>>> {
    let course = service.get_course(id).await?;
    Ok(Json(ApiResponse::success(Some(course), None, None)))
}

/// List all instructors
#[utoipa::path(
    get,
    path = "/api/instructors",
    responses(
        (status = 200, description = "List of instructors", body = ApiResponse<Vec<InstructorResponseDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_instructors(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<InstructorResponseDto>>>> {
    let instructors = service.list_instructors().await?;
    let total = instructors.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(instructors),
        None,
        Some(Meta { total }),
    )))
}

/// Get instructor by id
#[utoipa::path(
    get,
    path = "/api/instructors/{id}",
    params(
        ("id" = i64, Path, description = "Instructor id")
    ),
    responses(
        (status = 200, description = "Instructor found", body = ApiResponse<InstructorResponseDto>),
        (status = 404, description = "Instructor not found")
    ),
    tag = "catalog"
)]
pub async fn get_instructor(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<InstructorResponseDto>>> {
    let instructor = service.get_instructor(id).await?;
    Ok(Json(ApiResponse::success(Some(instructor), None, None)))
}

/// Search-bar autocomplete
///
/// Case-insensitive substring match on course titles; a blank query returns
/// an empty list.
#[utoipa::path(
    get,
    path = "/api/search/suggestions",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching courses", body = ApiResponse<Vec<SearchSuggestionDto>>),
    ),
    tag = "catalog"
)]
pub async fn search_suggestions(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SearchSuggestionDto>>>> {
    let suggestions = service.search_suggestions(&query.q).await?;
    Ok(Json(ApiResponse::success(Some(suggestions), None, None)))
}

/// Search redirect
///
/// Sends the client to the detail page of the first matching course (lowest
/// id), or home when nothing matches.
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 303, description = "Redirect to the first match or home"),
    ),
    tag = "catalog"
)]
pub async fn search_redirect(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Redirect> {
    match service.search_target(&query.q).await? {
        Some(id) => Ok(Redirect::to(&format!("/courses/{}", id))),
        None => Ok(Redirect::to("/")),
    }
}
