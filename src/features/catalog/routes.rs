use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalog::handlers;
use crate::features::catalog::services::CatalogService;

/// Create routes for the catalog feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/home", get(handlers::home))
        .route("/api/courses", get(handlers::list_courses))
        .route("/api/courses/{id}", get(handlers::get_course))
        .route("/api/instructors", get(handlers::list_instructors))
        .route("/api/instructors/{id}", get(handlers::get_instructor))
        .route("/api/search/suggestions", get(handlers::search_suggestions))
        .route("/api/search", get(handlers::search_redirect))
        .with_state(service)
}
