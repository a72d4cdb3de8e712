use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::favorites::handlers;
use crate::features::favorites::services::FavoriteService;

/// Create routes for the favorites feature (all require a logged-in session)
pub fn routes(service: Arc<FavoriteService>) -> Router {
    Router::new()
        .route("/api/favorites", get(handlers::list_favorites))
        .route(
            "/api/favorites/{course_id}/toggle",
            post(handlers::toggle_favorite),
        )
        .route(
            "/api/favorites/{course_id}",
            delete(handlers::remove_favorite),
        )
        .with_state(service)
}
