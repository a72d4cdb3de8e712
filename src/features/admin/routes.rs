use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes (all require a fully verified admin session)
pub fn routes(service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/courses", post(handlers::create_course))
        .route("/courses/{id}", put(handlers::update_course))
        .route("/courses/{id}", delete(handlers::delete_course))
        .route("/instructors", post(handlers::create_instructor))
        .route("/instructors/{id}", delete(handlers::delete_instructor))
        .route("/messages", get(handlers::list_messages))
        .route("/subscribers", get(handlers::list_subscribers))
        .with_state(service)
}
