use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::newsletter::handlers;
use crate::features::newsletter::services::NewsletterService;

/// Create routes for the newsletter feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<NewsletterService>) -> Router {
    Router::new()
        .route("/api/subscribe", post(handlers::subscribe))
        .with_state(service)
}
