use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Create routes for the contact feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::create_contact_message))
        .route("/api/about", get(handlers::about))
        .with_state(service)
}
