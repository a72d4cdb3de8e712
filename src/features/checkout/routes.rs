use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::checkout::handlers;
use crate::features::checkout::services::CheckoutService;

/// Create routes for the checkout feature (all require a logged-in session)
pub fn routes(service: Arc<CheckoutService>) -> Router {
    Router::new()
        .route("/api/checkout", get(handlers::checkout_preview))
        .route("/api/checkout", post(handlers::place_checkout))
        .route("/api/checkout/history", get(handlers::checkout_history))
        .with_state(service)
}

/// Static payment outcome pages (no session required)
pub fn payment_routes() -> Router {
    Router::new()
        .route("/api/payments/success", get(handlers::payment_success))
        .route("/api/payments/failed", get(handlers::payment_failed))
}
