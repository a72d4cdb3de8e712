use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::cart::handlers;
use crate::features::cart::services::CartService;

/// Create routes for the cart feature (all require a logged-in session)
pub fn routes(service: Arc<CartService>) -> Router {
    Router::new()
        .route("/api/cart", get(handlers::view_cart))
        .route("/api/cart/{course_id}", post(handlers::add_to_cart))
        .route("/api/cart/items/{item_id}", delete(handlers::remove_from_cart))
        .route("/api/cart/snippet", get(handlers::cart_snippet))
        .with_state(service)
}
