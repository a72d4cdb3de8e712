use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::accounts::handlers;
use crate::features::accounts::services::AccountService;

/// Routes that work without a logged-in session
pub fn public_routes(service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/session", get(handlers::session_state))
        .with_state(service)
}

/// Routes behind the session-auth gate
pub fn protected_routes(service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::me))
        .route("/api/auth/verify-admin", post(handlers::verify_admin))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/profile", put(handlers::update_profile))
        .with_state(service)
}
