//! Router assembly, shared between the server binary and the HTTP tests.

use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use sqlx::SqlitePool;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::core::config::SessionConfig;
use crate::core::error::AppError;
use crate::core::middleware;
use crate::features::accounts::{routes as accounts_routes, AccountService};
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::cart::{routes as cart_routes, CartService};
use crate::features::catalog::{routes as catalog_routes, CatalogService};
use crate::features::checkout::{routes as checkout_routes, CheckoutService};
use crate::features::contact::{routes as contact_routes, ContactService};
use crate::features::favorites::{routes as favorites_routes, FavoriteService};
use crate::features::newsletter::{routes as newsletter_routes, NewsletterService};

async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

/// Build the application router over a connected pool.
///
/// Sessions are cookie-backed and in-memory; every route lives under the
/// session layer, and the protected subset additionally requires a
/// logged-in account.
pub fn build_router(pool: SqlitePool, session_config: &SessionConfig) -> Router {
    let account_service = Arc::new(AccountService::new(pool.clone()));
    let catalog_service = Arc::new(CatalogService::new(pool.clone()));
    let cart_service = Arc::new(CartService::new(pool.clone()));
    let favorite_service = Arc::new(FavoriteService::new(pool.clone()));
    let checkout_service = Arc::new(CheckoutService::new(pool.clone()));
    let contact_service = Arc::new(ContactService::new(pool.clone()));
    let newsletter_service = Arc::new(NewsletterService::new(pool.clone()));
    let admin_service = Arc::new(AdminService::new(pool));

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(session_config.cookie_secure);

    // Protected routes (require a logged-in session)
    let protected_routes = Router::new()
        .merge(accounts_routes::protected_routes(Arc::clone(
            &account_service,
        )))
        .merge(cart_routes::routes(cart_service))
        .merge(favorites_routes::routes(favorite_service))
        .merge(checkout_routes::routes(checkout_service))
        .nest("/api/admin", admin_routes::routes(admin_service))
        .route_layer(from_fn(middleware::session_auth_middleware));

    // Public routes (session available, login not required)
    let public_routes = Router::new()
        .merge(accounts_routes::public_routes(account_service))
        .merge(catalog_routes::routes(catalog_service))
        .merge(contact_routes::routes(contact_service))
        .merge(newsletter_routes::routes(newsletter_service))
        .merge(checkout_routes::payment_routes());

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .fallback(not_found)
        .layer(session_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::{TestServer, TestServerConfig};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{seed_course, test_pool};

    async fn server() -> (TestServer, SqlitePool) {
        let pool = test_pool().await;
        let session_config = SessionConfig {
            cookie_secure: false,
        };
        let app = build_router(pool.clone(), &session_config);

        let config = TestServerConfig::builder().save_cookies().build();
        (TestServer::new_with_config(app, config).unwrap(), pool)
    }

    #[tokio::test]
    async fn test_register_login_cart_checkout_flow() {
        let (server, pool) = server().await;
        let course = seed_course(&pool, "Rust Fundamentals", 29.0).await;

        // Cart requires a session
        server
            .get("/api/cart")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .post("/api/auth/register")
            .json(&json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "secret1",
                "confirm_password": "secret1"
            }))
            .await
            .assert_status_ok();

        server
            .post("/api/auth/login")
            .json(&json!({ "identifier": "alice", "password": "secret1" }))
            .await
            .assert_status_ok();

        let res = server.post(&format!("/api/cart/{}", course)).await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["data"]["added"], json!(true));
        assert_eq!(body["data"]["count"], json!(1));

        let res = server
            .post("/api/checkout")
            .json(&json!({ "payment_method": "upi" }))
            .await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["data"]["orders_created"], json!(1));

        let res = server.get("/api/checkout/history").await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        // Notices drain exactly once
        let res = server.get("/api/session").await;
        let body: Value = res.json();
        assert!(!body["data"]["notices"].as_array().unwrap().is_empty());

        let res = server.get("/api/session").await;
        let body: Value = res.json();
        assert!(body["data"]["notices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_gate_requires_key_verification() {
        let (server, pool) = server().await;
        let accounts = AccountService::new(pool);
        accounts
            .create_superuser("root", "root@example.com", "secret1", "key-123")
            .await
            .unwrap();

        server
            .post("/api/auth/login")
            .json(&json!({ "identifier": "root", "password": "secret1" }))
            .await
            .assert_status_ok();

        let instructor = json!({
            "name": "Grace",
            "profession": "Engineer",
            "about": "Teaches systems",
            "email": "grace@example.com",
            "phone_no": "+628123456789",
            "rating": 4.8
        });

        // Password alone does not open the admin surface
        server
            .post("/api/admin/instructors")
            .json(&instructor)
            .await
            .assert_status(StatusCode::FORBIDDEN);

        // Wrong key leaves the session unverified, retry allowed
        server
            .post("/api/auth/verify-admin")
            .json(&json!({ "key": "nope" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        server
            .post("/api/admin/instructors")
            .json(&instructor)
            .await
            .assert_status(StatusCode::FORBIDDEN);

        server
            .post("/api/auth/verify-admin")
            .json(&json!({ "key": "key-123" }))
            .await
            .assert_status_ok();

        server
            .post("/api/admin/instructors")
            .json(&instructor)
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_password_change_keeps_session_alive() {
        let (server, _pool) = server().await;

        server
            .post("/api/auth/register")
            .json(&json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "secret1",
                "confirm_password": "secret1"
            }))
            .await
            .assert_status_ok();
        server
            .post("/api/auth/login")
            .json(&json!({ "identifier": "alice", "password": "secret1" }))
            .await
            .assert_status_ok();

        server
            .put("/api/profile")
            .json(&json!({
                "username": "alice",
                "email": "alice@example.com",
                "old_password": "secret1",
                "new_password": "secret2",
                "confirm_password": "secret2"
            }))
            .await
            .assert_status_ok();

        // Still logged in on the same cookie
        server.get("/api/auth/me").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_not_found() {
        let (server, _pool) = server().await;

        server
            .get("/api/nope")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
