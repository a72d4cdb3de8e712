//! Favorite courses.
//!
//! A single toggle endpoint flips membership; explicit removal is
//! idempotent. Uniqueness is enforced by the store.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/favorites/{course_id}/toggle` | Yes | Add or remove |
//! | GET | `/api/favorites` | Yes | List favorites |
//! | DELETE | `/api/favorites/{course_id}` | Yes | Remove (idempotent) |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::FavoriteService;
