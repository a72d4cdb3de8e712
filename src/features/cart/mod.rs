//! Shopping cart.
//!
//! Idempotent adds, ownership-checked removals, read-time totals, and the
//! server-rendered header snippet.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/cart/{course_id}` | Yes | Add a course (idempotent) |
//! | GET | `/api/cart` | Yes | Lines and total |
//! | DELETE | `/api/cart/items/{item_id}` | Yes | Remove an owned line |
//! | GET | `/api/cart/snippet` | Yes | Rendered header fragment |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod snippet;

pub use services::CartService;
