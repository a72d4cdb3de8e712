//! Catalog management and admin listings.
//!
//! Everything here sits behind the session-auth gate plus the
//! `RequireVerifiedAdmin` guard: a superuser must pass the admin-key step
//! before these endpoints open up.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/courses` | Admin | Create a course |
//! | PUT | `/api/admin/courses/{id}` | Admin | Replace a course |
//! | DELETE | `/api/admin/courses/{id}` | Admin | Delete a course |
//! | POST | `/api/admin/instructors` | Admin | Create an instructor |
//! | DELETE | `/api/admin/instructors/{id}` | Admin | Delete an instructor |
//! | GET | `/api/admin/messages` | Admin | Contact messages (paginated) |
//! | GET | `/api/admin/subscribers` | Admin | Subscribers (paginated) |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminService;
