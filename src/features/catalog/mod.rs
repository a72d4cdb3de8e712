//! Course and instructor catalog.
//!
//! Public listing/detail endpoints plus the search-bar autocomplete and
//! search redirect.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/home` | No | First four courses and instructors |
//! | GET | `/api/courses` | No | Full course listing |
//! | GET | `/api/courses/{id}` | No | Course detail |
//! | GET | `/api/instructors` | No | Full instructor listing |
//! | GET | `/api/instructors/{id}` | No | Instructor detail |
//! | GET | `/api/search/suggestions` | No | Title autocomplete |
//! | GET | `/api/search` | No | Redirect to first title match |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CatalogService;
