//! Account and session management.
//!
//! Registration, login by username or email, logout, the two-step admin
//! verification, and profile edits. Session state (account summary, one-shot
//! notices, modal flag) lives in `core::session`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/register` | No | Create an account |
//! | POST | `/api/auth/login` | No | Establish a session |
//! | POST | `/api/auth/logout` | No | Destroy the session |
//! | GET | `/api/session` | No | Page-load envelope (drains notices) |
//! | GET | `/api/auth/me` | Yes | Current account |
//! | POST | `/api/auth/verify-admin` | Yes | Secondary admin gate |
//! | GET | `/api/profile` | Yes | Own profile |
//! | PUT | `/api/profile` | Yes | Update own profile |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod services;

pub use services::AccountService;
