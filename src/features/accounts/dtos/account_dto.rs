use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::session::{Notice, ReopenModal, SessionAccount};
use crate::features::accounts::models::User;

/// Request DTO for registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(
        length(max = 150, message = "Username must not exceed 150 characters"),
        regex(
            path = *crate::shared::validation::USERNAME_REGEX,
            message = "Username may only contain letters, digits and underscores"
        )
    )]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Request DTO for login; the identifier may be a username or an email
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for the admin-key verification step
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VerifyAdminRequestDto {
    #[validate(length(min = 1, message = "Key is required"))]
    pub key: String,
}

/// Request DTO for profile updates. The password fields are only honored
/// together: a new password requires the old one and a matching confirmation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequestDto {
    #[validate(
        length(max = 150, message = "Username must not exceed 150 characters"),
        regex(
            path = *crate::shared::validation::USERNAME_REGEX,
            message = "Username may only contain letters, digits and underscores"
        )
    )]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub old_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

/// Response DTO for profile reads and updates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Response DTO for a successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub account: SessionAccount,
    /// True for superusers until the admin key is verified
    pub requires_admin_key: bool,
}

/// Page-load envelope: current account plus drained one-shot state
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionStateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<SessionAccount>,
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_modal: Option<ReopenModal>,
}
