use std::sync::Arc;

use axum::{extract::State, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::{Notice, ReopenModal, SessionAccount, SessionState};
use crate::features::accounts::dtos::{
    LoginRequestDto, LoginResponseDto, ProfileResponseDto, RegisterRequestDto, SessionStateDto,
    UpdateProfileRequestDto, VerifyAdminRequestDto,
};
use crate::features::accounts::services::AccountService;
use crate::shared::types::ApiResponse;

/// Register a new account
///
/// On success the client is told to reopen the login modal.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Missing fields or password mismatch"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "accounts"
)]
pub async fn register(
    State(service): State<Arc<AccountService>>,
    session: Session,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let state = SessionState::new(session);

    // Already logged in: nothing to do
    if state.account().await?.is_some() {
        return Err(AppError::BadRequest("Already logged in.".to_string()));
    }

    match service.register(dto).await {
        Ok(user) => {
            state
                .push_notice(Notice::success("Registration successful. Please log in."))
                .await?;
            state.set_modal(ReopenModal::Login).await?;
            Ok(Json(ApiResponse::success(
                Some(user.into()),
                Some("Registration successful. Please log in.".to_string()),
                None,
            )))
        }
        Err(e) => {
            if matches!(e, AppError::Validation(_) | AppError::Conflict(_)) {
                state.set_modal(ReopenModal::Register).await?;
            }
            Err(e)
        }
    }
}

/// Login with username or email
///
/// Superusers are logged in but flagged unverified until they pass the
/// admin-key step.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Session established", body = ApiResponse<LoginResponseDto>),
        (status = 401, description = "Unknown account or wrong password")
    ),
    tag = "accounts"
)]
pub async fn login(
    State(service): State<Arc<AccountService>>,
    session: Session,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let state = SessionState::new(session);

    if state.account().await?.is_some() {
        return Err(AppError::BadRequest("Already logged in.".to_string()));
    }

    match service.authenticate(&dto.identifier, &dto.password).await {
        Ok(user) => {
            let account = SessionAccount {
                user_id: user.id,
                username: user.username,
                email: user.email,
                is_superuser: user.is_superuser,
                // Superusers need the secondary key step before they count
                // as verified
                admin_verified: !user.is_superuser,
            };
            state.set_account(&account).await?;
            state
                .push_notice(Notice::success(format!("Welcome, {}!", account.username)))
                .await?;

            let requires_admin_key = account.is_superuser;
            if requires_admin_key {
                state
                    .push_notice(Notice::info("Please verify your admin key."))
                    .await?;
            }

            Ok(Json(ApiResponse::success(
                Some(LoginResponseDto {
                    account,
                    requires_admin_key,
                }),
                None,
                None,
            )))
        }
        Err(e) => {
            if matches!(e, AppError::Auth(_)) {
                state.set_modal(ReopenModal::Login).await?;
            }
            Err(e)
        }
    }
}

/// Logout
///
/// Destroys the session unconditionally.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session destroyed"),
    ),
    tag = "accounts"
)]
pub async fn logout(session: Session) -> Result<Json<ApiResponse<()>>> {
    SessionState::new(session).clear().await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("You have been logged out.".to_string()),
        None,
    )))
}

/// Verify the admin key
///
/// Checks the submitted key against the account's stored per-admin
/// credential. A wrong key leaves the session unverified and can be retried.
#[utoipa::path(
    post,
    path = "/api/auth/verify-admin",
    request_body = VerifyAdminRequestDto,
    responses(
        (status = 200, description = "Session marked verified", body = ApiResponse<SessionAccount>),
        (status = 401, description = "Invalid admin key")
    ),
    tag = "accounts"
)]
pub async fn verify_admin(
    State(service): State<Arc<AccountService>>,
    session: Session,
    account: SessionAccount,
    AppJson(dto): AppJson<VerifyAdminRequestDto>,
) -> Result<Json<ApiResponse<SessionAccount>>> {
    let state = SessionState::new(session);

    match service.verify_admin_key(account.user_id, &dto.key).await {
        Ok(()) => {
            let account = SessionAccount {
                admin_verified: true,
                ..account
            };
            state.set_account(&account).await?;
            state
                .push_notice(Notice::success("Admin verified successfully."))
                .await?;
            Ok(Json(ApiResponse::success(Some(account), None, None)))
        }
        Err(e) => {
            if matches!(e, AppError::Auth(_)) {
                state.push_notice(Notice::error("Invalid admin key.")).await?;
            }
            Err(e)
        }
    }
}

/// Current session account
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current account", body = ApiResponse<SessionAccount>),
        (status = 401, description = "Not logged in")
    ),
    tag = "accounts"
)]
pub async fn me(account: SessionAccount) -> Result<Json<ApiResponse<SessionAccount>>> {
    Ok(Json(ApiResponse::success(Some(account), None, None)))
}

/// Page-load session envelope
///
/// Returns the current account (if any) and drains the queued notices and
/// modal flag; each is delivered exactly once.
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Session state", body = ApiResponse<SessionStateDto>),
    ),
    tag = "accounts"
)]
pub async fn session_state(session: Session) -> Result<Json<ApiResponse<SessionStateDto>>> {
    let state = SessionState::new(session);

    let dto = SessionStateDto {
        account: state.account().await?,
        notices: state.take_notices().await?,
        open_modal: state.take_modal().await?,
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Get own profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile", body = ApiResponse<ProfileResponseDto>),
        (status = 401, description = "Not logged in")
    ),
    tag = "accounts"
)]
pub async fn get_profile(
    State(service): State<Arc<AccountService>>,
    account: SessionAccount,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get_profile(account.user_id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Update own profile
///
/// Superusers are rejected. A password change requires the correct old
/// password and a matching confirmation; the current session stays valid.
#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequestDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Old password incorrect"),
        (status = 403, description = "Superusers cannot edit their profile here"),
        (status = 409, description = "Username or email already in use")
    ),
    tag = "accounts"
)]
pub async fn update_profile(
    State(service): State<Arc<AccountService>>,
    session: Session,
    account: SessionAccount,
    AppJson(dto): AppJson<UpdateProfileRequestDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let state = SessionState::new(session);

    let profile = service.update_profile(account.user_id, dto).await?;

    // Keep the session copy in sync with the new identity
    let account = SessionAccount {
        username: profile.username.clone(),
        email: profile.email.clone(),
        ..account
    };
    state.set_account(&account).await?;
    state
        .push_notice(Notice::success("Profile updated successfully."))
        .await?;

    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}
