use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::accounts::dtos::{
    ProfileResponseDto, RegisterRequestDto, UpdateProfileRequestDto,
};
use crate::features::accounts::models::User;
use crate::features::accounts::password;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, is_superuser, admin_key_hash, created_at";

/// Service for account lifecycle: registration, credential checks, admin
/// verification and profile edits.
pub struct AccountService {
    pool: SqlitePool,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a regular user account.
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<User> {
        let username = dto.username.trim();
        let email = dto.email.trim();

        if username.is_empty()
            || email.is_empty()
            || dto.password.is_empty()
            || dto.confirm_password.is_empty()
        {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        if dto.password != dto.confirm_password {
            return Err(AppError::Validation("Passwords do not match.".to_string()));
        }

        if self.username_exists(username, None).await? {
            return Err(AppError::Conflict("Username already exists.".to_string()));
        }

        if self.email_exists(email, None).await? {
            return Err(AppError::Conflict("Email already registered.".to_string()));
        }

        let password_hash = password::hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash, is_superuser, created_at) \
             VALUES (?1, ?2, ?3, 0, ?4) RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("User registered: id={}, username={}", user.id, user.username);

        Ok(user)
    }

    /// Provision a superuser with its per-account admin key. Not reachable
    /// from the HTTP surface; used by the `create-admin` binary.
    pub async fn create_superuser(
        &self,
        username: &str,
        email: &str,
        pass: &str,
        admin_key: &str,
    ) -> Result<User> {
        if self.username_exists(username, None).await? {
            return Err(AppError::Conflict("Username already exists.".to_string()));
        }
        if self.email_exists(email, None).await? {
            return Err(AppError::Conflict("Email already registered.".to_string()));
        }

        let password_hash = password::hash_password(pass)?;
        let admin_key_hash = password::hash_password(admin_key)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash, is_superuser, admin_key_hash, created_at) \
             VALUES (?1, ?2, ?3, 1, ?4, ?5) RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .bind(&admin_key_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create superuser: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Superuser created: id={}, username={}", user.id, user.username);

        Ok(user)
    }

    /// Resolve the identifier against usernames first, then emails, and check
    /// the password.
    pub async fn authenticate(&self, identifier: &str, pass: &str) -> Result<User> {
        let identifier = identifier.trim();

        let user = match self.find_by_username(identifier).await? {
            Some(user) => Some(user),
            None => self.find_by_email(identifier).await?,
        };

        let user = user.ok_or_else(|| AppError::Auth("User not found.".to_string()))?;

        if !password::verify_password(pass, &user.password_hash)? {
            return Err(AppError::Auth("Incorrect password.".to_string()));
        }

        Ok(user)
    }

    /// Check a submitted admin key against the account's stored key hash.
    /// Accounts without a stored key can never verify.
    pub async fn verify_admin_key(&self, user_id: i64, key: &str) -> Result<()> {
        let user = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Auth("User not found.".to_string()))?;

        let verified = match user.admin_key_hash {
            Some(ref hash) => password::verify_password(key.trim(), hash)?,
            None => false,
        };

        if !verified {
            return Err(AppError::Auth("Invalid admin key.".to_string()));
        }

        Ok(())
    }

    pub async fn get_profile(&self, user_id: i64) -> Result<ProfileResponseDto> {
        let user = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Update username/email and optionally the password. Superusers are
    /// blocked from self-editing here.
    pub async fn update_profile(
        &self,
        user_id: i64,
        dto: UpdateProfileRequestDto,
    ) -> Result<ProfileResponseDto> {
        let user = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_superuser {
            return Err(AppError::Forbidden(
                "Admins are not allowed to update their profile.".to_string(),
            ));
        }

        let username = dto.username.trim();
        let email = dto.email.trim();

        if username.is_empty() || email.is_empty() {
            return Err(AppError::Validation(
                "Username and Email are required.".to_string(),
            ));
        }

        if self.username_exists(username, Some(user_id)).await? {
            return Err(AppError::Conflict("Username is already taken.".to_string()));
        }
        if self.email_exists(email, Some(user_id)).await? {
            return Err(AppError::Conflict("Email is already used.".to_string()));
        }

        let new_password = dto
            .new_password
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let password_hash = match new_password {
            Some(new_pass) => {
                let old_password = dto
                    .old_password
                    .as_deref()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| {
                        AppError::Validation(
                            "Please enter your old password to set a new one.".to_string(),
                        )
                    })?;

                if !password::verify_password(old_password, &user.password_hash)? {
                    return Err(AppError::Auth("Old password is incorrect.".to_string()));
                }

                let confirm = dto.confirm_password.as_deref().map(str::trim).unwrap_or("");
                if new_pass != confirm {
                    return Err(AppError::Validation(
                        "New passwords do not match.".to_string(),
                    ));
                }

                Some(password::hash_password(new_pass)?)
            }
            None => None,
        };

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET username = ?1, email = ?2, \
             password_hash = COALESCE(?3, password_hash) \
             WHERE id = ?4 RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Profile updated: id={}, username={}", user.id, user.username);

        Ok(user.into())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by username: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by email: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn username_exists(&self, username: &str, exclude_id: Option<i64>) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1 AND id != COALESCE(?2, -1))",
        )
        .bind(username)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check username uniqueness: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(exists)
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1 AND id != COALESCE(?2, -1))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check email uniqueness: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    fn register_dto(username: &str, email: &str, pass: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            username: username.to_string(),
            email: email.to_string(),
            password: pass.to_string(),
            confirm_password: pass.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_blank_fields() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let result = service.register(register_dto("", "a@b.com", "pw")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let mut dto = register_dto("alice", "alice@example.com", "secret1");
        dto.confirm_password = "secret2".to_string();
        let result = service.register(dto).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();

        let result = service
            .register(register_dto("alice", "other@example.com", "secret1"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();

        let result = service
            .register(register_dto("bob", "alice@example.com", "secret1"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_authenticate_by_username_or_email() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();

        let by_username = service.authenticate("alice", "secret1").await.unwrap();
        let by_email = service
            .authenticate("alice@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(by_username.id, by_email.id);

        assert!(matches!(
            service.authenticate("alice", "wrong").await,
            Err(AppError::Auth(_))
        ));
        assert!(matches!(
            service.authenticate("nobody", "secret1").await,
            Err(AppError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_verify_admin_key() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let admin = service
            .create_superuser("root", "root@example.com", "secret1", "key-123")
            .await
            .unwrap();
        assert!(admin.is_superuser);

        // Wrong key fails and stays retryable
        assert!(matches!(
            service.verify_admin_key(admin.id, "key-124").await,
            Err(AppError::Auth(_))
        ));
        assert!(service.verify_admin_key(admin.id, "key-123").await.is_ok());
    }

    #[tokio::test]
    async fn test_verify_admin_key_without_stored_key() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let user = service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();

        assert!(matches!(
            service.verify_admin_key(user.id, "anything").await,
            Err(AppError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_update_profile_uniqueness_excludes_self() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let alice = service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();
        service
            .register(register_dto("bob", "bob@example.com", "secret1"))
            .await
            .unwrap();

        // Keeping her own name is fine
        let profile = service
            .update_profile(
                alice.id,
                UpdateProfileRequestDto {
                    username: "alice".to_string(),
                    email: "alice@example.com".to_string(),
                    old_password: None,
                    new_password: None,
                    confirm_password: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.username, "alice");

        // Taking bob's name is not
        let result = service
            .update_profile(
                alice.id,
                UpdateProfileRequestDto {
                    username: "bob".to_string(),
                    email: "alice@example.com".to_string(),
                    old_password: None,
                    new_password: None,
                    confirm_password: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_profile_password_change() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let alice = service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();

        // Wrong old password
        let result = service
            .update_profile(
                alice.id,
                UpdateProfileRequestDto {
                    username: "alice".to_string(),
                    email: "alice@example.com".to_string(),
                    old_password: Some("nope".to_string()),
                    new_password: Some("secret2".to_string()),
                    confirm_password: Some("secret2".to_string()),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Auth(_))));

        // Correct change
        service
            .update_profile(
                alice.id,
                UpdateProfileRequestDto {
                    username: "alice".to_string(),
                    email: "alice@example.com".to_string(),
                    old_password: Some("secret1".to_string()),
                    new_password: Some("secret2".to_string()),
                    confirm_password: Some("secret2".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(service.authenticate("alice", "secret2").await.is_ok());
        assert!(matches!(
            service.authenticate("alice", "secret1").await,
            Err(AppError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_update_profile_blocked_for_superuser() {
        let pool = test_pool().await;
        let service = AccountService::new(pool);

        let admin = service
            .create_superuser("root", "root@example.com", "secret1", "key-123")
            .await
            .unwrap();

        let result = service
            .update_profile(
                admin.id,
                UpdateProfileRequestDto {
                    username: "root2".to_string(),
                    email: "root@example.com".to_string(),
                    old_password: None,
                    new_password: None,
                    confirm_password: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
