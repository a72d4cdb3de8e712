use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::favorites::dtos::{FavoriteDto, RemoveStatus, ToggleStatus};

/// Service for favorite courses
pub struct FavoriteService {
    pool: SqlitePool,
}

impl FavoriteService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Toggle a favorite: create it when absent, delete it when present.
    /// The unique (user, course) constraint keeps concurrent toggles from
    /// ever stacking duplicates.
    pub async fn toggle(&self, user_id: i64, course_id: i64) -> Result<ToggleStatus> {
        self.ensure_course_exists(course_id).await?;

        let inserted = sqlx::query(
            "INSERT INTO favorites (user_id, course_id) VALUES (?1, ?2) \
             ON CONFLICT (user_id, course_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert favorite: {:?}", e);
            AppError::Database(e)
        })?;

        if inserted.rows_affected() == 1 {
            return Ok(ToggleStatus::Added);
        }

        sqlx::query("DELETE FROM favorites WHERE user_id = ?1 AND course_id = ?2")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete favorite: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(ToggleStatus::Removed)
    }

    /// The user's favorites with course summaries
    pub async fn list(&self, user_id: i64) -> Result<Vec<FavoriteDto>> {
        let favorites = sqlx::query_as::<_, FavoriteDto>(
            "SELECT f.id, f.course_id, c.title AS course_title, c.price, c.rating \
             FROM favorites f JOIN courses c ON c.id = f.course_id \
             WHERE f.user_id = ?1 ORDER BY f.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list favorites: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(favorites)
    }

    /// Explicit removal; absent favorites are reported rather than failed
    pub async fn remove(&self, user_id: i64, course_id: i64) -> Result<RemoveStatus> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = ?1 AND course_id = ?2")
            .bind(user_id)
            .bind(course_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to remove favorite: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            Ok(RemoveStatus::NotFound)
        } else {
            Ok(RemoveStatus::Success)
        }
    }

    async fn ensure_course_exists(&self, course_id: i64) -> Result<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1)")
                .bind(course_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check course existence: {:?}", e);
                    AppError::Database(e)
                })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Course {} not found",
                course_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_course, seed_user, test_pool};

    #[tokio::test]
    async fn test_toggle_parity() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let course = seed_course(&pool, "Rust Fundamentals", 29.0).await;
        let service = FavoriteService::new(pool);

        // Odd number of toggles leaves the favorite present
        assert_eq!(service.toggle(user, course).await.unwrap(), ToggleStatus::Added);
        assert_eq!(service.toggle(user, course).await.unwrap(), ToggleStatus::Removed);
        assert_eq!(service.toggle(user, course).await.unwrap(), ToggleStatus::Added);
        assert_eq!(service.list(user).await.unwrap().len(), 1);

        // Even number leaves it absent
        assert_eq!(service.toggle(user, course).await.unwrap(), ToggleStatus::Removed);
        assert!(service.list(user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let course = seed_course(&pool, "Rust Fundamentals", 29.0).await;
        let service = FavoriteService::new(pool);

        service.toggle(user, course).await.unwrap();
        assert_eq!(
            service.remove(user, course).await.unwrap(),
            RemoveStatus::Success
        );
        assert_eq!(
            service.remove(user, course).await.unwrap(),
            RemoveStatus::NotFound
        );
    }

    #[tokio::test]
    async fn test_toggle_unknown_course() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let service = FavoriteService::new(pool);

        assert!(matches!(
            service.toggle(user, 999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
