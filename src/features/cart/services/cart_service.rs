use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::cart::dtos::{CartAddResponseDto, CartLineDto, CartMutationDto, CartViewDto};

/// Service for the per-user shopping cart
pub struct CartService {
    pool: SqlitePool,
}

impl CartService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotent add. The unique (user, course) constraint makes concurrent
    /// duplicate adds collapse into one row.
    pub async fn add(&self, user_id: i64, course_id: i64) -> Result<CartAddResponseDto> {
        self.ensure_course_exists(course_id).await?;

        let result = sqlx::query(
            "INSERT INTO cart_items (user_id, course_id, added_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT (user_id, course_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(course_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add to cart: {:?}", e);
            AppError::Database(e)
        })?;

        let added = result.rows_affected() == 1;
        let count = self.count(user_id).await?;

        if added {
            tracing::info!("Cart add: user_id={}, course_id={}", user_id, course_id);
        }

        Ok(CartAddResponseDto { added, count })
    }

    /// All cart lines for the user plus the read-time price total
    pub async fn view(&self, user_id: i64) -> Result<CartViewDto> {
        let items = sqlx::query_as::<_, CartLineDto>(
            "SELECT ci.id, ci.course_id, c.title AS course_title, c.price, ci.added_at \
             FROM cart_items ci JOIN courses c ON c.id = ci.course_id \
             WHERE ci.user_id = ?1 ORDER BY ci.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load cart: {:?}", e);
            AppError::Database(e)
        })?;

        let total = items.iter().map(|i| i.price).sum();

        Ok(CartViewDto { items, total })
    }

    /// Remove one line. Only rows owned by the caller are touched; a foreign
    /// item id reads as absent.
    pub async fn remove(&self, user_id: i64, item_id: i64) -> Result<CartMutationDto> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ?1 AND user_id = ?2")
            .bind(item_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to remove cart item: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cart item not found".to_string()));
        }

        let count = self.count(user_id).await?;
        let total = self.total(user_id).await?;

        Ok(CartMutationDto { count, total })
    }

    pub async fn count(&self, user_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM cart_items WHERE user_id = ?1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count cart items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(count)
    }

    async fn total(&self, user_id: i64) -> Result<f64> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(c.price), 0) FROM cart_items ci \
             JOIN courses c ON c.id = ci.course_id WHERE ci.user_id = ?1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to total cart: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(total)
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
    async fn test_add_is_idempotent() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let course = seed_course(&pool, "Rust Fundamentals", 29.0).await;
        let service = CartService::new(pool);

        let first = service.add(user, course).await.unwrap();
        assert!(first.added);
        assert_eq!(first.count, 1);

        let second = service.add(user, course).await.unwrap();
        assert!(!second.added);
        assert_eq!(second.count, 1);

        let view = service.view(user).await.unwrap();
        assert_eq!(view.items.len(), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_course() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let service = CartService::new(pool);

        assert!(matches!(
            service.add(user, 999).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_view_totals_at_read_time() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let a = seed_course(&pool, "Course A", 10.0).await;
        let b = seed_course(&pool, "Course B", 20.0).await;
        let service = CartService::new(pool);

        service.add(user, a).await.unwrap();
        service.add(user, b).await.unwrap();

        let view = service.view(user).await.unwrap();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total, 30.0);
    }

    #[tokio::test]
    async fn test_remove_respects_ownership() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "alice@example.com").await;
        let bob = seed_user(&pool, "bob", "bob@example.com").await;
        let course = seed_course(&pool, "Course A", 10.0).await;
        let service = CartService::new(pool);

        service.add(bob, course).await.unwrap();
        let bob_item = service.view(bob).await.unwrap().items[0].id;

        // Alice cannot delete Bob's line
        assert!(matches!(
            service.remove(alice, bob_item).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(service.count(bob).await.unwrap(), 1);

        // Bob can
        let after = service.remove(bob, bob_item).await.unwrap();
        assert_eq!(after.count, 0);
        assert_eq!(after.total, 0.0);
    }
}
