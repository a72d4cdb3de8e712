use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::cart::dtos::CartLineDto;
use crate::features::catalog::models::Course;
use crate::features::checkout::dtos::{CheckoutPreviewDto, CheckoutRecordDto, CheckoutResultDto};
use crate::features::checkout::models::PaymentMethod;

/// Service converting cart lines (or a single direct-buy course) into
/// immutable purchase records.
pub struct CheckoutService {
    pool: SqlitePool,
}

impl CheckoutService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Pre-submission preview. Direct-buy mode only applies when the cart
    /// is empty and a course id was given.
    pub async fn preview(
        &self,
        user_id: i64,
        course_id: Option<i64>,
    ) -> Result<CheckoutPreviewDto> {
        let items = self.cart_lines(user_id).await?;

        let single_course = match (items.is_empty(), course_id) {
            (true, Some(id)) => {
                let course = sqlx::query_as::<_, Course>(
                    "SELECT id, title, short_description, long_description, category, \
                     subcategory, learning_outcomes, price, old_price, discount_percent, \
                     instructor_id, duration, students_enrolled, language, certification, \
                     rating, promo_video, technologies_covered, badge, level, lessons_count \
                     FROM courses WHERE id = ?1",
                )
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load direct-buy course: {:?}", e);
                    AppError::Database(e)
                })?
                .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))?;
                Some(course)
            }
            _ => None,
        };

        let total = if items.is_empty() {
            single_course.as_ref().map(|c| c.price).unwrap_or(0.0)
        } else {
            items.iter().map(|i| i.price).sum()
        };

        Ok(CheckoutPreviewDto {
            items,
            single_course: single_course.map(Into::into),
            total,
        })
    }

    /// Place the checkout in one atomic transaction: snapshot the course
    /// prices, insert one record per line, clear the cart. A failure rolls
    /// everything back; partial application is never observable.
    pub async fn place(
        &self,
        user_id: i64,
        payment_method: Option<PaymentMethod>,
        course_id: Option<i64>,
    ) -> Result<CheckoutResultDto> {
        let payment_method = payment_method.ok_or_else(|| {
            AppError::Validation("Please select a payment method.".to_string())
        })?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to open checkout transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let now = Utc::now();

        // Price snapshot happens inside the transaction, so a concurrent
        // price edit cannot split a single checkout across two prices.
        let lines = sqlx::query_as::<_, (i64, f64)>(
            "SELECT ci.course_id, c.price FROM cart_items ci \
             JOIN courses c ON c.id = ci.course_id \
             WHERE ci.user_id = ?1 ORDER BY ci.id",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        let (orders_created, total) = if !lines.is_empty() {
            for (line_course_id, price) in &lines {
                sqlx::query(
                    "INSERT INTO checkouts (user_id, course_id, price, payment_method, created_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .bind(user_id)
                .bind(line_course_id)
                .bind(price)
                .bind(payment_method)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }

            sqlx::query("DELETE FROM cart_items WHERE user_id = ?1")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;

            (lines.len() as i64, lines.iter().map(|(_, p)| p).sum())
        } else if let Some(course_id) = course_id {
            let price = sqlx::query_scalar::<_, f64>("SELECT price FROM courses WHERE id = ?1")
                .bind(course_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Course {} not found", course_id)))?;

            sqlx::query(
                "INSERT INTO checkouts (user_id, course_id, price, payment_method, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(user_id)
            .bind(course_id)
            .bind(price)
            .bind(payment_method)
            .bind(now)
            .execute(&mut *tx)
            .await?;

            (1, price)
        } else {
            // Nothing to buy; the original treated this as a no-op success
            (0, 0.0)
        };

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit checkout transaction: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Checkout placed: user_id={}, orders={}, total={}",
            user_id,
            orders_created,
            total
        );

        Ok(CheckoutResultDto {
            orders_created,
            total,
        })
    }

    /// The user's purchase records, newest first
    pub async fn history(&self, user_id: i64) -> Result<Vec<CheckoutRecordDto>> {
        let records = sqlx::query_as::<_, CheckoutRecordDto>(
            "SELECT ch.id, ch.course_id, c.title AS course_title, ch.price, \
             ch.payment_method, ch.created_at \
             FROM checkouts ch JOIN courses c ON c.id = ch.course_id \
             WHERE ch.user_id = ?1 ORDER BY ch.created_at DESC, ch.id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load checkout history: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records)
    }

    async fn cart_lines(&self, user_id: i64) -> Result<Vec<CartLineDto>> {
        let items = sqlx::query_as::<_, CartLineDto>(
            "SELECT ci.id, ci.course_id, c.title AS course_title, c.price, ci.added_at \
             FROM cart_items ci JOIN courses c ON c.id = ci.course_id \
             WHERE ci.user_id = ?1 ORDER BY ci.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load cart lines: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cart::services::CartService;
    use crate::shared::test_helpers::{seed_course, seed_user, test_pool};

    #[tokio::test]
    async fn test_checkout_converts_cart_atomically() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let a = seed_course(&pool, "Course A", 10.0).await;
        let b = seed_course(&pool, "Course B", 20.0).await;
        let c = seed_course(&pool, "Course C", 5.0).await;
        let cart = CartService::new(pool.clone());
        let service = CheckoutService::new(pool);

        cart.add(user, a).await.unwrap();
        cart.add(user, b).await.unwrap();
        cart.add(user, c).await.unwrap();

        let result = service
            .place(user, Some(PaymentMethod::Upi), None)
            .await
            .unwrap();
        assert_eq!(result.orders_created, 3);
        assert_eq!(result.total, 35.0);

        let history = service.history(user).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().map(|r| r.price).sum::<f64>(), 35.0);
        assert_eq!(cart.count(user).await.unwrap(), 0);

        // Re-running with the now-empty cart and no course creates nothing
        let repeat = service
            .place(user, Some(PaymentMethod::Upi), None)
            .await
            .unwrap();
        assert_eq!(repeat.orders_created, 0);
        assert_eq!(service.history(user).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_checkout_requires_payment_method() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let course = seed_course(&pool, "Course A", 10.0).await;
        let cart = CartService::new(pool.clone());
        let service = CheckoutService::new(pool);

        cart.add(user, course).await.unwrap();

        let result = service.place(user, None, None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        // Nothing was converted
        assert_eq!(cart.count(user).await.unwrap(), 1);
        assert!(service.history(user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_direct_buy_with_empty_cart() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let course = seed_course(&pool, "Course A", 42.0).await;
        let service = CheckoutService::new(pool);

        let result = service
            .place(user, Some(PaymentMethod::Card), Some(course))
            .await
            .unwrap();
        assert_eq!(result.orders_created, 1);
        assert_eq!(result.total, 42.0);

        let history = service.history(user).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].course_id, course);
        assert_eq!(history[0].payment_method, PaymentMethod::Card);
    }

    #[tokio::test]
    async fn test_cart_wins_over_direct_buy() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let in_cart = seed_course(&pool, "Course A", 10.0).await;
        let direct = seed_course(&pool, "Course B", 99.0).await;
        let cart = CartService::new(pool.clone());
        let service = CheckoutService::new(pool);

        cart.add(user, in_cart).await.unwrap();

        let result = service
            .place(user, Some(PaymentMethod::Paytm), Some(direct))
            .await
            .unwrap();
        assert_eq!(result.orders_created, 1);
        assert_eq!(result.total, 10.0);
        assert_eq!(service.history(user).await.unwrap()[0].course_id, in_cart);
    }

    #[tokio::test]
    async fn test_price_is_snapshotted() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let course = seed_course(&pool, "Course A", 10.0).await;
        let cart = CartService::new(pool.clone());
        let service = CheckoutService::new(pool.clone());

        cart.add(user, course).await.unwrap();
        service
            .place(user, Some(PaymentMethod::Upi), None)
            .await
            .unwrap();

        // Later price edits do not rewrite history
        sqlx::query("UPDATE courses SET price = 500.0 WHERE id = ?1")
            .bind(course)
            .execute(&pool)
            .await
            .unwrap();

        let history = service.history(user).await.unwrap();
        assert_eq!(history[0].price, 10.0);
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let a = seed_course(&pool, "Course A", 10.0).await;
        let b = seed_course(&pool, "Course B", 20.0).await;
        let service = CheckoutService::new(pool);

        service
            .place(user, Some(PaymentMethod::Upi), Some(a))
            .await
            .unwrap();
        service
            .place(user, Some(PaymentMethod::Upi), Some(b))
            .await
            .unwrap();

        let history = service.history(user).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].course_id, b);
        assert_eq!(history[1].course_id, a);
    }
}
