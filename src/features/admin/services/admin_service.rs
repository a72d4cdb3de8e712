use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{CourseInputDto, InstructorInputDto};
use crate::features::catalog::dtos::{CourseResponseDto, InstructorResponseDto};
use crate::features::catalog::models::{Course, Instructor};
use crate::features::contact::dtos::ContactMessageResponseDto;
use crate::features::contact::models::ContactMessage;
use crate::features::newsletter::dtos::SubscriberResponseDto;
use crate::features::newsletter::models::Subscriber;
use crate::shared::types::PaginationQuery;

const COURSE_RETURNING: &str = "id, title, short_description, long_description, category, \
     subcategory, learning_outcomes, price, old_price, discount_percent, instructor_id, \
     duration, students_enrolled, language, certification, rating, promo_video, \
     technologies_covered, badge, level, lessons_count";

/// Service for catalog management and admin listings
pub struct AdminService {
    pool: SqlitePool,
}

impl AdminService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // COURSES
    // =========================================================================

    pub async fn create_course(&self, dto: CourseInputDto) -> Result<CourseResponseDto> {
        if let Some(instructor_id) = dto.instructor_id {
            self.ensure_instructor_exists(instructor_id).await?;
        }

        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (title, short_description, long_description, category, \
             subcategory, learning_outcomes, price, old_price, discount_percent, \
             instructor_id, duration, students_enrolled, language, certification, rating, \
             promo_video, technologies_covered, badge, level, lessons_count) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, \
             ?17, ?18, ?19, ?20) RETURNING {COURSE_RETURNING}"
        ))
        .bind(dto.title.trim())
        .bind(&dto.short_description)
        .bind(&dto.long_description)
        .bind(dto.category)
        .bind(dto.subcategory)
        .bind(&dto.learning_outcomes)
        .bind(dto.price)
        .bind(dto.old_price)
        .bind(dto.discount_percent)
        .bind(dto.instructor_id)
        .bind(&dto.duration)
        .bind(dto.students_enrolled)
        .bind(&dto.language)
        .bind(&dto.certification)
        .bind(dto.rating)
        .bind(&dto.promo_video)
        .bind(&dto.technologies_covered)
        .bind(&dto.badge)
        .bind(&dto.level)
        .bind(dto.lessons_count)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create course: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Course created: id={}, title={}", course.id, course.title);

        Ok(course.into())
    }

    pub async fn update_course(&self, id: i64, dto: CourseInputDto) -> Result<CourseResponseDto> {
        if let Some(instructor_id) = dto.instructor_id {
            self.ensure_instructor_exists(instructor_id).await?;
        }

        let course = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses SET title = ?1, short_description = ?2, long_description = ?3, \
             category = ?4, subcategory = ?5, learning_outcomes = ?6, price = ?7, \
             old_price = ?8, discount_percent = ?9, instructor_id = ?10, duration = ?11, \
             students_enrolled = ?12, language = ?13, certification = ?14, rating = ?15, \
             promo_video = ?16, technologies_covered = ?17, badge = ?18, level = ?19, \
             lessons_count = ?20 WHERE id = ?21 RETURNING {COURSE_RETURNING}"
        ))
        .bind(dto.title.trim())
        .bind(&dto.short_description)
        .bind(&dto.long_description)
        .bind(dto.category)
        .bind(dto.subcategory)
        .bind(&dto.learning_outcomes)
        .bind(dto.price)
        .bind(dto.old_price)
        .bind(dto.discount_percent)
        .bind(dto.instructor_id)
        .bind(&dto.duration)
        .bind(dto.students_enrolled)
        .bind(&dto.language)
        .bind(&dto.certification)
        .bind(dto.rating)
        .bind(&dto.promo_video)
        .bind(&dto.technologies_covered)
        .bind(&dto.badge)
        .bind(&dto.level)
        .bind(dto.lessons_count)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update course: {:?}", e);
            AppError::Database(e)
        })?;

        course
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    /// Delete a course; cart, checkout and favorite rows referencing it
    /// cascade away.
    pub async fn delete_course(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete course: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Course {} not found", id)));
        }

        tracing::info!("Course deleted: id={}", id);

        Ok(())
    }

    // =========================================================================
    // INSTRUCTORS
    // =========================================================================

    pub async fn create_instructor(
        &self,
        dto: InstructorInputDto,
    ) -> Result<InstructorResponseDto> {
        let email = dto.email.trim().to_lowercase();

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM instructors WHERE email = ?1)",
        )
        .bind(&email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check instructor email: {:?}", e);
            AppError::Database(e)
        })?;

        if exists {
            return Err(AppError::Conflict(
                "Instructor email already registered.".to_string(),
            ));
        }

        let instructor = sqlx::query_as::<_, Instructor>(
            "INSERT INTO instructors (name, profession, about, email, phone_no, rating, profile_image) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING id, name, profession, about, email, phone_no, rating, profile_image",
        )
        .bind(dto.name.trim())
        .bind(&dto.profession)
        .bind(&dto.about)
        .bind(&email)
        .bind(&dto.phone_no)
        .bind(dto.rating)
        .bind(&dto.profile_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create instructor: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Instructor created: id={}, name={}",
            instructor.id,
            instructor.name
        );

        Ok(instructor.into())
    }

    /// Delete an instructor; their courses cascade away too.
    pub async fn delete_instructor(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM instructors WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete instructor: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Instructor {} not found", id)));
        }

        tracing::info!("Instructor deleted: id={}", id);

        Ok(())
    }

    // =========================================================================
    // LISTINGS
    // =========================================================================

    /// List contact messages with pagination, newest first
    pub async fn list_messages(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ContactMessageResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count contact messages: {:?}", e);
                AppError::Database(e)
            })?;

        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, subject, message, created_at FROM contact_messages \
             ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contact messages: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((messages.into_iter().map(Into::into).collect(), total))
    }

    /// List subscribers with pagination, newest first
    pub async fn list_subscribers(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<SubscriberResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscribers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count subscribers: {:?}", e);
                AppError::Database(e)
            })?;

        let subscribers = sqlx::query_as::<_, Subscriber>(
            "SELECT id, email, subscribed_at FROM subscribers \
             ORDER BY subscribed_at DESC, id DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list subscribers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((subscribers.into_iter().map(Into::into).collect(), total))
    }

    async fn ensure_instructor_exists(&self, instructor_id: i64) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM instructors WHERE id = ?1)",
        )
        .bind(instructor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check instructor existence: {:?}", e);
            AppError::Database(e)
        })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Instructor {} not found",
                instructor_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cart::services::CartService;
    use crate::features::catalog::models::Category;
    use crate::shared::test_helpers::{seed_user, test_pool};

    fn course_input(title: &str, instructor_id: Option<i64>) -> CourseInputDto {
        CourseInputDto {
            title: title.to_string(),
            short_description: "Short".to_string(),
            long_description: "Long".to_string(),
            category: Category::FullStack,
            subcategory: None,
            learning_outcomes: "Things".to_string(),
            price: 49.0,
            old_price: 99.0,
            discount_percent: 50,
            instructor_id,
            duration: "4 weeks".to_string(),
            students_enrolled: 0,
            language: "English".to_string(),
            certification: "Certificate of completion".to_string(),
            rating: 4.5,
            promo_video: None,
            technologies_covered: "Rust".to_string(),
            badge: None,
            level: Some("Beginner".to_string()),
            lessons_count: 12,
        }
    }

    fn instructor_input(email: &str) -> InstructorInputDto {
        InstructorInputDto {
            name: "Grace".to_string(),
            profession: "Engineer".to_string(),
            about: "Teaches systems".to_string(),
            email: email.to_string(),
            phone_no: "+628123456789".to_string(),
            rating: 4.8,
            profile_image: None,
        }
    }

    #[tokio::test]
    async fn test_course_crud_roundtrip() {
        let pool = test_pool().await;
        let service = AdminService::new(pool);

        let created = service
            .create_course(course_input("Rust Fundamentals", None))
            .await
            .unwrap();
        assert_eq!(created.title, "Rust Fundamentals");

        let mut input = course_input("Rust Fundamentals, 2nd ed.", None);
        input.price = 59.0;
        let updated = service.update_course(created.id, input).await.unwrap();
        assert_eq!(updated.price, 59.0);

        service.delete_course(created.id).await.unwrap();
        assert!(matches!(
            service.delete_course(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_course_unknown_instructor() {
        let pool = test_pool().await;
        let service = AdminService::new(pool);

        let result = service
            .create_course(course_input("Orphan Course", Some(999)))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_instructor_email_conflict() {
        let pool = test_pool().await;
        let service = AdminService::new(pool);

        service
            .create_instructor(instructor_input("grace@example.com"))
            .await
            .unwrap();
        let result = service
            .create_instructor(instructor_input("grace@example.com"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_instructor_deletion_cascades() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "alice", "alice@example.com").await;
        let service = AdminService::new(pool.clone());
        let cart = CartService::new(pool.clone());

        let instructor = service
            .create_instructor(instructor_input("grace@example.com"))
            .await
            .unwrap();
        let course = service
            .create_course(course_input("Rust Fundamentals", Some(instructor.id)))
            .await
            .unwrap();
        cart.add(user, course.id).await.unwrap();

        service.delete_instructor(instructor.id).await.unwrap();

        // The owned course and the cart line referencing it are both gone
        let courses = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(courses, 0);
        assert_eq!(cart.count(user).await.unwrap(), 0);
    }
}
