use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::catalog::dtos::{
    CourseResponseDto, HomeDto, InstructorResponseDto, SearchSuggestionDto,
};
use crate::features::catalog::models::{Course, Instructor};
use crate::shared::constants::{HOME_COURSE_COUNT, HOME_INSTRUCTOR_COUNT};

const COURSE_COLUMNS: &str = "id, title, short_description, long_description, category, \
     subcategory, learning_outcomes, price, old_price, discount_percent, instructor_id, \
     duration, students_enrolled, language, certification, rating, promo_video, \
     technologies_covered, badge, level, lessons_count";

/// Service for browsing the course/instructor catalog
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Home page payload: the first few courses and instructors, by id
    pub async fn home(&self) -> Result<HomeDto> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id LIMIT ?1"
        ))
        .bind(HOME_COURSE_COUNT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load home courses: {:?}", e);
            AppError::Database(e)
        })?;

        let instructors = sqlx::query_as::<_, Instructor>(
            "SELECT id, name, profession, about, email, phone_no, rating, profile_image \
             FROM instructors ORDER BY id LIMIT ?1",
        )
        .bind(HOME_INSTRUCTOR_COUNT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load home instructors: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(HomeDto {
            courses: courses.into_iter().map(Into::into).collect(),
            instructors: instructors.into_iter().map(Into::into).collect(),
        })
    }

    /// Full unfiltered course listing
    pub async fn list_courses(&self) -> Result<Vec<CourseResponseDto>> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list courses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(courses.into_iter().map(Into::into).collect())
    }

    /// Get course by id
    pub async fn get_course(&self, id: i64) -> Result<CourseResponseDto> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get course: {:?}", e);
            AppError::Database(e)
        })?;

        course
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    /// Full unfiltered instructor listing
    pub async fn list_instructors(&self) -> Result<Vec<InstructorResponseDto>> {
        let instructors = sqlx::query_as::<_, Instructor>(
            "SELECT id, name, profession, about, email, phone_no, rating, profile_image \
             FROM instructors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list instructors: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(instructors.into_iter().map(Into::into).collect())
    }

    /// Get instructor by id
    pub async fn get_instructor(&self, id: i64) -> Result<InstructorResponseDto> {
        let instructor = sqlx::query_as::<_, Instructor>(
            "SELECT id, name, profession, about, email, phone_no, rating, profile_image \
             FROM instructors WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get instructor: {:?}", e);
            AppError::Database(e)
        })?;

        instructor
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Instructor {} not found", id)))
    }

    /// Case-insensitive substring autocomplete on course titles.
    /// A blank query returns an empty list without touching the store.
    pub async fn search_suggestions(&self, query: &str) -> Result<Vec<SearchSuggestionDto>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, title FROM courses \
             WHERE lower(title) LIKE '%' || lower(?1) || '%' ORDER BY id",
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search courses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| SearchSuggestionDto { id, name })
            .collect())
    }

    /// First course whose title contains the query, lowest id winning the
    /// tie-break. None for a blank query or no match.
    pub async fn search_target(&self, query: &str) -> Result<Option<i64>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM courses \
             WHERE lower(title) LIKE '%' || lower(?1) || '%' ORDER BY id LIMIT 1",
        )
        .bind(query)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve search target: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_course, seed_instructor, test_pool};

    #[tokio::test]
    async fn test_get_course_not_found() {
        let pool = test_pool().await;
        let service = CatalogService::new(pool);

        let result = service.get_course(999).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_instructor_roundtrip() {
        let pool = test_pool().await;
        let id = seed_instructor(&pool, "ada@example.com").await;
        let service = CatalogService::new(pool);

        let instructor = service.get_instructor(id).await.unwrap();
        assert_eq!(instructor.email, "ada@example.com");

        assert!(matches!(
            service.get_instructor(id + 1).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_search_suggestions_blank_query() {
        let pool = test_pool().await;
        seed_course(&pool, "Python Stack Mastery", 49.0).await;
        let service = CatalogService::new(pool);

        assert!(service.search_suggestions("").await.unwrap().is_empty());
        assert!(service.search_suggestions("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_suggestions_no_match() {
        let pool = test_pool().await;
        seed_course(&pool, "Python Stack Mastery", 49.0).await;
        let service = CatalogService::new(pool);

        assert!(service.search_suggestions("haskell").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_suggestions_case_insensitive_substring() {
        let pool = test_pool().await;
        let a = seed_course(&pool, "Python Stack Mastery", 49.0).await;
        let b = seed_course(&pool, "Applied PYTHON for Data", 59.0).await;
        seed_course(&pool, "MERN Stack Bootcamp", 39.0).await;
        let service = CatalogService::new(pool);

        let suggestions = service.search_suggestions("python").await.unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, a);
        assert_eq!(suggestions[0].name, "Python Stack Mastery");
        assert_eq!(suggestions[1].id, b);
    }

    #[tokio::test]
    async fn test_search_target_lowest_id_wins() {
        let pool = test_pool().await;
        let first = seed_course(&pool, "Rust Fundamentals", 29.0).await;
        seed_course(&pool, "Advanced Rust", 99.0).await;
        let service = CatalogService::new(pool);

        assert_eq!(service.search_target("rust").await.unwrap(), Some(first));
        assert_eq!(service.search_target("").await.unwrap(), None);
        assert_eq!(service.search_target("golang").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_home_limits_to_four() {
        let pool = test_pool().await;
        for i in 0..6 {
            seed_course(&pool, &format!("Course {}", i), 10.0).await;
        }
        let service = CatalogService::new(pool);

        let home = service.home().await.unwrap();
        assert_eq!(home.courses.len(), 4);
        assert_eq!(home.courses[0].title, "Course 0");
    }
}
