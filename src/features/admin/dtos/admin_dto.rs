use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::catalog::models::{Category, Subcategory};

/// Input DTO for creating or replacing a course
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CourseInputDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Short description is required"))]
    pub short_description: String,

    #[validate(length(min = 1, message = "Long description is required"))]
    pub long_description: String,

    pub category: Category,

    pub subcategory: Option<Subcategory>,

    #[validate(length(min = 1, message = "Learning outcomes are required"))]
    pub learning_outcomes: String,

    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,

    #[validate(range(min = 0.0, message = "Old price must be non-negative"))]
    pub old_price: f64,

    #[validate(range(min = 0, max = 100, message = "Discount must be 0-100"))]
    #[serde(default)]
    pub discount_percent: i64,

    pub instructor_id: Option<i64>,

    #[validate(length(min = 1, max = 50, message = "Duration must be 1-50 characters"))]
    pub duration: String,

    #[validate(range(min = 0, message = "Enrolled count must be non-negative"))]
    #[serde(default)]
    pub students_enrolled: i64,

    #[validate(length(min = 1, max = 50, message = "Language must be 1-50 characters"))]
    pub language: String,

    #[validate(length(min = 1, max = 100, message = "Certification must be 1-100 characters"))]
    pub certification: String,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be 0-5"))]
    #[serde(default)]
    pub rating: f64,

    pub promo_video: Option<String>,

    #[validate(length(min = 1, message = "Technologies covered is required"))]
    pub technologies_covered: String,

    pub badge: Option<String>,

    pub level: Option<String>,

    #[validate(range(min = 0, message = "Lessons count must be non-negative"))]
    #[serde(default)]
    pub lessons_count: i64,
}

/// Input DTO for creating an instructor
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InstructorInputDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Profession must be 1-200 characters"))]
    pub profession: String,

    #[validate(length(min = 1, message = "About is required"))]
    pub about: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(
        path = *crate::shared::validation::PHONE_REGEX,
        message = "Invalid phone number"
    ))]
    pub phone_no: String,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be 0-5"))]
    #[serde(default)]
    pub rating: f64,

    pub profile_image: Option<String>,
}
