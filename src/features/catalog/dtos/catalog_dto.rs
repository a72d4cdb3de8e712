use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::catalog::models::{Category, Course, Instructor, Subcategory};

/// Response DTO for a course
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseResponseDto {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,
    pub learning_outcomes: String,
    pub price: f64,
    pub old_price: f64,
    pub discount_percent: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    pub duration: String,
    pub students_enrolled: i64,
    pub language: String,
    pub certification: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_video: Option<String>,
    pub technologies_covered: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub lessons_count: i64,
}

impl From<Course> for CourseResponseDto {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            title: c.title,
            short_description: c.short_description,
            long_description: c.long_description,
            category: c.category,
            subcategory: c.subcategory,
            learning_outcomes: c.learning_outcomes,
            price: c.price,
            old_price: c.old_price,
            discount_percent: c.discount_percent,
            instructor_id: c.instructor_id,
            duration: c.duration,
            students_enrolled: c.students_enrolled,
            language: c.language,
            certification: c.certification,
            rating: c.rating,
            promo_video: c.promo_video,
            technologies_covered: c.technologies_covered,
            badge: c.badge,
            level: c.level,
            lessons_count: c.lessons_count,
        }
    }
}

/// Response DTO for an instructor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorResponseDto {
    pub id: i64,
    pub name: String,
    pub profession: String,
    pub about: String,
    pub email: String,
    pub phone_no: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl From<Instructor> for InstructorResponseDto {
    fn from(i: Instructor) -> Self {
        Self {
            id: i.id,
            name: i.name,
            profession: i.profession,
            about: i.about,
            email: i.email,
            phone_no: i.phone_no,
            rating: i.rating,
            profile_image: i.profile_image,
        }
    }
}

/// Home page payload: the first few courses and instructors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub courses: Vec<CourseResponseDto>,
    pub instructors: Vec<InstructorResponseDto>,
}

/// Autocomplete entry: course id and title only
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchSuggestionDto {
    pub id: i64,
    pub name: String,
}

/// Query params for the search endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring to match against course titles (case-insensitive)
    #[serde(default)]
    pub q: String,
}
