use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Top-level course category. The set is fixed; the store rejects anything
/// outside it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Category {
    FullStack,
    MobileApp,
    DataScience,
    DataAnalytics,
    SoftwareTesting,
    DigitalMarketing,
    UxUi,
    CyberSecurity,
}

/// Course subcategory. Not cross-checked against the parent category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Subcategory {
    MernStack,
    PythonStack,
    JavaStack,
    DotnetStack,
    Android,
    Ios,
    FlutterApp,
    FlutterAppDevelopment,
    DataScienceTraining,
    MachineLearningTraining,
    DataAnalyticsTraining,
    BusinessAnalyticsTraining,
    SoftwareTestingTraining,
    SeleniumAutomationTraining,
    ManualTestingTraining,
    DigitalMarketingTraining,
    UxUiTraining,
    EthicalHackingTraining,
}

/// Database model for a course
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub learning_outcomes: String,
    pub price: f64,
    pub old_price: f64,
    pub discount_percent: i64,
    pub instructor_id: Option<i64>,
    pub duration: String,
    pub students_enrolled: i64,
    pub language: String,
    pub certification: String,
    pub rating: f64,
    pub promo_video: Option<String>,
    pub technologies_covered: String,
    pub badge: Option<String>,
    pub level: Option<String>,
    pub lessons_count: i64,
}
