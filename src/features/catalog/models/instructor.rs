use sqlx::FromRow;

/// Database model for an instructor
#[derive(Debug, Clone, FromRow)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub profession: String,
    pub about: String,
    pub email: String,
    pub phone_no: String,
    pub rating: f64,
    pub profile_image: Option<String>,
}
