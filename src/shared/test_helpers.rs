#[cfg(test)]
use std::str::FromStr;

#[cfg(test)]
use fake::{faker::name::en::Name, Fake};

#[cfg(test)]
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[cfg(test)]
use sqlx::SqlitePool;

/// Placeholder hash for fixture users that never authenticate; flows that
/// check passwords go through `AccountService` instead.
#[cfg(test)]
const FIXTURE_PASSWORD_HASH: &str = "unusable-fixture-hash";

/// In-memory store with migrations applied. One connection, pinned open,
/// so every query in a test sees the same database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!().run(&pool).await.unwrap();

    pool
}

#[cfg(test)]
pub async fn seed_user(pool: &SqlitePool, username: &str, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, email, password_hash, is_superuser, created_at) \
         VALUES (?1, ?2, ?3, 0, ?4) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(FIXTURE_PASSWORD_HASH)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

#[cfg(test)]
pub async fn seed_course(pool: &SqlitePool, title: &str, price: f64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO courses (title, short_description, long_description, category, \
         learning_outcomes, price, old_price, discount_percent, duration, \
         students_enrolled, language, certification, rating, technologies_covered, \
         lessons_count) \
         VALUES (?1, 'Short description', 'Long description', 'full_stack', 'Outcomes', \
         ?2, ?2, 0, '4 weeks', 0, 'English', 'Certificate', 4.5, 'Rust', 10) \
         RETURNING id",
    )
    .bind(title)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[cfg(test)]
pub async fn seed_instructor(pool: &SqlitePool, email: &str) -> i64 {
    let name: String = Name().fake();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO instructors (name, profession, about, email, phone_no, rating) \
         VALUES (?1, 'Software Engineer', 'Teaches things', ?2, '+628123456789', 4.7) \
         RETURNING id",
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}
