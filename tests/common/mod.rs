// Common test utilities shared across test files

use data_engine_admin::auth::MIN_BCRYPT_COST;
use data_engine_admin::config::AdminSeed;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;

/// Set up an in-memory SQLite database for testing
///
/// A single connection that never expires, otherwise every pooled
/// connection would see its own empty in-memory database.
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    data_engine_admin::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Admin seed with the cheapest bcrypt cost so tests stay fast
#[allow(dead_code)]
pub fn test_admin() -> AdminSeed {
    AdminSeed {
        bcrypt_cost: MIN_BCRYPT_COST,
        ..AdminSeed::default()
    }
}

/// Make every insert into users fail, simulating a write failure
#[allow(dead_code)]
pub async fn break_user_inserts(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TRIGGER reject_user_inserts BEFORE INSERT ON users
         BEGIN
             SELECT RAISE(ABORT, 'simulated write failure');
         END",
    )
    .execute(pool)
    .await
    .expect("Failed to create trigger");
}

/// Unique path for a throwaway database file
#[allow(dead_code)]
pub fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("data-engine-admin-{}.db", uuid::Uuid::new_v4()))
}
