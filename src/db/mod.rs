// Database module for the users table

pub mod seed;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;

const MIGRATION_001: &str = include_str!("../../migrations/001_users.sql");

// Initialize database and run migrations
pub async fn init_db(db_path: &str) -> Result<SqlitePool> {
    // Create the database file if it doesn't exist
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    // One short-lived invocation needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", db_path))?;

    run_migrations(&pool).await?;

    tracing::debug!(db_path, "database ready");
    Ok(pool)
}

// Apply the embedded schema; every statement is IF NOT EXISTS so reruns are no-ops
pub async fn run_migrations<'e, E>(executor: E) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::raw_sql(MIGRATION_001)
        .execute(executor)
        .await
        .context("Failed to run migration 001")?;

    Ok(())
}

// User model
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Values for a row that does not exist yet
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub hashed_password: &'a str,
    pub full_name: Option<&'a str>,
    pub is_active: bool,
    pub is_admin: bool,
}

// Find user by email (case-insensitive, matches the column collation)
pub async fn get_user_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, User>(
        "SELECT id, email, hashed_password, full_name, is_active, is_admin, created_at
         FROM users
         WHERE email = ? COLLATE NOCASE
         LIMIT 1"
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

// Insert a user and return the stored row
pub async fn insert_user<'e, E>(executor: E, new_user: &NewUser<'_>) -> Result<User, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = uuid::Uuid::new_v4().to_string();
    let created_at = Utc::now();

    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, hashed_password, full_name, is_active, is_admin, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING id, email, hashed_password, full_name, is_active, is_admin, created_at"
    )
    .bind(&id)
    .bind(new_user.email)
    .bind(new_user.hashed_password)
    .bind(new_user.full_name)
    .bind(new_user.is_active)
    .bind(new_user.is_admin)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub async fn count_users<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(executor)
        .await
}
