// Error handling for data-engine-admin

use std::fmt;

/// Seeding error type
#[derive(Debug)]
pub enum SeedError {
    InvalidInput(String),
    Config(String),
    Hashing(String),
    Conflict(String),
    Database(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SeedError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SeedError::Hashing(msg) => write!(f, "Password hashing error: {}", msg),
            SeedError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            SeedError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<sqlx::Error> for SeedError {
    fn from(err: sqlx::Error) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false);

        if is_unique_violation {
            SeedError::Conflict(err.to_string())
        } else {
            SeedError::Database(err.to_string())
        }
    }
}

// anyhow is only used for setup steps (connect, migrate); keep the whole context chain
impl From<anyhow::Error> for SeedError {
    fn from(err: anyhow::Error) -> Self {
        SeedError::Database(format!("{:#}", err))
    }
}

// Extension trait for database result handling
pub trait DbResultExt<T> {
    /// Convert sqlx errors to SeedError, mapping unique violations to Conflict
    fn db_err(self) -> Result<T, SeedError>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn db_err(self) -> Result<T, SeedError> {
        self.map_err(SeedError::from)
    }
}
