// Seeding the data-engine admin user

use sqlx::SqlitePool;
use std::fmt;

use crate::auth;
use crate::config::AdminSeed;
use crate::db::{self, NewUser, User};
use crate::error::{DbResultExt, SeedError};

/// What the seed run found or did
#[derive(Debug, Clone)]
pub enum SeedOutcome {
    AlreadyExists(User),
    Created(User),
}

impl SeedOutcome {
    pub fn user(&self) -> &User {
        match self {
            SeedOutcome::AlreadyExists(user) | SeedOutcome::Created(user) => user,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, SeedOutcome::Created(_))
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::AlreadyExists(_) => writeln!(f, "Admin user already exists!")?,
            SeedOutcome::Created(_) => writeln!(f, "Admin user created successfully!")?,
        }
        let user = self.user();
        writeln!(f, "Email: {}", user.email)?;
        writeln!(f, "Name: {}", user.full_name.as_deref().unwrap_or(""))?;
        write!(f, "Is Admin: {}", user.is_admin)
    }
}

/// Create the admin user unless a user with the same email already exists.
///
/// An existing row is reported as-is and never modified. On any failure
/// after the lookup the transaction is rolled back before the error is
/// returned.
pub async fn seed_admin_user(pool: &SqlitePool, admin: &AdminSeed) -> Result<SeedOutcome, SeedError> {
    auth::validate_email(&admin.email)?;
    auth::validate_password(&admin.password)?;

    let mut tx = pool.begin().await.db_err()?;

    // Check if admin user already exists
    let existing = match db::get_user_by_email(&mut *tx, &admin.email).await {
        Ok(existing) => existing,
        Err(e) => {
            rollback(tx).await;
            return Err(e.into());
        }
    };

    if let Some(user) = existing {
        tracing::info!(email = %user.email, id = %user.id, "admin user already present, nothing to do");
        // Read-only so far; release the transaction without writing
        rollback(tx).await;
        return Ok(SeedOutcome::AlreadyExists(user));
    }

    match create_admin(&mut tx, admin).await {
        Ok(user) => {
            tx.commit().await.db_err()?;
            tracing::info!(email = %user.email, id = %user.id, "admin user created");
            Ok(SeedOutcome::Created(user))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create admin user, rolling back");
            rollback(tx).await;
            Err(e)
        }
    }
}

async fn create_admin(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    admin: &AdminSeed,
) -> Result<User, SeedError> {
    let hashed_password = auth::hash_password_with_cost(&admin.password, admin.bcrypt_cost)?;

    let full_name = Some(admin.full_name.as_str()).filter(|name| !name.is_empty());
    let new_user = NewUser {
        email: &admin.email,
        hashed_password: &hashed_password,
        full_name,
        is_active: true,
        is_admin: true,
    };

    db::insert_user(&mut **tx, &new_user).await.db_err()
}

async fn rollback(tx: sqlx::Transaction<'_, sqlx::Sqlite>) {
    if let Err(e) = tx.rollback().await {
        // Dropping the connection still discards the transaction
        tracing::warn!(error = %e, "rollback failed");
    }
}
