// Configuration: built-in admin literals, seed file and command-line overrides

pub mod seed_file;

use clap::ArgMatches;
use std::path::Path;

use crate::auth::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use crate::error::SeedError;
pub use seed_file::SeedFile;

pub const DEFAULT_DB_PATH: &str = "data-engine.db";
pub const DEFAULT_ADMIN_EMAIL: &str = "davidbaeriksson@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "minstlol";
pub const DEFAULT_ADMIN_NAME: &str = "David Baeriksson";

/// Values used to build the admin record
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub bcrypt_cost: u32,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            full_name: DEFAULT_ADMIN_NAME.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AdminSeed {
    /// Overlay the keys present in a seed file
    pub fn merge_file(mut self, file: SeedFile) -> Self {
        if let Some(email) = file.email {
            self.email = email;
        }
        if let Some(full_name) = file.full_name {
            self.full_name = full_name;
        }
        if let Some(password) = file.password {
            self.password = password;
        }
        if let Some(cost) = file.bcrypt_cost {
            self.bcrypt_cost = cost;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: String,
    pub admin: AdminSeed,
}

impl Settings {
    // Precedence: flag or env > seed file > built-in literal
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, SeedError> {
        let db_path = matches
            .get_one::<String>("database")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_DB_PATH)
            .to_string();

        let mut admin = AdminSeed::default();

        if let Some(path) = matches.get_one::<String>("seed_file") {
            tracing::debug!(path = %path, "loading seed file");
            admin = admin.merge_file(SeedFile::load(Path::new(path))?);
        }

        if let Some(email) = matches.get_one::<String>("email") {
            admin.email = email.clone();
        }
        if let Some(name) = matches.get_one::<String>("name") {
            admin.full_name = name.clone();
        }
        if let Some(password) = matches.get_one::<String>("password") {
            admin.password = password.clone();
        }
        if let Some(cost) = matches.get_one::<u32>("bcrypt_cost") {
            admin.bcrypt_cost = *cost;
        }

        admin.email = admin.email.trim().to_string();
        admin.full_name = admin.full_name.trim().to_string();

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&admin.bcrypt_cost) {
            return Err(SeedError::Config(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST,
                admin.bcrypt_cost
            )));
        }

        Ok(Self { db_path, admin })
    }
}
