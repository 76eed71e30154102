extern crate clap;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;

use clap::Arg;

use config::Settings;
use db::seed::SeedOutcome;
use error::SeedError;

// Command-line definition; every argument is optional
pub fn cli() -> clap::Command {
    clap::Command::new("data-engine-admin")
        .about("Seed the data-engine database with the initial admin user")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DATABASE")
                .env("DATA_ENGINE_DB")
                .help("Path to SQLite database file")
                .default_value(config::DEFAULT_DB_PATH),
        )
        .arg(
            Arg::new("seed_file")
                .short('s')
                .long("seed-file")
                .value_name("SEED_FILE")
                .help("Path to a YAML file overriding the admin email, name, password or bcrypt cost"),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .value_name("EMAIL")
                .env("ADMIN_EMAIL")
                .help("Admin email address"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .env("ADMIN_NAME")
                .help("Admin display name"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .value_name("PASSWORD")
                .env("ADMIN_PASSWORD")
                .hide_env_values(true)
                .help("Admin password (only used when the user is created)"),
        )
        .arg(
            Arg::new("bcrypt_cost")
                .long("bcrypt-cost")
                .value_name("COST")
                .value_parser(clap::value_parser!(u32))
                .help("bcrypt work factor for the password hash"),
        )
}

/// Connect, seed the admin user, and close the connection again
pub async fn run(settings: &Settings) -> Result<SeedOutcome, SeedError> {
    let pool = db::init_db(&settings.db_path).await?;

    let outcome = db::seed::seed_admin_user(&pool, &settings.admin).await;

    // Always release the connection, whatever the outcome
    pool.close().await;

    outcome
}
