use std::process::ExitCode;

use data_engine_admin::{cli, config::Settings, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "data_engine_admin=info,sqlx=warn";

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries the report, logs go to stderr
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    // One invocation, one connection: no worker threads needed
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(seed_from_args())
}

async fn seed_from_args() -> ExitCode {
    // Usage errors exit 1 like every other failure; --help still exits 0
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    println!("Seeding database with admin user...");

    let result = match Settings::from_matches(&matches) {
        Ok(settings) => run(&settings).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome);
            println!("\nAdmin user seeding completed successfully!");
            println!("You can now log in to the admin interface with:");
            println!("  Email: {}", outcome.user().email);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error seeding database: {}", e);
            println!("\nAdmin user seeding failed!");
            ExitCode::FAILURE
        }
    }
}
