use chrono::Local;
use clap::Parser;
use dotenvy::dotenv;
use finance_tracker::{
    cli::{self, Cli},
    config::{self, database},
    errors::Result,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<String> {
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    let db = database::init_database(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    cli::run(cli.command, &app_config, &db, Local::now().date_naive()).await
}
