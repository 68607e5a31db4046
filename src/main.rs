use church_ledger::{
    cli::Cli,
    commands::execute,
    config::{
        database::{connect, create_tables},
        settings::load_app_configuration,
    },
    errors::Result,
    response::Response,
};
use clap::Parser;
use dotenvy::dotenv;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Load .env file first so RUST_LOG and DATABASE_URL can come from it
    let dotenv_loaded = dotenv().is_ok();

    // 2. Initialize tracing on stderr; stdout carries the JSON response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    debug!(dotenv_loaded, "Attempted to load .env file.");

    let cli = Cli::parse();

    let response: Response<Value> = run(cli)
        .await
        .inspect_err(|e| error!("Command failed: {}", e))
        .into();

    match serde_json::to_string_pretty(&response) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run(cli: Cli) -> Result<Value> {
    // 3. Load the main application configuration
    let app_config = load_app_configuration(cli.config.as_deref())?;
    info!("Successfully processed application configuration.");

    // 4. Open the database and make sure every table exists
    let db = connect(&app_config.database).await?;
    create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Run the requested command
    execute(&db, &app_config, cli.command).await
}
