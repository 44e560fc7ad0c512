//! SWAPI Fetcher CLI application
//!
//! Command-line interface for browsing the Star Wars catalog API people
//! collection, with concurrent sub-resource enrichment and progress feedback.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use swapi_fetcher::cli::{handle_config, handle_people, Cli, Commands};
use swapi_fetcher::config::{AppConfig, LoggingConfig};
use swapi_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    // Initialize program
    let result = run().await;

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok(); // Ignore errors if file doesn't exist

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the file can set the level
    let config = AppConfig::load(cli.global.config.clone()).await?;

    // Initialize logging based on verbosity
    init_logging(&cli, &config.logging);

    info!("SWAPI Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    // Execute the appropriate command
    match cli.command {
        Commands::People(args) => {
            info!("Executing people command");
            handle_people(args, cli.global.quiet, config).await
        }
        Commands::Config(args) => {
            info!("Executing config command");
            handle_config(args, config).await
        }
    }
}

/// Initialize logging from the CLI verbosity flags and the config file
///
/// Flags win over the configured level; without either, the level from the
/// config file (or its default) applies.
fn init_logging(cli: &Cli, logging: &LoggingConfig) {
    let log_level = match cli.log_level() {
        Some(level) => level.to_string().to_lowercase(),
        None => logging.level.clone(),
    };

    // Create environment filter; the level name is a valid tracing level by
    // this point (flags map from tracing::Level, config is validated at load)
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("swapi_fetcher={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(logging.colored_output)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
