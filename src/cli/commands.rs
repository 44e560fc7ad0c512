//! Command handlers for SWAPI Fetcher CLI
//!
//! This module implements the main command handlers that coordinate between
//! CLI arguments, the configuration layer, and the page coordinator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::app::{
    LoadOutcome, PageBatch, PageCoordinator, SessionStats, SwapiClient, SwapiPageSource,
};
use crate::cli::args::{ConfigAction, ConfigArgs, PeopleArgs};
use crate::cli::progress::{page_spinner, spinner_enabled};
use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Handle the people command
///
/// Walks the people collection page by page, printing each enriched batch
/// as soon as it lands, until the collection or the page limit runs out.
pub async fn handle_people(args: PeopleArgs, quiet: bool, config: AppConfig) -> Result<()> {
    let start_time = Instant::now();

    // Validate people arguments
    args.validate().map_err(AppError::generic)?;

    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.swapi.base_url.clone());
    info!("Browsing people collection at {}", base_url);

    let client = Arc::new(SwapiClient::with_config(config.client.to_runtime_config())?);
    let source = Arc::new(SwapiPageSource::with_base_url(client.clone(), base_url));
    let coordinator = PageCoordinator::with_source(source, client);

    let show_spinner = spinner_enabled(quiet);
    let mut pages_printed = 0;

    loop {
        let spinner = page_spinner(
            format!("Loading page {}...", pages_printed + 1),
            show_spinner,
        );
        let outcome = coordinator.load_next().await;
        spinner.finish_and_clear();

        match outcome {
            Ok(LoadOutcome::Loaded(batch)) => {
                print_batch(&batch, args.json, pages_printed);
                pages_printed += 1;

                if let Some(limit) = args.pages {
                    if pages_printed >= limit {
                        debug!("Page limit of {} reached", limit);
                        break;
                    }
                }

                if !batch.has_more() {
                    break;
                }
            }
            Ok(LoadOutcome::EndOfCollection) => break,
            Ok(LoadOutcome::AlreadyLoading) => {
                // Cannot happen in this sequential loop, but the outcome is
                // part of the coordinator surface
                debug!("Load already in flight, requesting again");
            }
            Err(e) => {
                error!("Page load failed: {}", e);
                return Err(e);
            }
        }
    }

    if !quiet && !args.json {
        print_session_summary(&coordinator.stats().await, start_time.elapsed());
    }

    Ok(())
}

/// Handle the config command
pub async fn handle_config(args: ConfigArgs, config: AppConfig) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| {
                AppError::generic(format!("Failed to render configuration: {}", e))
            })?;
            println!("{}", rendered);
            Ok(())
        }
        ConfigAction::Init => {
            if let Some(path) = AppConfig::initialize_first_run().await? {
                info!("Configuration file ready at {}", path.display());
            }
            Ok(())
        }
    }
}

/// Print one enriched batch in the selected output format
fn print_batch(batch: &PageBatch, json: bool, pages_printed: usize) {
    if json {
        for person in &batch.people {
            match serde_json::to_string(person) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("Failed to serialize {}: {}", person.name, e),
            }
        }
        return;
    }

    if pages_printed == 0 {
        println!("{:<24} {:<16} {}", "Name", "Species", "Homeworld");
        println!("{:<24} {:<16} {}", "----", "-------", "---------");
    }

    for person in &batch.people {
        println!(
            "{:<24} {:<16} {}",
            person.name,
            person.species_name(),
            person.homeworld_name()
        );
    }
}

/// Print the end-of-session summary
fn print_session_summary(stats: &SessionStats, elapsed: Duration) {
    let failed_lookups = stats.species_failures + stats.homeworld_failures;

    println!();
    println!("📊 Session Summary:");
    println!("  Pages loaded: {}", stats.pages_loaded);
    println!("  People listed: {}", stats.people_loaded);
    println!("  Failed lookups: {}", failed_lookups);
    if stats.page_errors > 0 {
        println!("  Page errors: {}", stats.page_errors);
    }
    println!("  Total time: {:?}", elapsed);
}
