//! Command-line argument parsing for SWAPI Fetcher
//!
//! This module defines the CLI structure using clap derive macros,
//! providing a user-friendly interface for browsing the people catalog
//! and managing configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// SWAPI Fetcher - Browse the Star Wars catalog
#[derive(Parser, Debug)]
#[command(
    name = "swapi_fetcher",
    version,
    about = "Browse the Star Wars people catalog with enriched listings",
    long_about = "A command-line browser for the Star Wars catalog API.
Walks the paginated people collection page by page and resolves each person's
homeworld and species references to display names as the pages load."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the people collection
    People(PeopleArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the people command
#[derive(Args, Debug, Clone)]
pub struct PeopleArgs {
    /// Maximum number of pages to load (default: the whole collection)
    #[arg(short, long)]
    pub pages: Option<usize>,

    /// Emit one JSON object per person instead of the table view
    #[arg(long)]
    pub json: bool,

    /// Override the catalog API root URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Create a default configuration file
    Init,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level implied by the global flags
    ///
    /// Returns `None` when no flag was given, so the configured default
    /// level applies.
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

impl PeopleArgs {
    /// Check that the page limit, when given, is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.pages == Some(0) {
            return Err("Number of pages must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_args_validation() {
        let mut args = PeopleArgs {
            pages: None,
            json: false,
            base_url: None,
        };

        // Valid configuration
        assert!(args.validate().is_ok());

        // Valid: explicit positive limit
        args.pages = Some(3);
        assert!(args.validate().is_ok());

        // Invalid: zero pages
        args.pages = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_people_command_parsing() {
        let cli = Cli::parse_from(["swapi_fetcher", "people", "--pages", "2", "--json"]);

        match cli.command {
            Commands::People(args) => {
                assert_eq!(args.pages, Some(2));
                assert!(args.json);
                assert!(args.base_url.is_none());
            }
            other => panic!("expected people command, got {:?}", other),
        }
    }

    #[test]
    fn test_config_command_parsing() {
        let cli = Cli::parse_from(["swapi_fetcher", "config", "init"]);

        match cli.command {
            Commands::Config(args) => assert!(matches!(args.action, ConfigAction::Init)),
            other => panic!("expected config command, got {:?}", other),
        }
    }

    #[test]
    fn test_log_level_from_flags() {
        let cli = Cli::parse_from(["swapi_fetcher", "people"]);
        assert!(cli.log_level().is_none());

        let cli = Cli::parse_from(["swapi_fetcher", "-q", "people"]);
        assert_eq!(cli.log_level(), Some(tracing::Level::ERROR));

        let cli = Cli::parse_from(["swapi_fetcher", "-v", "people"]);
        assert_eq!(cli.log_level(), Some(tracing::Level::INFO));

        let cli = Cli::parse_from(["swapi_fetcher", "--very-verbose", "people"]);
        assert_eq!(cli.log_level(), Some(tracing::Level::DEBUG));
    }
}
