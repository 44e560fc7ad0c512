//! Command-line interface components
//!
//! This module contains CLI-specific code for the SWAPI Fetcher application,
//! including argument parsing, command handlers, and progress display.

pub mod args;
pub mod commands;
pub mod progress;

pub use args::{Cli, Commands, ConfigAction, ConfigArgs, GlobalArgs, PeopleArgs};
pub use commands::{handle_config, handle_people};
pub use progress::{page_spinner, spinner_enabled};
