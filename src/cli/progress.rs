//! Progress feedback for page loads
//!
//! Loading a page fans out into a burst of sub-resource requests, so there
//! is a noticeable pause before each batch prints. This module provides the
//! spinner shown during that pause, and keeps it away from pipes and quiet
//! runs.

use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress;

/// Whether spinner output should be shown at all
///
/// Spinners go to stderr, so they are suppressed when stderr is not a
/// terminal or the user asked for quiet output.
pub fn spinner_enabled(quiet: bool) -> bool {
    !quiet && atty::is(atty::Stream::Stderr)
}

/// Creates the spinner shown while a page is being loaded and enriched
///
/// When disabled, a hidden bar is returned so call sites need no branching.
pub fn page_spinner(message: String, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(progress::SPINNER_TICK);

    spinner
}
