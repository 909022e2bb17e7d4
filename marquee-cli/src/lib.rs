//! Command-line interface for ranking event lists offline.
//!
//! The `rank` subcommand loads a JSON array of events, scores it for one of
//! the three UI surfaces, and writes the ranked report as JSON. Options merge
//! from CLI flags, configuration files, and `MARQUEE_*` environment
//! variables.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;
use rank::RankArgs;

pub(crate) const ARG_RANK_EVENTS: &str = "events";
pub(crate) const ARG_RANK_SURFACE: &str = "surface";
pub(crate) const ARG_RANK_CATEGORY: &str = "category";
pub(crate) const ARG_RANK_CITY: &str = "city";
pub(crate) const ARG_RANK_AT: &str = "at";
pub(crate) const ARG_RANK_OUTPUT: &str = "output";
pub(crate) const ENV_RANK_EVENTS: &str = "MARQUEE_CMDS_RANK_EVENTS_PATH";
pub(crate) const ENV_RANK_SURFACE: &str = "MARQUEE_CMDS_RANK_SURFACE";

/// Run the Marquee CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] for argument, configuration, input, and output
/// failures; the binary prints the error and exits non-zero.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "marquee",
    about = "Offline ranking utilities for the Marquee engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a JSON event list for one surface.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
