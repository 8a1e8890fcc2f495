//! Command-line interface for sequencing trip waypoints offline.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod sequence;

pub use error::CliError;

pub(crate) const ARG_SEQUENCE_REQUEST: &str = "request-path";
pub(crate) const ARG_SEQUENCE_FORMAT: &str = "format";
pub(crate) const ARG_SEQUENCE_EARTH_RADIUS: &str = "earth-radius-km";
pub(crate) const ARG_SEQUENCE_ALLOW_OUT_OF_RANGE: &str = "allow-out-of-range";
pub(crate) const ENV_SEQUENCE_REQUEST: &str = "TOURLINE_CMDS_SEQUENCE_REQUEST_PATH";

/// Run the Tourline CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Sequence(args) => sequence::run_sequence(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourline",
    about = "Order trip stops so each hop goes to the nearest remaining stop",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Sequence the waypoints in a JSON request file.
    Sequence(sequence::SequenceArgs),
}

#[cfg(test)]
mod tests;
