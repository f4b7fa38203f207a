//! Command-line interface orchestration for the circles tool.
//!
//! The CLI offers a `stats` command that loads an edge list, replays every
//! friendship and reports the resulting circle statistics.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, StatsCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
