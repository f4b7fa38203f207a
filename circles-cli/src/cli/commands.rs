//! Command implementations and argument parsing for the circles CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use circles_core::{Analysis, CirclesError, analyse};
use circles_providers_edges::{EdgeListError, EdgeListProvider};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "circles",
    about = "Report friendship circle statistics for an edge list."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Replay an edge list and print circle statistics.
    Stats(StatsCommand),
}

/// Options accepted by the `stats` command.
#[derive(Debug, Args, Clone)]
pub struct StatsCommand {
    /// Path to the edge list: a user count, then one `user user` pair per line.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the edge list.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge list parsing failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Replaying the friendships failed.
    #[error(transparent)]
    Core(#[from] CirclesError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Statistics produced by replaying the edge list.
    pub analysis: Analysis,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or replaying the edge list fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use circles_cli::cli::{Cli, Command, StatsCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "5\n0 1\n1 2\n")?;
/// let cli = Cli {
///     command: Command::Stats(StatsCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.analysis.summary.circles, 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Stats(stats) => {
            Span::current().record("command", field::display("stats"));
            run_stats(stats)
        }
    }
}

#[instrument(
    name = "cli.stats",
    err,
    skip(command),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_stats(command: StatsCommand) -> Result<ExecutionSummary, CliError> {
    let StatsCommand { path, name } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_edge_list(&path)?;
    let provider = EdgeListProvider::try_from_reader(chosen_name, reader)?;
    let analysis = analyse(&provider)?;

    info!(
        data_source = analysis.data_source.as_str(),
        users = analysis.users,
        friendships = analysis.friendships,
        circles = analysis.summary.circles,
        largest = analysis.summary.largest,
        "command completed"
    );
    Ok(ExecutionSummary { analysis })
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use circles_cli::cli::{ExecutionSummary, render_summary};
/// # use circles_core::{Analysis, CircleSummary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     analysis: Analysis {
///         data_source: "demo".into(),
///         users: 5,
///         friendships: 2,
///         merges: 2,
///         summary: CircleSummary { circles: 3, largest: 3, smallest: 1, average: 1 },
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("circles: 3\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let analysis = &summary.analysis;
    writeln!(writer, "data source: {}", analysis.data_source)?;
    writeln!(writer, "users: {}", analysis.users)?;
    writeln!(writer, "friendships: {}", analysis.friendships)?;
    writeln!(writer, "merges: {}", analysis.merges)?;
    writeln!(writer, "circles: {}", analysis.summary.circles)?;
    writeln!(writer, "largest circle: {}", analysis.summary.largest)?;
    writeln!(writer, "smallest circle: {}", analysis.summary.smallest)?;
    writeln!(writer, "average circle: {}", analysis.summary.average)?;
    Ok(())
}
