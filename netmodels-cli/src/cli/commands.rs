//! Command implementations and argument parsing for the netmodels CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use netmodels_core::{
    Adjacency, GeneratorError, MetricsConfig, MetricsError, PartitionCombination,
    PreferentialAttachmentParams, SmallWorldParams, average_degree,
    generate_preferential_attachment, generate_small_world, summarize,
};
use netmodels_providers_edgelist::{EdgeListError, EdgeListFormat, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::report::ComparisonReport;

const DEFAULT_BETA: f64 = 0.1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netmodels",
    about = "Compare an empirical network with small-world and scale-free models."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compare an edge list against generated models of the same size.
    Compare(CompareCommand),
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone)]
pub struct CompareCommand {
    /// Path to the edge list.
    pub path: PathBuf,

    /// Layout of the edge list.
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    pub format: InputFormat,

    /// Worker partitions used by the parallel metrics.
    #[arg(long, default_value_t = MetricsConfig::DEFAULT_WORKERS.get())]
    pub workers: usize,

    /// Rewiring probability of the small-world model.
    #[arg(long, default_value_t = DEFAULT_BETA)]
    pub beta: f64,

    /// Seed for both generators; omitted means a fresh seed per run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How per-partition metric results are combined.
    #[arg(long, value_enum, default_value_t = Combination::PartitionMean)]
    pub combination: Combination,

    /// Which graph the empirical metrics and mean degree are taken from.
    #[arg(long, value_enum, default_value_t = Scope::Component)]
    pub scope: Scope,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Edge-list layouts accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Comma-separated rows with one header line.
    Csv,
    /// Whitespace-separated rows with `#` comments.
    Snap,
}

impl From<InputFormat> for EdgeListFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Csv => Self::Csv,
            InputFormat::Snap => Self::Snap,
        }
    }
}

/// Cross-partition combination strategies accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Combination {
    /// Unweighted mean of per-partition averages.
    PartitionMean,
    /// Global mean over every sample.
    Weighted,
}

impl From<Combination> for PartitionCombination {
    fn from(combination: Combination) -> Self {
        match combination {
            Combination::PartitionMean => Self::PartitionMean,
            Combination::Weighted => Self::Weighted,
        }
    }
}

/// Graph analysed as the empirical network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scope {
    /// The subgraph induced by the largest connected component.
    Component,
    /// Every loaded node and edge.
    Full,
}

impl Scope {
    pub(super) const fn label(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Full => "full",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge list could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Derived model parameters were rejected.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Metric computation failed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    /// The edge list contained no valid edges.
    #[error("`{path}` contains no valid edges")]
    EmptyGraph {
        /// Path of the empty edge list.
        path: PathBuf,
    },
}

impl CliError {
    /// Returns the stable code of the underlying core error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(err) => Some(err.code().as_str()),
            Self::Metrics(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::EdgeList(_) | Self::EmptyGraph { .. } => None,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation, or metric computation
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netmodels_cli::cli::{Cli, Combination, Command, CompareCommand, InputFormat, Scope, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut rows = String::from("numeric_id_1,numeric_id_2\n");
/// for node in 0..12 {
///     rows.push_str(&format!("{node},{}\n", (node + 1) % 12));
///     rows.push_str(&format!("{node},{}\n", (node + 2) % 12));
/// }
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), rows)?;
/// let cli = Cli {
///     command: Command::Compare(CompareCommand {
///         path: file.path().to_path_buf(),
///         format: InputFormat::Csv,
///         workers: 2,
///         beta: 0.1,
///         seed: Some(7),
///         combination: Combination::PartitionMean,
///         scope: Scope::Component,
///         name: Some("ring".into()),
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.network_size, 12);
/// assert_eq!(report.lattice_degree, 4);
/// assert_eq!(report.attachments, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ComparisonReport, CliError> {
    match cli.command {
        Command::Compare(compare) => {
            Span::current().record("command", field::display("compare"));
            run_compare(compare)
        }
    }
}

#[instrument(
    name = "cli.compare",
    err,
    skip(command),
    fields(
        path = field::Empty,
        scope = field::Empty,
        workers = command.workers,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_compare(command: CompareCommand) -> Result<ComparisonReport, CliError> {
    let CompareCommand {
        path,
        format,
        workers,
        beta,
        seed,
        combination,
        scope,
        name,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("scope", field::display(scope.label()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let config = MetricsConfig::new(workers)?.with_combination(combination.into());
    let chosen_name = derive_network_name(&path, name.as_deref());
    let reader = open_edge_list(&path)?;
    let provider = EdgeListProvider::try_from_reader(chosen_name, reader, format.into())?;
    let loaded = provider.stats();
    if loaded.skipped > 0 {
        warn!(skipped = loaded.skipped, "malformed rows were skipped");
    }
    let graph = provider.into_graph();
    if graph.is_empty() {
        return Err(CliError::EmptyGraph { path });
    }

    let component = graph.largest_component();
    let network_size = component.len();
    info!(
        nodes = graph.node_count(),
        component = network_size,
        "largest component extracted"
    );
    let analysed = match scope {
        Scope::Component => graph.induced_subgraph(&component),
        Scope::Full => graph,
    };

    let mean_degree = average_degree(&analysed);
    let (lattice_degree, attachments) = derive_model_degrees(mean_degree);
    let mut small_world = SmallWorldParams::new(network_size, lattice_degree, beta)?;
    let mut scale_free = PreferentialAttachmentParams::new(network_size, attachments)?;
    if let Some(seed) = seed {
        small_world = small_world.with_rng_seed(seed);
        scale_free = scale_free.with_rng_seed(seed);
    }
    info!(
        network_size,
        mean_degree,
        lattice_degree,
        attachments,
        beta,
        "model parameters derived"
    );

    let empirical = summarize(&analysed, &config)?;
    let small_world = summarize(&generate_small_world(&small_world), &config)?;
    let scale_free = summarize(&generate_preferential_attachment(&scale_free), &config)?;

    info!(network = empirical.name.as_str(), "comparison completed");
    Ok(ComparisonReport {
        loaded,
        scope,
        network_size,
        mean_degree,
        lattice_degree,
        attachments,
        beta,
        empirical,
        small_world,
        scale_free,
    })
}

/// Derives the small-world lattice degree `K` and the attachment count `M`
/// from the empirical mean degree.
///
/// `K` is the integer part of the mean degree rounded down to an even number
/// and at least two; `M` is half the integer part and at least one.
///
/// # Examples
/// ```
/// use netmodels_cli::cli::derive_model_degrees;
///
/// assert_eq!(derive_model_degrees(80.87), (80, 40));
/// assert_eq!(derive_model_degrees(5.9), (4, 2));
/// assert_eq!(derive_model_degrees(1.2), (2, 1));
/// ```
#[must_use]
pub fn derive_model_degrees(mean_degree: f64) -> (usize, usize) {
    let whole = mean_degree.max(0.0).floor() as usize;
    let lattice_degree = (whole - whole % 2).max(2);
    let attachments = (whole / 2).max(1);
    (lattice_degree, attachments)
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

pub(super) fn derive_network_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "network".to_owned())
}
