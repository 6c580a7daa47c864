//! Comparison report produced by the `compare` command.

use std::io::{self, Write};

use netmodels_core::NetworkSummary;
use netmodels_providers_edgelist::IngestStats;

use super::commands::Scope;

/// Everything the `compare` command measured.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Counters from reading the edge list.
    pub loaded: IngestStats,
    /// Graph the empirical metrics were computed on.
    pub scope: Scope,
    /// Size of the largest connected component, used as the model size.
    pub network_size: usize,
    /// Average degree of the analysed graph.
    pub mean_degree: f64,
    /// Ring-lattice degree `K` of the small-world model.
    pub lattice_degree: usize,
    /// Attachment count `M` of the preferential-attachment model.
    pub attachments: usize,
    /// Rewiring probability of the small-world model.
    pub beta: f64,
    /// Metrics of the empirical network.
    pub empirical: NetworkSummary,
    /// Metrics of the small-world model.
    pub small_world: NetworkSummary,
    /// Metrics of the preferential-attachment model.
    pub scale_free: NetworkSummary,
}

/// Renders `report` to `writer` as a plain-text table.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use netmodels_cli::cli::{ComparisonReport, Scope, render_report};
/// # use netmodels_core::NetworkSummary;
/// # use netmodels_providers_edgelist::IngestStats;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = |name: &str| NetworkSummary {
///     name: name.into(),
///     nodes: 4,
///     average_degree: 2.0,
///     clustering_coefficient: 0.0,
///     average_path_length: 1.333_333,
/// };
/// let report = ComparisonReport {
///     loaded: IngestStats { lines: 5, edges: 4, skipped: 0 },
///     scope: Scope::Component,
///     network_size: 4,
///     mean_degree: 2.0,
///     lattice_degree: 2,
///     attachments: 1,
///     beta: 0.1,
///     empirical: summary("square"),
///     small_world: summary("small-world"),
///     scale_free: summary("preferential-attachment"),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("largest component: 4 nodes"));
/// assert!(text.lines().any(|line| line.starts_with("square")));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &ComparisonReport, mut writer: impl Write) -> io::Result<()> {
    let loaded = report.loaded;
    writeln!(
        writer,
        "network: {} ({} edges loaded, {} rows skipped)",
        report.empirical.name, loaded.edges, loaded.skipped
    )?;
    writeln!(writer, "largest component: {} nodes", report.network_size)?;
    writeln!(
        writer,
        "models: n={} k={} m={} beta={} (mean degree {:.4} over {} graph)",
        report.network_size,
        report.lattice_degree,
        report.attachments,
        report.beta,
        report.mean_degree,
        report.scope.label(),
    )?;
    writeln!(
        writer,
        "{:<24} {:>10} {:>12} {:>12} {:>16}",
        "network", "nodes", "avg degree", "clustering", "avg path length"
    )?;
    for summary in [&report.empirical, &report.small_world, &report.scale_free] {
        writeln!(
            writer,
            "{:<24} {:>10} {:>12.4} {:>12.4} {:>16.4}",
            summary.name,
            summary.nodes,
            summary.average_degree,
            summary.clustering_coefficient,
            summary.average_path_length
        )?;
    }
    Ok(())
}
