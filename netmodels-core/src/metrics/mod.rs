//! Structural metrics over any [`Adjacency`] implementor.
//!
//! Average degree is computed sequentially. Clustering coefficient and
//! average path length distribute node ids round-robin over a fixed number
//! of worker partitions, run each partition on a thread pool built for the
//! call, and fold the per-partition results once every worker has finished.

mod clustering;
mod degree;
mod partition;
mod path_length;

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{adjacency::Adjacency, error::MetricsError};

pub use clustering::clustering_coefficient;
pub use degree::average_degree;
pub use partition::partition_round_robin;
pub use path_length::average_path_length;

/// How per-partition results are folded into one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PartitionCombination {
    /// Unweighted mean of the per-partition averages. Partitions that own no
    /// nodes are left out, so a graph with fewer nodes than workers is not
    /// pulled towards zero. For average path length this differs from a
    /// fixed division by the worker count: a path `0-1-2` over six workers
    /// yields `4/3` here rather than `2/3`.
    #[default]
    PartitionMean,
    /// Single global mean over every sample of every partition.
    Weighted,
}

/// Configuration for the parallel metrics.
///
/// # Examples
/// ```
/// use netmodels_core::{MetricsConfig, MetricsError, PartitionCombination};
///
/// let config = MetricsConfig::default();
/// assert_eq!(config.workers().get(), 6);
/// assert_eq!(config.combination(), PartitionCombination::PartitionMean);
///
/// let err = MetricsConfig::new(0).expect_err("zero workers are rejected");
/// assert_eq!(err, MetricsError::InvalidWorkerCount { got: 0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricsConfig {
    workers: NonZeroUsize,
    combination: PartitionCombination,
}

impl MetricsConfig {
    /// Worker partitions used when none are configured.
    pub const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(6) {
        Some(workers) => workers,
        None => panic!("default worker count must be non-zero"),
    };

    /// Creates a configuration with `workers` partitions.
    ///
    /// # Errors
    /// Returns [`MetricsError::InvalidWorkerCount`] when `workers` is zero.
    pub fn new(workers: usize) -> Result<Self, MetricsError> {
        let workers =
            NonZeroUsize::new(workers).ok_or(MetricsError::InvalidWorkerCount { got: workers })?;
        Ok(Self {
            workers,
            combination: PartitionCombination::default(),
        })
    }

    /// Selects how per-partition results are combined.
    #[must_use]
    pub fn with_combination(mut self, combination: PartitionCombination) -> Self {
        self.combination = combination;
        self
    }

    /// Returns the number of worker partitions.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Returns the combination strategy.
    #[must_use]
    pub fn combination(&self) -> PartitionCombination {
        self.combination
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            workers: Self::DEFAULT_WORKERS,
            combination: PartitionCombination::default(),
        }
    }
}

/// The full set of metrics computed for one network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkSummary {
    /// Diagnostic name of the summarised network.
    pub name: String,
    /// Number of nodes.
    pub nodes: usize,
    /// Sum of neighbour-sequence lengths over node count.
    pub average_degree: f64,
    /// Average local clustering coefficient.
    pub clustering_coefficient: f64,
    /// Average shortest-path length over reachable pairs.
    pub average_path_length: f64,
}

/// Computes every metric for `graph`.
///
/// # Errors
/// Propagates failures from [`clustering_coefficient`] and
/// [`average_path_length`].
///
/// # Examples
/// ```
/// use netmodels_core::{Graph, MetricsConfig, summarize};
///
/// let square = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let summary = summarize(&square, &MetricsConfig::default()).expect("square is well formed");
/// assert_eq!(summary.nodes, 4);
/// assert_eq!(summary.average_degree, 2.0);
/// assert_eq!(summary.clustering_coefficient, 0.0);
/// ```
#[instrument(
    name = "metrics.summarize",
    err,
    skip(graph, config),
    fields(graph = graph.name(), nodes = graph.node_count()),
)]
pub fn summarize<A: Adjacency + Sync + ?Sized>(
    graph: &A,
    config: &MetricsConfig,
) -> Result<NetworkSummary, MetricsError> {
    let summary = NetworkSummary {
        name: graph.name().to_owned(),
        nodes: graph.node_count(),
        average_degree: average_degree(graph),
        clustering_coefficient: clustering_coefficient(graph, config)?,
        average_path_length: average_path_length(graph, config)?,
    };
    info!(
        average_degree = summary.average_degree,
        clustering = summary.clustering_coefficient,
        path_length = summary.average_path_length,
        "network summarised"
    );
    Ok(summary)
}
