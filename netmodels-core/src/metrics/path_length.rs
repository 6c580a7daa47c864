//! Partitioned average shortest-path length over reachable pairs.

use std::{
    collections::{HashMap, VecDeque},
    time::Instant,
};

use tracing::{debug, instrument};

use crate::{
    PROGRESS_INTERVAL,
    PROGRESS_TARGET,
    adjacency::Adjacency,
    error::MetricsError,
    graph::NodeId,
    telemetry,
};

use super::{
    MetricsConfig,
    partition::{PartitionTally, combine, run_partitioned},
};

/// Returns the average shortest-path length between reachable node pairs.
///
/// Every node runs an unweighted breadth-first search; the distances to all
/// other reachable nodes are summed and divided by the number of such ordered
/// pairs. Unreachable pairs are excluded. A graph without any reachable pair
/// has an average path length of zero.
///
/// # Errors
/// Returns [`MetricsError::MissingAdjacency`] when a search reaches a node id
/// without an adjacency entry, and [`MetricsError::ThreadPool`] when the
/// worker pool cannot be started.
///
/// # Examples
/// ```
/// use netmodels_core::{Graph, MetricsConfig, PartitionCombination, average_path_length};
///
/// let path = Graph::from_edges([(0, 1), (1, 2)]);
/// let config = MetricsConfig::default().with_combination(PartitionCombination::Weighted);
/// let value = average_path_length(&path, &config).expect("path is well formed");
/// assert!((value - 8.0 / 6.0).abs() < 1e-12);
/// ```
#[instrument(
    name = "metrics.average_path_length",
    err,
    skip(graph, config),
    fields(graph = graph.name(), nodes = graph.node_count(), workers = config.workers().get()),
)]
pub fn average_path_length<A: Adjacency + Sync + ?Sized>(
    graph: &A,
    config: &MetricsConfig,
) -> Result<f64, MetricsError> {
    let started = Instant::now();
    let tallies = run_partitioned(graph, config.workers(), |worker, nodes| {
        partial_path_length(graph, worker, nodes)
    })?;
    let value = combine(&tallies, config.combination());
    telemetry::record_duration("average_path_length", started.elapsed());
    debug!(value, "average path length computed");
    Ok(value)
}

fn partial_path_length<A: Adjacency + ?Sized>(
    graph: &A,
    worker: usize,
    nodes: &[NodeId],
) -> Result<PartitionTally, MetricsError> {
    let started = Instant::now();
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    let mut total = 0_u64;
    let mut pairs = 0_u64;

    for (index, &start) in nodes.iter().enumerate() {
        bfs_distances(graph, start, &mut distances, &mut queue)?;
        for (&node, &distance) in &distances {
            if node != start {
                total += distance;
                pairs += 1;
            }
        }
        let processed = index + 1;
        if processed % PROGRESS_INTERVAL == 0 {
            debug!(target: PROGRESS_TARGET, worker, processed, "average path length progress");
        }
    }

    let tally = PartitionTally {
        owned: nodes.len(),
        total: total as f64,
        samples: pairs,
    };
    debug!(
        worker,
        pairs,
        partial = tally.average(),
        elapsed_ms = started.elapsed().as_millis(),
        "path length partition completed"
    );
    Ok(tally)
}

/// Fills `distances` with the hop count from `start` to every reachable node.
///
/// `distances` and `queue` are cleared first so a worker can reuse their
/// allocations across searches.
fn bfs_distances<A: Adjacency + ?Sized>(
    graph: &A,
    start: NodeId,
    distances: &mut HashMap<NodeId, u64>,
    queue: &mut VecDeque<(NodeId, u64)>,
) -> Result<(), MetricsError> {
    distances.clear();
    queue.clear();
    telemetry::record_traversal();

    distances.insert(start, 0);
    queue.push_back((start, 0));
    while let Some((node, distance)) = queue.pop_front() {
        let neighbours = graph
            .neighbours(node)
            .ok_or(MetricsError::MissingAdjacency { node })?;
        for &neighbour in neighbours {
            if !distances.contains_key(&neighbour) {
                distances.insert(neighbour, distance + 1);
                queue.push_back((neighbour, distance + 1));
            }
        }
    }
    Ok(())
}
