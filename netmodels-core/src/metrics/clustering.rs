//! Partitioned average local clustering coefficient.

use std::{collections::HashSet, time::Instant};

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

/// Returns the average local clustering coefficient of `graph`.
///
/// For a node `u` of degree `k >= 2` the local coefficient counts the
/// ordered pairs `(a, b)` of entries in `u`'s neighbour sequence with
/// `a != b` and `b` adjacent to `a`, divided by `k * (k - 1)`. Nodes of
/// degree below two contribute zero but still count towards the average.
/// Per-partition averages are folded according to
/// [`MetricsConfig::combination`].
///
/// # Errors
/// Returns [`MetricsError::MissingAdjacency`] when a neighbour id has no
/// adjacency entry, and [`MetricsError::ThreadPool`] when the worker pool
/// cannot be started.
///
/// # Examples
/// ```
/// use netmodels_core::{Graph, MetricsConfig, clustering_coefficient};
///
/// let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let value = clustering_coefficient(&triangle, &MetricsConfig::default())
///     .expect("triangle is well formed");
/// assert!((value - 1.0).abs() < 1e-12);
/// ```
#[instrument(
    name = "metrics.clustering_coefficient",
    err,
    skip(graph, config),
    fields(graph = graph.name(), nodes = graph.node_count(), workers = config.workers().get()),
)]
pub fn clustering_coefficient<A: Adjacency + Sync + ?Sized>(
    graph: &A,
    config: &MetricsConfig,
) -> Result<f64, MetricsError> {
    let started = Instant::now();
    let tallies = run_partitioned(graph, config.workers(), |worker, nodes| {
        partial_clustering(graph, worker, nodes)
    })?;
    let value = combine(&tallies, config.combination());
    telemetry::record_duration("clustering_coefficient", started.elapsed());
    debug!(value, "clustering coefficient computed");
    Ok(value)
}

fn partial_clustering<A: Adjacency + ?Sized>(
    graph: &A,
    worker: usize,
    nodes: &[NodeId],
) -> Result<PartitionTally, MetricsError> {
    let started = Instant::now();
    let mut total = 0.0;
    let mut processed = 0_usize;

    for &node in nodes {
        let neighbours = lookup(graph, node)?;
        let degree = neighbours.len();
        if degree < 2 {
            continue;
        }
        total += local_links(graph, neighbours)? as f64 / (degree * (degree - 1)) as f64;
        processed += 1;
        if processed % PROGRESS_INTERVAL == 0 {
            debug!(target: PROGRESS_TARGET, worker, processed, "clustering coefficient progress");
        }
    }

    let tally = PartitionTally {
        owned: nodes.len(),
        total,
        samples: nodes.len() as u64,
    };
    debug!(
        worker,
        partial = tally.average(),
        elapsed_ms = started.elapsed().as_millis(),
        "clustering partition completed"
    );
    Ok(tally)
}

/// Counts ordered pairs of distinct neighbour entries that are adjacent.
fn local_links<A: Adjacency + ?Sized>(
    graph: &A,
    neighbours: &[NodeId],
) -> Result<usize, MetricsError> {
    let mut links = 0;
    for &a in neighbours {
        let adjacent: HashSet<NodeId> = lookup(graph, a)?.iter().copied().collect();
        links += neighbours
            .iter()
            .filter(|&&b| b != a && adjacent.contains(&b))
            .count();
    }
    Ok(links)
}

fn lookup<A: Adjacency + ?Sized>(graph: &A, node: NodeId) -> Result<&[NodeId], MetricsError> {
    graph
        .neighbours(node)
        .ok_or(MetricsError::MissingAdjacency { node })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{Graph, PartitionCombination};

    fn clique(size: NodeId) -> Graph {
        Graph::from_edges((0..size).flat_map(|i| ((i + 1)..size).map(move |j| (i, j))))
    }

    fn config(workers: usize, combination: PartitionCombination) -> MetricsConfig {
        MetricsConfig::new(workers)
            .expect("worker count must be valid")
            .with_combination(combination)
    }

    #[rstest]
    #[case(3, 1)]
    #[case(5, 6)]
    #[case(12, 6)]
    #[case(12, 4)]
    fn complete_graph_has_unit_clustering(#[case] size: NodeId, #[case] workers: usize) {
        let graph = clique(size);
        let value = clustering_coefficient(
            &graph,
            &config(workers, PartitionCombination::PartitionMean),
        )
        .expect("clique is well formed");
        assert!((value - 1.0).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn star_has_zero_clustering() {
        let graph = Graph::from_edges((1..6).map(|leaf| (0, leaf)));
        let value = clustering_coefficient(&graph, &MetricsConfig::default())
            .expect("star is well formed");
        assert_eq!(value, 0.0);
    }

    #[test]
    fn low_degree_nodes_dilute_the_average() {
        // Triangle 0-1-2 plus pendant 3 on node 2.
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
        let single = config(1, PartitionCombination::PartitionMean);
        let value = clustering_coefficient(&graph, &single).expect("graph is well formed");
        // Local values: 1, 1, 1/3, 0 over four nodes.
        assert!((value - (7.0 / 3.0) / 4.0).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn partition_mean_differs_from_weighted_for_unequal_partitions() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
        // Three workers give partitions [0, 3], [1] and [2].
        let mean = clustering_coefficient(&graph, &config(3, PartitionCombination::PartitionMean))
            .expect("graph is well formed");
        let weighted = clustering_coefficient(&graph, &config(3, PartitionCombination::Weighted))
            .expect("graph is well formed");
        assert!((mean - (0.5 + 1.0 + 1.0 / 3.0) / 3.0).abs() < 1e-12, "got {mean}");
        assert!((weighted - (7.0 / 3.0) / 4.0).abs() < 1e-12, "got {weighted}");
    }

    #[test]
    fn empty_graph_has_zero_clustering() {
        let value = clustering_coefficient(&Graph::new(), &MetricsConfig::default())
            .expect("empty graph is well formed");
        assert_eq!(value, 0.0);
    }

    #[test]
    fn missing_adjacency_is_reported() {
        const NEIGHBOURS: &[NodeId] = &[1, 2];

        struct Dangling;

        impl Adjacency for Dangling {
            fn name(&self) -> &str {
                "dangling"
            }

            fn node_ids(&self) -> &[NodeId] {
                &[0]
            }

            fn neighbours(&self, node: NodeId) -> Option<&[NodeId]> {
                (node == 0).then_some(NEIGHBOURS)
            }
        }

        let err = clustering_coefficient(&Dangling, &MetricsConfig::default())
            .expect_err("dangling neighbour must fail");
        assert_eq!(err, MetricsError::MissingAdjacency { node: 1 });
    }
}
