//! Round-robin partitioning and the fork-join driver shared by the parallel
//! metrics.

use std::num::NonZeroUsize;

use rayon::{ThreadPoolBuilder, prelude::*};

use crate::{adjacency::Adjacency, error::MetricsError, graph::NodeId};

use super::PartitionCombination;

/// Distributes `nodes` over `workers` partitions, assigning the `i`-th node
/// to partition `i % workers`.
///
/// Exactly `workers` partitions are returned; trailing partitions are empty
/// when there are fewer nodes than workers.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use netmodels_core::partition_round_robin;
///
/// let workers = NonZeroUsize::new(3).expect("three is non-zero");
/// let partitions = partition_round_robin(&[10, 11, 12, 13, 14], workers);
/// assert_eq!(partitions, vec![vec![10, 13], vec![11, 14], vec![12]]);
/// ```
#[must_use]
pub fn partition_round_robin(nodes: &[NodeId], workers: NonZeroUsize) -> Vec<Vec<NodeId>> {
    let count = workers.get();
    let mut partitions: Vec<Vec<NodeId>> = (0..count)
        .map(|_| Vec::with_capacity(nodes.len().div_ceil(count)))
        .collect();
    for (index, &node) in nodes.iter().enumerate() {
        partitions[index % count].push(node);
    }
    partitions
}

/// Partial result produced by one worker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PartitionTally {
    /// Nodes owned by the partition.
    pub(crate) owned: usize,
    /// Sum of the per-sample values.
    pub(crate) total: f64,
    /// Number of samples contributing to `total`.
    pub(crate) samples: u64,
}

impl PartitionTally {
    /// Returns `total / samples`, or zero when the partition has no samples.
    pub(crate) fn average(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.total / self.samples as f64
        }
    }
}

/// Runs `work` once per round-robin partition on a pool of exactly `workers`
/// threads built for this call, and waits for every partition to finish.
pub(crate) fn run_partitioned<A, F>(
    graph: &A,
    workers: NonZeroUsize,
    work: F,
) -> Result<Vec<PartitionTally>, MetricsError>
where
    A: Adjacency + Sync + ?Sized,
    F: Fn(usize, &[NodeId]) -> Result<PartitionTally, MetricsError> + Sync,
{
    let partitions = partition_round_robin(graph.node_ids(), workers);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|index| format!("netmodels-metrics-{index}"))
        .build()
        .map_err(|error| MetricsError::ThreadPool {
            message: error.to_string(),
        })?;
    pool.install(|| {
        partitions
            .par_iter()
            .enumerate()
            .map(|(worker, nodes)| work(worker, nodes))
            .collect()
    })
}

/// Folds per-partition tallies into one value.
///
/// Partitions that own no nodes are ignored by
/// [`PartitionCombination::PartitionMean`]; an empty set of tallies yields
/// zero under either strategy.
pub(crate) fn combine(tallies: &[PartitionTally], combination: PartitionCombination) -> f64 {
    match combination {
        PartitionCombination::PartitionMean => {
            let (sum, partitions) = tallies
                .iter()
                .filter(|tally| tally.owned > 0)
                .fold((0.0, 0_usize), |(sum, count), tally| {
                    (sum + tally.average(), count + 1)
                });
            if partitions == 0 {
                0.0
            } else {
                sum / partitions as f64
            }
        }
        PartitionCombination::Weighted => {
            let merged = tallies
                .iter()
                .fold(PartitionTally::default(), |acc, tally| PartitionTally {
                    owned: acc.owned + tally.owned,
                    total: acc.total + tally.total,
                    samples: acc.samples + tally.samples,
                });
            merged.average()
        }
    }
}
