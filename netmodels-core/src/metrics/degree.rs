//! Average degree over neighbour-sequence lengths.

use tracing::instrument;

use crate::adjacency::Adjacency;

/// Returns the sum of neighbour-sequence lengths divided by the node count.
///
/// Repeated edges count once per adjacency entry. The empty graph has an
/// average degree of zero.
///
/// # Examples
/// ```
/// use netmodels_core::{Graph, average_degree};
///
/// let path = Graph::from_edges([(0, 1), (1, 2)]);
/// assert!((average_degree(&path) - 4.0 / 3.0).abs() < 1e-12);
/// assert_eq!(average_degree(&Graph::new()), 0.0);
/// ```
#[must_use]
#[instrument(
    name = "metrics.average_degree",
    skip(graph),
    fields(graph = graph.name(), nodes = graph.node_count()),
)]
pub fn average_degree<A: Adjacency + ?Sized>(graph: &A) -> f64 {
    let nodes = graph.node_count();
    if nodes == 0 {
        return 0.0;
    }
    let entries: usize = graph
        .node_ids()
        .iter()
        .filter_map(|&node| graph.degree(node))
        .sum();
    entries as f64 / nodes as f64
}
