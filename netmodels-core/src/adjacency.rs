//! Read-only adjacency abstraction consumed by component search and metrics.

use crate::graph::NodeId;

/// Read contract for an undirected adjacency representation.
///
/// Every neighbour id returned by [`Adjacency::neighbours`] is expected to
/// have an adjacency entry of its own; metrics report
/// [`crate::MetricsError::MissingAdjacency`] when that does not hold.
///
/// # Examples
/// ```
/// use netmodels_core::{Adjacency, NodeId};
///
/// struct Pair {
///     ids: [NodeId; 2],
///     left: [NodeId; 1],
///     right: [NodeId; 1],
/// }
///
/// impl Adjacency for Pair {
///     fn name(&self) -> &str { "pair" }
///     fn node_ids(&self) -> &[NodeId] { &self.ids }
///     fn neighbours(&self, node: NodeId) -> Option<&[NodeId]> {
///         match node {
///             0 => Some(&self.left),
///             1 => Some(&self.right),
///             _ => None,
///         }
///     }
/// }
///
/// let pair = Pair { ids: [0, 1], left: [1], right: [0] };
/// assert_eq!(pair.node_count(), 2);
/// assert_eq!(pair.degree(0), Some(1));
/// assert!(pair.neighbours(7).is_none());
/// ```
pub trait Adjacency {
    /// Returns a human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Returns every node id in a stable iteration order.
    fn node_ids(&self) -> &[NodeId];

    /// Returns the neighbour sequence of `node`, or `None` when the node has
    /// no adjacency entry.
    fn neighbours(&self, node: NodeId) -> Option<&[NodeId]>;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    /// Returns whether the representation contains no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns the length of the neighbour sequence of `node`, counting
    /// repeated entries.
    fn degree(&self, node: NodeId) -> Option<usize> {
        self.neighbours(node).map(<[NodeId]>::len)
    }
}
