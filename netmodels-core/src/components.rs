//! Breadth-first connected-component extraction.
//!
//! The visited set is an explicit value owned by a [`ComponentSearch`], so a
//! node reached by one search is never revisited by a later search that
//! shares the same set, without relying on any long-lived shared state.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument};

use crate::{adjacency::Adjacency, graph::NodeId, telemetry};

/// Set of nodes already assigned to a component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
    nodes: HashSet<NodeId>,
}

impl VisitedSet {
    /// Creates an empty visited set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `node` has been visited.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Marks `node` as visited. Returns `false` when it was already marked.
    pub fn mark(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether no node has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Repeated breadth-first searches over one graph sharing a visited set.
///
/// # Examples
/// ```
/// use netmodels_core::{ComponentSearch, Graph};
///
/// let graph = Graph::from_edges([(0, 1), (2, 3)]);
/// let mut search = ComponentSearch::new(&graph);
/// let first = search.component_from(0).expect("node 0 is unvisited");
/// assert_eq!(first.len(), 2);
/// assert!(search.component_from(1).is_none());
/// assert_eq!(search.component_from(3).map(|c| c.len()), Some(2));
/// assert_eq!(search.into_visited().len(), 4);
/// ```
#[derive(Debug)]
pub struct ComponentSearch<'g, A: ?Sized> {
    graph: &'g A,
    visited: VisitedSet,
}

impl<'g, A: Adjacency + ?Sized> ComponentSearch<'g, A> {
    /// Starts a search with an empty visited set.
    #[must_use]
    pub fn new(graph: &'g A) -> Self {
        Self::with_visited(graph, VisitedSet::new())
    }

    /// Resumes a search with a visited set returned by an earlier search.
    #[must_use]
    pub fn with_visited(graph: &'g A, visited: VisitedSet) -> Self {
        Self { graph, visited }
    }

    /// Returns the component containing `start`, or `None` when `start` was
    /// already visited or is not part of the graph.
    pub fn component_from(&mut self, start: NodeId) -> Option<HashSet<NodeId>> {
        if self.visited.contains(start) || self.graph.neighbours(start).is_none() {
            return None;
        }
        telemetry::record_traversal();

        let mut component = HashSet::new();
        let mut queue = VecDeque::from([start]);
        self.visited.mark(start);

        while let Some(node) = queue.pop_front() {
            component.insert(node);
            for &neighbour in self.graph.neighbours(node).unwrap_or_default() {
                if self.visited.mark(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
        Some(component)
    }

    /// Returns the visited set accumulated so far.
    #[must_use]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Ends the search and hands back its visited set.
    #[must_use]
    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

/// Returns every connected component in discovery order.
///
/// # Examples
/// ```
/// use netmodels_core::{Graph, connected_components};
///
/// let graph = Graph::from_edges([(0, 1), (5, 6), (6, 7)]);
/// let sizes: Vec<usize> = connected_components(&graph).iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, vec![2, 3]);
/// ```
pub fn connected_components<A: Adjacency + ?Sized>(graph: &A) -> Vec<HashSet<NodeId>> {
    let mut search = ComponentSearch::new(graph);
    graph
        .node_ids()
        .iter()
        .filter_map(|&node| search.component_from(node))
        .collect()
}

/// Returns the largest connected component of `graph`.
///
/// A later component only replaces the current best when it is strictly
/// larger, so the first maximal component in node order wins ties. The empty
/// graph yields an empty set.
#[instrument(
    name = "components.largest",
    skip(graph),
    fields(graph = graph.name(), nodes = graph.node_count()),
)]
pub fn largest_component<A: Adjacency + ?Sized>(graph: &A) -> HashSet<NodeId> {
    let mut search = ComponentSearch::new(graph);
    let mut largest = HashSet::new();
    let mut components = 0_usize;
    for &node in graph.node_ids() {
        let Some(component) = search.component_from(node) else {
            continue;
        };
        components += 1;
        if component.len() > largest.len() {
            largest = component;
        }
    }
    debug!(components, largest = largest.len(), "component search completed");
    largest
}
