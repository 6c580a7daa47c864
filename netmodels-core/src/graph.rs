//! Mutable undirected multigraph used for empirical and synthetic networks.
//!
//! Edges are stored as symmetric neighbour sequences. Repeated insertions are
//! kept, so each adjacency entry counts as one unit of degree. Nodes are
//! iterated in the order they were first seen, which keeps partitioning and
//! component discovery reproducible for a given construction sequence.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use crate::{adjacency::Adjacency, components};

/// Identifier of a node in a [`Graph`].
pub type NodeId = u64;

/// Adjacency-list graph with symmetric edge insertion.
///
/// # Examples
/// ```
/// use netmodels_core::{Adjacency, Graph};
///
/// let mut graph = Graph::with_name("demo");
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.neighbours(2), Some(&[1, 3][..]));
/// assert_eq!(graph.adjacency_entry_count(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    name: String,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl Graph {
    /// Creates an empty, unnamed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with a diagnostic name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a graph by inserting every pair from `edges`.
    ///
    /// # Examples
    /// ```
    /// use netmodels_core::{Adjacency, Graph};
    ///
    /// let graph = Graph::from_edges([(0, 1), (1, 2), (0, 1)]);
    /// assert_eq!(graph.degree(1), Some(3));
    /// ```
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Replaces the diagnostic name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Registers `node` without edges. Returns `false` when it already exists.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                self.order.push(node);
                true
            }
        }
    }

    /// Inserts the undirected edge `(u, v)`.
    ///
    /// `v` is appended to the neighbours of `u` and `u` to the neighbours of
    /// `v` in the same call. Self-loops and duplicates are not checked.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        self.entry_mut(u).push(v);
        self.entry_mut(v).push(u);
    }

    /// Removes one occurrence of the undirected edge `(u, v)` from both
    /// endpoints. Returns `false`, leaving the graph untouched, when either
    /// side does not record the edge.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let recorded = |from: NodeId, to: NodeId| {
            self.adjacency
                .get(&from)
                .is_some_and(|neighbours| neighbours.contains(&to))
        };
        if !recorded(u, v) || !recorded(v, u) {
            return false;
        }
        self.remove_entry(u, v);
        self.remove_entry(v, u);
        true
    }

    /// Returns whether `node` has an adjacency entry.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterates over node ids in first-seen order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Returns the total number of adjacency entries, i.e. twice the number
    /// of inserted edges.
    #[must_use]
    pub fn adjacency_entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns the largest connected component as a set of node ids.
    ///
    /// When several components share the maximal size, the one discovered
    /// first in node order is returned. Callers should not rely on which of
    /// several equally large components they receive.
    ///
    /// # Examples
    /// ```
    /// use netmodels_core::Graph;
    ///
    /// let graph = Graph::from_edges([(0, 1), (10, 11), (11, 12)]);
    /// let largest = graph.largest_component();
    /// assert_eq!(largest.len(), 3);
    /// assert!(largest.contains(&12));
    /// ```
    #[must_use]
    pub fn largest_component(&self) -> HashSet<NodeId> {
        components::largest_component(self)
    }

    /// Builds the subgraph induced by `keep`.
    ///
    /// Node order and neighbour multiplicities are preserved; adjacency
    /// entries pointing outside `keep` are dropped.
    #[must_use]
    pub fn induced_subgraph(&self, keep: &HashSet<NodeId>) -> Self {
        let mut subgraph = Self::with_name(self.name.clone());
        for node in self.order.iter().copied().filter(|id| keep.contains(id)) {
            let neighbours = self
                .adjacency
                .get(&node)
                .map(|list| {
                    list.iter()
                        .copied()
                        .filter(|neighbour| keep.contains(neighbour))
                        .collect()
                })
                .unwrap_or_default();
            subgraph.order.push(node);
            subgraph.adjacency.insert(node, neighbours);
        }
        subgraph
    }

    fn entry_mut(&mut self, node: NodeId) -> &mut Vec<NodeId> {
        let order = &mut self.order;
        self.adjacency.entry(node).or_insert_with(|| {
            order.push(node);
            Vec::new()
        })
    }

    fn remove_entry(&mut self, from: NodeId, to: NodeId) {
        if let Some(neighbours) = self.adjacency.get_mut(&from) {
            if let Some(position) = neighbours.iter().position(|&id| id == to) {
                neighbours.remove(position);
            }
        }
    }
}

impl Adjacency for Graph {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    fn neighbours(&self, node: NodeId) -> Option<&[NodeId]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }
}

impl Extend<(NodeId, NodeId)> for Graph {
    fn extend<I: IntoIterator<Item = (NodeId, NodeId)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}
