//! Scale-free network growth by preferential attachment.
//!
//! Every inserted edge appends both endpoints to a history list, so a
//! uniform draw from the history picks a node with probability proportional
//! to its current degree.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::{
    PROGRESS_INTERVAL,
    PROGRESS_TARGET,
    graph::{Graph, NodeId},
};

use super::{params::PreferentialAttachmentParams, rng::build_rng};

/// Generates a preferential-attachment network.
///
/// Nodes `0..m` form a complete seed graph; each later node `i` is joined to
/// `m` distinct existing nodes drawn by degree. Every node therefore ends
/// with degree at least `m` and the result is connected.
///
/// # Examples
/// ```
/// use netmodels_core::{
///     Adjacency, PreferentialAttachmentParams, generate_preferential_attachment,
/// };
///
/// let params = PreferentialAttachmentParams::new(10, 2)
///     .expect("parameters must be valid")
///     .with_rng_seed(42);
/// let graph = generate_preferential_attachment(&params);
/// assert_eq!(graph.node_count(), 10);
/// assert!(graph.nodes().all(|node| graph.degree(node) >= Some(2)));
/// assert_eq!(graph.largest_component().len(), 10);
/// ```
#[instrument(
    name = "generators.preferential_attachment",
    skip(params),
    fields(nodes = params.nodes(), attachments = params.attachments()),
)]
pub fn generate_preferential_attachment(params: &PreferentialAttachmentParams) -> Graph {
    let started = Instant::now();
    let mut rng = build_rng(params.rng_seed());
    let mut state = AttachmentState::new(params.nodes(), params.attachments());

    state.seed_clique();
    for index in params.attachments()..params.nodes() {
        let node = index as NodeId;
        if index % PROGRESS_INTERVAL == 0 {
            debug!(
                target: PROGRESS_TARGET,
                node,
                history = state.history.len(),
                "growing preferential-attachment network"
            );
        }
        let targets = state.select_targets(&mut rng, node);
        state.graph.add_node(node);
        for target in targets {
            state.connect(node, target);
        }
    }

    let graph = state.graph;
    info!(
        nodes = graph.nodes().len(),
        edges = graph.adjacency_entry_count() / 2,
        elapsed_ms = started.elapsed().as_millis(),
        "preferential-attachment network generated"
    );
    graph
}

struct AttachmentState {
    graph: Graph,
    history: Vec<NodeId>,
    attachments: usize,
}

impl AttachmentState {
    fn new(nodes: usize, attachments: usize) -> Self {
        // Every edge contributes two history entries.
        let expected_edges = nodes.saturating_mul(attachments);
        Self {
            graph: Graph::with_name("preferential-attachment"),
            history: Vec::with_capacity(expected_edges.saturating_mul(2)),
            attachments,
        }
    }

    fn seed_clique(&mut self) {
        for i in 0..self.attachments as NodeId {
            self.graph.add_node(i);
            for j in 0..i {
                self.connect(i, j);
            }
        }
    }

    fn connect(&mut self, u: NodeId, v: NodeId) {
        self.graph.add_edge(u, v);
        self.history.push(u);
        self.history.push(v);
    }

    /// Draws `attachments` distinct targets for `new_node`.
    ///
    /// Terminates because the history holds every node below `new_node` and
    /// parameter validation guarantees `attachments <= new_node`. A seed of a
    /// single node has no edges yet, in which case the draw is uniform over
    /// the existing nodes.
    fn select_targets<R: Rng>(&self, rng: &mut R, new_node: NodeId) -> Vec<NodeId> {
        let mut targets = Vec::with_capacity(self.attachments);
        while targets.len() < self.attachments {
            let candidate = if self.history.is_empty() {
                rng.gen_range(0..new_node)
            } else {
                self.history[rng.gen_range(0..self.history.len())]
            };
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::Adjacency;

    fn generate(nodes: usize, attachments: usize, seed: u64) -> Graph {
        let params = PreferentialAttachmentParams::new(nodes, attachments)
            .expect("parameters must be valid")
            .with_rng_seed(seed);
        generate_preferential_attachment(&params)
    }

    #[rstest]
    #[case(10, 2)]
    #[case(50, 1)]
    #[case(200, 4)]
    fn every_node_reaches_attachment_degree(#[case] nodes: usize, #[case] attachments: usize) {
        let graph = generate(nodes, attachments, 11);
        assert_eq!(graph.node_count(), nodes);
        for node in graph.nodes() {
            let degree = graph.degree(node).expect("node must have adjacency");
            assert!(degree >= attachments, "node {node} has degree {degree}");
        }
    }

    #[test]
    fn edge_count_matches_seed_and_growth() {
        let (nodes, attachments) = (30, 3);
        let graph = generate(nodes, attachments, 5);
        let seed_edges = attachments * (attachments - 1) / 2;
        let growth_edges = (nodes - attachments) * attachments;
        assert_eq!(graph.adjacency_entry_count(), 2 * (seed_edges + growth_edges));
    }

    #[test]
    fn new_nodes_attach_to_distinct_targets() {
        let graph = generate(40, 3, 9);
        for node in 3..40_u64 {
            let mut earlier: Vec<NodeId> = graph
                .neighbours(node)
                .expect("node must exist")
                .iter()
                .copied()
                .filter(|&neighbour| neighbour < node)
                .collect();
            let total = earlier.len();
            earlier.sort_unstable();
            earlier.dedup();
            assert_eq!(earlier.len(), total);
            assert_eq!(total, 3);
        }
    }

    #[test]
    fn same_seed_reproduces_network() {
        assert_eq!(generate(64, 2, 3), generate(64, 2, 3));
    }

    #[test]
    fn history_tracks_both_endpoints() {
        let mut state = AttachmentState::new(4, 2);
        state.seed_clique();
        assert_eq!(state.history, vec![1, 0]);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut targets = state.select_targets(&mut rng, 2);
        targets.sort_unstable();
        assert_eq!(targets, vec![0, 1]);
    }

    #[test]
    fn single_attachment_falls_back_to_uniform_draw() {
        let mut state = AttachmentState::new(2, 1);
        state.seed_clique();
        assert!(state.history.is_empty());
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(state.select_targets(&mut rng, 1), vec![0]);
    }
}
