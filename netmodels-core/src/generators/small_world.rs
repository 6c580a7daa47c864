//! Small-world networks: a ring lattice with stochastic edge rewiring.

use std::time::Instant;

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, info, instrument};

use crate::{
    PROGRESS_INTERVAL,
    PROGRESS_TARGET,
    adjacency::Adjacency,
    graph::{Graph, NodeId},
};

use super::{params::SmallWorldParams, rng::build_rng};

/// Uniform draws attempted before enumerating the remaining candidates.
const MAX_REJECTION_DRAWS: usize = 64;

/// Generates a small-world network.
///
/// Each node `i` of a ring is first joined to `(i + 1) % N ..= (i + K/2) % N`.
/// Every one of those lattice edges is then, with probability `β`, removed
/// from both endpoints and replaced by an edge from `i` to a uniformly drawn
/// node that is neither `i` nor already adjacent to `i`. When no such node
/// exists the lattice edge is kept.
///
/// # Examples
/// ```
/// use netmodels_core::{Adjacency, SmallWorldParams, generate_small_world};
///
/// let params = SmallWorldParams::new(12, 4, 0.0).expect("parameters must be valid");
/// let lattice = generate_small_world(&params);
/// assert!(lattice.nodes().all(|node| lattice.degree(node) == Some(4)));
/// assert_eq!(lattice.neighbours(0), Some(&[1, 2, 10, 11][..]));
/// ```
#[instrument(
    name = "generators.small_world",
    skip(params),
    fields(
        nodes = params.nodes(),
        degree = params.degree(),
        beta = params.rewiring_probability(),
    ),
)]
pub fn generate_small_world(params: &SmallWorldParams) -> Graph {
    let started = Instant::now();
    let mut rng = build_rng(params.rng_seed());
    let mut graph = ring_lattice(params.nodes(), params.neighbours_per_side());
    let rewired = rewire(&mut graph, params, &mut rng);

    info!(
        nodes = graph.node_count(),
        edges = graph.adjacency_entry_count() / 2,
        rewired,
        elapsed_ms = started.elapsed().as_millis(),
        "small-world network generated"
    );
    graph
}

fn ring_lattice(nodes: usize, per_side: usize) -> Graph {
    let mut graph = Graph::with_name("small-world");
    let n = nodes as NodeId;
    for node in 0..n {
        graph.add_node(node);
    }
    for node in 0..n {
        for offset in 1..=per_side as NodeId {
            graph.add_edge(node, (node + offset) % n);
        }
    }
    graph
}

/// Rewires the lattice edges in place and returns how many were replaced.
fn rewire<R: Rng>(graph: &mut Graph, params: &SmallWorldParams, rng: &mut R) -> usize {
    let n = params.nodes() as NodeId;
    let beta = params.rewiring_probability();
    let mut rewired = 0_usize;

    for node in 0..n {
        if node % PROGRESS_INTERVAL as NodeId == 0 {
            debug!(target: PROGRESS_TARGET, node, rewired, "rewiring small-world lattice");
        }
        for offset in 1..=params.neighbours_per_side() as NodeId {
            if !rng.gen_bool(beta) {
                continue;
            }
            let target = (node + offset) % n;
            if !graph.remove_edge(node, target) {
                continue;
            }
            match draw_replacement(graph, node, rng) {
                Some(replacement) => {
                    graph.add_edge(node, replacement);
                    rewired += 1;
                }
                None => graph.add_edge(node, target),
            }
        }
    }
    rewired
}

/// Picks a node that is neither `node` nor one of its current neighbours.
fn draw_replacement<R: Rng>(graph: &Graph, node: NodeId, rng: &mut R) -> Option<NodeId> {
    let n = graph.node_count() as NodeId;
    let neighbours = graph.neighbours(node).unwrap_or_default();
    let eligible = |candidate: NodeId| candidate != node && !neighbours.contains(&candidate);

    for _ in 0..MAX_REJECTION_DRAWS {
        let candidate = rng.gen_range(0..n);
        if eligible(candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<NodeId> = (0..n).filter(|&candidate| eligible(candidate)).collect();
    candidates.choose(rng).copied()
}
