use netmodels_core::{Graph, NodeId};

/// Complete graph on `offset..offset + size`.
#[must_use]
pub fn clique(offset: NodeId, size: NodeId) -> Graph {
    let mut graph = Graph::with_name(format!("clique-{size}"));
    for i in 0..size {
        graph.add_node(offset + i);
    }
    graph.extend((0..size).flat_map(|i| ((i + 1)..size).map(move |j| (offset + i, offset + j))));
    graph
}

/// Ring of `nodes` nodes, each joined to `per_side` neighbours on either side.
#[must_use]
pub fn ring(nodes: NodeId, per_side: NodeId) -> Graph {
    let mut graph = Graph::with_name("ring");
    for node in 0..nodes {
        graph.add_node(node);
    }
    for node in 0..nodes {
        for offset in 1..=per_side {
            graph.add_edge(node, (node + offset) % nodes);
        }
    }
    graph
}

/// Neighbours of `node` sorted ascending.
#[must_use]
pub fn sorted_neighbours(graph: &Graph, node: NodeId) -> Vec<NodeId> {
    use netmodels_core::Adjacency;

    let mut neighbours = graph
        .neighbours(node)
        .expect("node must have an adjacency entry")
        .to_vec();
    neighbours.sort_unstable();
    neighbours
}
