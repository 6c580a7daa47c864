mod common;

use netmodels_core::{
    Graph, MetricsConfig, MetricsError, PartitionCombination, PreferentialAttachmentParams,
    average_degree, average_path_length, clustering_coefficient, generate_preferential_attachment,
    summarize,
};
use rstest::{fixture, rstest};

use common::{clique, ring};

#[fixture]
fn config() -> MetricsConfig {
    MetricsConfig::default()
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn ring_lattice_has_exact_average_degree() {
    assert_eq!(average_degree(&ring(100, 2)), 4.0);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
fn preferential_seed_clique_has_unit_clustering(#[case] attachments: usize, config: MetricsConfig) {
    let params = PreferentialAttachmentParams::new(attachments + 1, attachments)
        .expect("parameters must be valid")
        .with_rng_seed(1);
    // With one grown node the graph is a complete graph on `attachments + 1` nodes.
    let graph = generate_preferential_attachment(&params);
    approx(
        clustering_coefficient(&graph, &config).expect("graph is well formed"),
        1.0,
    );
}

#[rstest]
fn disconnected_graph_excludes_unreachable_pairs(config: MetricsConfig) {
    let mut graph = clique(0, 4);
    graph.extend([(10, 11), (11, 12)]);
    let weighted = config.with_combination(PartitionCombination::Weighted);
    // Clique pairs: 12 at distance 1. Path pairs: 4 at distance 1, 2 at distance 2.
    approx(
        average_path_length(&graph, &weighted).expect("graph is well formed"),
        20.0 / 18.0,
    );
}

#[rstest]
#[case(PartitionCombination::PartitionMean)]
#[case(PartitionCombination::Weighted)]
fn graphs_without_degree_two_nodes_have_zero_clustering(#[case] combination: PartitionCombination) {
    let graph = Graph::from_edges([(0, 1), (2, 3), (4, 5)]);
    let config = MetricsConfig::default().with_combination(combination);
    assert_eq!(
        clustering_coefficient(&graph, &config).expect("graph is well formed"),
        0.0
    );
    approx(
        average_path_length(&graph, &config).expect("graph is well formed"),
        1.0,
    );
}

#[rstest]
fn ring_lattice_metrics_match_closed_forms(config: MetricsConfig) {
    let graph = ring(30, 2);
    // Each node of a K=4 ring closes 3 of its 6 neighbour pairs.
    approx(
        clustering_coefficient(&graph, &config).expect("ring is well formed"),
        0.5,
    );
    // Ring offsets 1..=14 on either side cost ceil(offset / 2) hops; the
    // opposite node costs 8.
    approx(
        average_path_length(&graph, &config).expect("ring is well formed"),
        120.0 / 29.0,
    );
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(6)]
#[case(16)]
fn weighted_results_do_not_depend_on_worker_count(#[case] workers: usize) {
    let graph = ring(25, 1);
    let config = MetricsConfig::new(workers)
        .expect("worker count must be valid")
        .with_combination(PartitionCombination::Weighted);
    // Cycle of 25: distances 1..=12 twice each from every node.
    approx(
        average_path_length(&graph, &config).expect("cycle is well formed"),
        2.0 * 78.0 / 24.0,
    );
    approx(
        clustering_coefficient(&graph, &config).expect("cycle is well formed"),
        0.0,
    );
}

#[test]
fn more_workers_than_nodes_still_averages_owned_partitions() {
    let config = MetricsConfig::new(10).expect("worker count must be valid");
    approx(
        clustering_coefficient(&clique(0, 3), &config).expect("triangle is well formed"),
        1.0,
    );
    approx(
        average_path_length(&clique(0, 3), &config).expect("triangle is well formed"),
        1.0,
    );
}

#[rstest]
fn summary_collects_every_metric(config: MetricsConfig) {
    let graph = clique(0, 5);
    let summary = summarize(&graph, &config).expect("clique is well formed");
    assert_eq!(summary.name, "clique-5");
    assert_eq!(summary.nodes, 5);
    approx(summary.average_degree, 4.0);
    approx(summary.clustering_coefficient, 1.0);
    approx(summary.average_path_length, 1.0);
}

#[test]
fn zero_workers_are_rejected() {
    assert_eq!(
        MetricsConfig::new(0),
        Err(MetricsError::InvalidWorkerCount { got: 0 })
    );
}
