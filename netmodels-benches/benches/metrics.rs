//! Parallel metric benchmarks.
//!
//! Runs the clustering coefficient and the average shortest path length on
//! a seeded small-world network across several worker counts. The network
//! is generated once per size, outside the timed loop.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use netmodels_benches::{
    error::BenchSetupError,
    params::{GeneratorBenchParams, MetricsBenchParams},
    workload::small_world_network,
};
use netmodels_core::{MetricsConfig, average_path_length, clustering_coefficient};

/// Seed used for every generated network.
const SEED: u64 = 7;

/// Lattice degree of the analysed network.
const DEGREE: usize = 8;

/// Network sizes to benchmark.
const NODE_COUNTS: &[usize] = &[500, 2_000];

/// Worker partitions to benchmark.
const WORKER_COUNTS: &[usize] = &[1, 2, 6];

fn metrics_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("metrics");
    group.sample_size(10);

    for &nodes in NODE_COUNTS {
        let graph = small_world_network(
            GeneratorBenchParams {
                nodes,
                degree: DEGREE,
            },
            SEED,
        )?;
        for &workers in WORKER_COUNTS {
            let config = MetricsConfig::new(workers)?;
            let bench_params = MetricsBenchParams { nodes, workers };

            group.bench_with_input(
                BenchmarkId::new("clustering_coefficient", bench_params),
                &config,
                |b, metrics_config| b.iter(|| clustering_coefficient(&graph, metrics_config)),
            );
            group.bench_with_input(
                BenchmarkId::new("average_path_length", bench_params),
                &config,
                |b, metrics_config| b.iter(|| average_path_length(&graph, metrics_config)),
            );
        }
    }

    group.finish();
    Ok(())
}

fn metrics(c: &mut Criterion) {
    if let Err(err) = metrics_impl(c) {
        panic!("metrics benchmark setup failed: {err}");
    }
}

criterion_group!(benches, metrics);
criterion_main!(benches);
