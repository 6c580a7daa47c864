//! Benchmark support crate for netmodels.
//!
//! Provides parameter types and seeded workloads used by the Criterion
//! benchmarks for network generation and the parallel metrics.

pub mod error;
pub mod params;
pub mod workload;
