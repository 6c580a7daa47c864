//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

/// Parameters for a generator benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorBenchParams {
    /// Number of nodes in the generated network.
    pub nodes: usize,
    /// Lattice degree `K`; the attachment count is half of it.
    pub degree: usize,
}

impl fmt::Display for GeneratorBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.nodes, self.degree)
    }
}

/// Parameters for a metrics benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MetricsBenchParams {
    /// Number of nodes in the analysed network.
    pub nodes: usize,
    /// Worker partitions used by the metric.
    pub workers: usize,
}

impl fmt::Display for MetricsBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},workers={}", self.nodes, self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn generator_params_label() {
        let params = GeneratorBenchParams {
            nodes: 1_000,
            degree: 8,
        };
        assert_eq!(params.to_string(), "n=1000,k=8");
    }

    #[rstest]
    fn metrics_params_label() {
        let params = MetricsBenchParams {
            nodes: 500,
            workers: 6,
        };
        assert_eq!(params.to_string(), "n=500,workers=6");
    }
}
