//! Benchmark setup error type.
//!
//! Lets workload builders propagate failures with `?` instead of using
//! `.expect()`.

use netmodels_core::{GeneratorError, MetricsError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator parameters were rejected.
    #[error("generator setup failed: {0}")]
    Generator(#[from] GeneratorError),
    /// Metrics configuration was rejected.
    #[error("metrics setup failed: {0}")]
    Metrics(#[from] MetricsError),
}
