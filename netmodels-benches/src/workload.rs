//! Seeded networks used as benchmark inputs.

use netmodels_core::{
    Graph, PreferentialAttachmentParams, SmallWorldParams, generate_preferential_attachment,
    generate_small_world,
};

use crate::{error::BenchSetupError, params::GeneratorBenchParams};

/// Rewiring probability used by every small-world workload.
pub const BENCH_BETA: f64 = 0.1;

/// Validated small-world parameters for `params`, seeded with `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are invalid.
pub fn small_world_params(
    params: GeneratorBenchParams,
    seed: u64,
) -> Result<SmallWorldParams, BenchSetupError> {
    Ok(SmallWorldParams::new(params.nodes, params.degree, BENCH_BETA)?.with_rng_seed(seed))
}

/// Validated preferential-attachment parameters attaching `degree / 2`
/// edges per node, seeded with `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are invalid.
pub fn preferential_attachment_params(
    params: GeneratorBenchParams,
    seed: u64,
) -> Result<PreferentialAttachmentParams, BenchSetupError> {
    let attachments = params.degree.checked_div(2).unwrap_or_default();
    Ok(PreferentialAttachmentParams::new(params.nodes, attachments)?.with_rng_seed(seed))
}

/// Generates the small-world network described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are invalid.
pub fn small_world_network(
    params: GeneratorBenchParams,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    Ok(generate_small_world(&small_world_params(params, seed)?))
}

/// Generates the preferential-attachment network described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are invalid.
pub fn preferential_attachment_network(
    params: GeneratorBenchParams,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    Ok(generate_preferential_attachment(
        &preferential_attachment_params(params, seed)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use netmodels_core::{Adjacency, GeneratorError};
    use rstest::rstest;

    #[rstest]
    fn workloads_have_requested_size() -> Result<(), BenchSetupError> {
        let params = GeneratorBenchParams {
            nodes: 120,
            degree: 6,
        };
        assert_eq!(small_world_network(params, 1)?.node_count(), 120);
        assert_eq!(preferential_attachment_network(params, 1)?.node_count(), 120);
        Ok(())
    }

    #[rstest]
    fn degree_below_two_is_rejected() {
        let params = GeneratorBenchParams {
            nodes: 10,
            degree: 1,
        };
        let err = preferential_attachment_params(params, 1).expect_err("m = 0 must fail");
        assert!(matches!(
            err,
            BenchSetupError::Generator(GeneratorError::InvalidAttachmentCount { .. })
        ));
    }
}
