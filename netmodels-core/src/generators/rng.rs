//! RNG construction shared by the generators.

use rand::{SeedableRng, rngs::SmallRng};

/// Builds the generator-local RNG. Without a seed the RNG is drawn from OS
/// entropy, so every unseeded run produces a different network.
pub(super) fn build_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}
