//! Validated parameter objects for the synthetic network generators.

use crate::error::GeneratorError;

/// Parameters for the preferential-attachment (scale-free) generator.
///
/// # Examples
/// ```
/// use netmodels_core::PreferentialAttachmentParams;
///
/// let params = PreferentialAttachmentParams::new(100, 3)
///     .expect("parameters must be valid")
///     .with_rng_seed(7);
/// assert_eq!(params.nodes(), 100);
/// assert_eq!(params.attachments(), 3);
/// assert_eq!(params.rng_seed(), Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferentialAttachmentParams {
    nodes: usize,
    attachments: usize,
    rng_seed: Option<u64>,
}

impl PreferentialAttachmentParams {
    /// Creates parameters for a network of `nodes` nodes where every new node
    /// attaches to `attachments` distinct existing nodes.
    ///
    /// # Errors
    /// Returns [`GeneratorError::EmptyNetwork`] when `nodes` is zero and
    /// [`GeneratorError::InvalidAttachmentCount`] unless
    /// `1 <= attachments < nodes`.
    pub fn new(nodes: usize, attachments: usize) -> Result<Self, GeneratorError> {
        if nodes == 0 {
            return Err(GeneratorError::EmptyNetwork);
        }
        if attachments == 0 || attachments >= nodes {
            return Err(GeneratorError::InvalidAttachmentCount { attachments, nodes });
        }
        Ok(Self {
            nodes,
            attachments,
            rng_seed: None,
        })
    }

    /// Seeds the generator RNG to make the output deterministic.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the target node count.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of edges each new node creates.
    #[must_use]
    pub fn attachments(&self) -> usize {
        self.attachments
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

/// Parameters for the small-world (ring lattice plus rewiring) generator.
///
/// # Examples
/// ```
/// use netmodels_core::{GeneratorError, SmallWorldParams};
///
/// let params = SmallWorldParams::new(50, 4, 0.1).expect("parameters must be valid");
/// assert_eq!(params.neighbours_per_side(), 2);
///
/// let odd = SmallWorldParams::new(50, 3, 0.1).expect_err("odd degree is rejected");
/// assert!(matches!(odd, GeneratorError::InvalidMeanDegree { degree: 3, .. }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SmallWorldParams {
    nodes: usize,
    degree: usize,
    rewiring_probability: f64,
    rng_seed: Option<u64>,
}

impl SmallWorldParams {
    /// Creates parameters for a ring of `nodes` nodes, each joined to its
    /// `degree / 2` nearest neighbours on either side, with every lattice
    /// edge rewired with probability `rewiring_probability`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::EmptyNetwork`] when `nodes` is zero,
    /// [`GeneratorError::InvalidMeanDegree`] when `degree` is zero, odd, or
    /// not below `nodes`, and [`GeneratorError::InvalidRewiringProbability`]
    /// when the probability is outside `[0, 1]`.
    pub fn new(
        nodes: usize,
        degree: usize,
        rewiring_probability: f64,
    ) -> Result<Self, GeneratorError> {
        if nodes == 0 {
            return Err(GeneratorError::EmptyNetwork);
        }
        if degree == 0 || degree % 2 != 0 || degree >= nodes {
            return Err(GeneratorError::InvalidMeanDegree { degree, nodes });
        }
        if !(0.0..=1.0).contains(&rewiring_probability) {
            return Err(GeneratorError::InvalidRewiringProbability {
                probability: rewiring_probability,
            });
        }
        Ok(Self {
            nodes,
            degree,
            rewiring_probability,
            rng_seed: None,
        })
    }

    /// Seeds the generator RNG to make the output deterministic.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the ring size.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the lattice degree `K`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns `K / 2`, the lattice neighbours joined on each side.
    #[must_use]
    pub fn neighbours_per_side(&self) -> usize {
        self.degree / 2
    }

    /// Returns the per-edge rewiring probability `β`.
    #[must_use]
    pub fn rewiring_probability(&self) -> f64 {
        self.rewiring_probability
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}
