//! Error types for the netmodels core library.
//!
//! Defines the error enums exposed by the generator and metrics APIs together
//! with stable, machine-readable codes for each variant.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error raised when synthetic network parameters are rejected.
///
/// Parameters are validated when the parameter objects are constructed, so a
/// generator never starts with inputs that could stall target selection or
/// replacement draws.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// A generated network must contain at least one node.
    #[error("generated networks need at least one node")]
    EmptyNetwork,
    /// The preferential-attachment count was zero or not below the node count.
    #[error("attachment count must satisfy 1 <= m < n (got m={attachments}, n={nodes})")]
    InvalidAttachmentCount {
        /// Edges requested per new node.
        attachments: usize,
        /// Requested network size.
        nodes: usize,
    },
    /// The ring-lattice degree was zero, odd, or not below the node count.
    #[error(
        "mean degree must be a positive even number below the node count (got k={degree}, n={nodes})"
    )]
    InvalidMeanDegree {
        /// Requested lattice degree.
        degree: usize,
        /// Requested network size.
        nodes: usize,
    },
    /// The rewiring probability was outside `[0, 1]` or not finite.
    #[error("rewiring probability must lie in [0, 1] (got {probability})")]
    InvalidRewiringProbability {
        /// The rejected probability.
        probability: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// A generated network must contain at least one node.
        EmptyNetwork => EmptyNetwork => "GENERATOR_EMPTY_NETWORK",
        /// The preferential-attachment count was out of range.
        InvalidAttachmentCount => InvalidAttachmentCount { .. } => "GENERATOR_INVALID_ATTACHMENT_COUNT",
        /// The ring-lattice degree was out of range or odd.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "GENERATOR_INVALID_MEAN_DEGREE",
        /// The rewiring probability was outside `[0, 1]`.
        InvalidRewiringProbability => InvalidRewiringProbability { .. } => "GENERATOR_INVALID_REWIRING_PROBABILITY",
    }
}

/// Error raised while computing network metrics.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MetricsError {
    /// Parallel metrics need at least one worker partition.
    #[error("worker count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The rejected worker count.
        got: usize,
    },
    /// A neighbour id was referenced without an adjacency entry of its own.
    ///
    /// This signals a graph that violated the symmetric edge-insertion
    /// contract and is not recoverable.
    #[error("node {node} is referenced but has no adjacency entry")]
    MissingAdjacency {
        /// The node id that could not be resolved.
        node: NodeId,
    },
    /// The per-call worker pool could not be started.
    #[error("failed to start the metrics worker pool: {message}")]
    ThreadPool {
        /// Description reported by the thread pool builder.
        message: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`MetricsError`] variants.
    enum MetricsErrorCode for MetricsError {
        /// Parallel metrics need at least one worker partition.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "METRICS_INVALID_WORKER_COUNT",
        /// A neighbour id was referenced without an adjacency entry.
        MissingAdjacency => MissingAdjacency { .. } => "METRICS_MISSING_ADJACENCY",
        /// The per-call worker pool could not be started.
        ThreadPool => ThreadPool { .. } => "METRICS_THREAD_POOL",
    }
}
