//! Netmodels core library.
//!
//! Builds undirected graphs, extracts connected components, generates
//! preferential-attachment and small-world networks, and computes the
//! structural metrics used to compare them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod components;
mod error;
mod generators;
mod graph;
mod metrics;
mod telemetry;

/// Nodes processed between `debug` progress events.
pub(crate) const PROGRESS_INTERVAL: usize = 100;

/// Target of the periodic progress events emitted by long-running loops.
///
/// Progress is logged at `debug` under this target rather than the emitting
/// module, so it can be enabled or silenced on its own, e.g.
/// `RUST_LOG=info,netmodels::progress=debug`.
pub const PROGRESS_TARGET: &str = "netmodels::progress";

pub use crate::{
    adjacency::Adjacency,
    components::{ComponentSearch, VisitedSet, connected_components, largest_component},
    error::{GeneratorError, GeneratorErrorCode, MetricsError, MetricsErrorCode},
    generators::{
        PreferentialAttachmentParams, SmallWorldParams, generate_preferential_attachment,
        generate_small_world,
    },
    graph::{Graph, NodeId},
    metrics::{
        MetricsConfig, NetworkSummary, PartitionCombination, average_degree, average_path_length,
        clustering_coefficient, partition_round_robin, summarize,
    },
};
