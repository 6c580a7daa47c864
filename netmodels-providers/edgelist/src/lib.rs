//! Edge-list provider building undirected graphs from line-oriented files.

mod errors;
mod format;
mod provider;

pub use errors::EdgeListError;
pub use format::EdgeListFormat;
pub use provider::{EdgeListProvider, IngestStats};
