use thiserror::Error;

/// Error raised while ingesting an edge list.
///
/// Malformed rows are skipped rather than reported, so reading the source is
/// the only way ingestion can fail.
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
