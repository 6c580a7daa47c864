//! Edge-list ingestion into a [`Graph`].

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use netmodels_core::{Graph, PROGRESS_TARGET};
use tracing::{debug, info, instrument, trace};

use crate::{errors::EdgeListError, format::EdgeListFormat};

/// Lines read between `debug` progress events.
const CHUNK_LINES: usize = 100_000;

/// Counters collected while reading an edge list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Every line read, including headers, comments and blank lines.
    pub lines: usize,
    /// Rows inserted as edges.
    pub edges: usize,
    /// Data rows that were not valid UTF-8 or did not hold exactly two
    /// non-negative integers.
    pub skipped: usize,
}

/// Graph loaded from an edge-list source.
#[derive(Debug)]
pub struct EdgeListProvider {
    graph: Graph,
    stats: IngestStats,
    format: EdgeListFormat,
}

impl EdgeListProvider {
    /// Reads every edge from `reader`.
    ///
    /// Header, comment and blank lines are ignored; rows that are not valid
    /// UTF-8 or do not parse are counted in [`IngestStats::skipped`] and
    /// otherwise dropped.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use netmodels_core::Adjacency;
    /// use netmodels_providers_edgelist::{EdgeListFormat, EdgeListProvider};
    ///
    /// let raw = "numeric_id_1,numeric_id_2\n0,1\n1,2\nbad row\n";
    /// let provider =
    ///     EdgeListProvider::try_from_reader("twitch", Cursor::new(raw), EdgeListFormat::Csv)
    ///         .expect("in-memory reads cannot fail");
    /// assert_eq!(provider.graph().node_count(), 3);
    /// assert_eq!(provider.stats().edges, 2);
    /// assert_eq!(provider.stats().skipped, 1);
    /// ```
    #[instrument(name = "edgelist.read", err, skip(name, reader), fields(name = tracing::field::Empty))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        mut reader: R,
        format: EdgeListFormat,
    ) -> Result<Self, EdgeListError> {
        let name = name.into();
        tracing::Span::current().record("name", name.as_str());
        let mut graph = Graph::with_name(name);
        let mut stats = IngestStats::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            stats.lines += 1;
            if stats.lines % CHUNK_LINES == 0 {
                debug!(
                    target: PROGRESS_TARGET,
                    lines = stats.lines,
                    edges = stats.edges,
                    "edge list progress"
                );
            }
            if stats.lines <= format.header_lines() {
                continue;
            }
            let Ok(line) = std::str::from_utf8(&buffer) else {
                trace!(line = stats.lines, "skipping edge row that is not valid UTF-8");
                stats.skipped += 1;
                continue;
            };
            let row = line.trim_end_matches(['\r', '\n']);
            if row.trim().is_empty() || format.is_comment(row) {
                continue;
            }
            match format.parse_row(row) {
                Some((u, v)) => {
                    graph.add_edge(u, v);
                    stats.edges += 1;
                }
                None => {
                    trace!(line = stats.lines, row, "skipping malformed edge row");
                    stats.skipped += 1;
                }
            }
        }

        info!(
            lines = stats.lines,
            edges = stats.edges,
            skipped = stats.skipped,
            "edge list loaded"
        );
        Ok(Self {
            graph,
            stats,
            format,
        })
    }

    /// Opens `path` and reads it with [`EdgeListProvider::try_from_reader`].
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened or read.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        format: EdgeListFormat,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file), format)
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the provider and returns the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Returns the ingestion counters.
    #[must_use]
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Returns the format the source was read with.
    #[must_use]
    pub fn format(&self) -> EdgeListFormat {
        self.format
    }
}
