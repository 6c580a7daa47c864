//! Row formats understood by the edge-list provider.

use netmodels_core::NodeId;

/// Layout of an edge-list source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeListFormat {
    /// Comma-separated `u,v` rows preceded by a single header line.
    #[default]
    Csv,
    /// Whitespace-separated `u v` rows without a header; lines starting with
    /// `#` are comments.
    Snap,
}

impl EdgeListFormat {
    /// Returns how many leading lines are skipped unconditionally.
    #[must_use]
    pub const fn header_lines(self) -> usize {
        match self {
            Self::Csv => 1,
            Self::Snap => 0,
        }
    }

    /// Returns whether `line` is a comment to be ignored.
    #[must_use]
    pub fn is_comment(self, line: &str) -> bool {
        matches!(self, Self::Snap) && line.trim_start().starts_with('#')
    }

    /// Parses one data row into an edge.
    ///
    /// Returns `None` unless the row holds exactly two non-negative integers.
    ///
    /// # Examples
    /// ```
    /// use netmodels_providers_edgelist::EdgeListFormat;
    ///
    /// assert_eq!(EdgeListFormat::Csv.parse_row("4, 17"), Some((4, 17)));
    /// assert_eq!(EdgeListFormat::Snap.parse_row("4\t17"), Some((4, 17)));
    /// assert_eq!(EdgeListFormat::Csv.parse_row("4,17,2"), None);
    /// assert_eq!(EdgeListFormat::Csv.parse_row("-4,17"), None);
    /// ```
    #[must_use]
    pub fn parse_row(self, line: &str) -> Option<(NodeId, NodeId)> {
        match self {
            Self::Csv => parse_pair(line.split(',')),
            Self::Snap => parse_pair(line.split_whitespace()),
        }
    }
}

fn parse_pair<'a>(mut fields: impl Iterator<Item = &'a str>) -> Option<(NodeId, NodeId)> {
    let u = fields.next()?.trim().parse().ok()?;
    let v = fields.next()?.trim().parse().ok()?;
    fields.next().is_none().then_some((u, v))
}
