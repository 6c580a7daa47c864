//! Integration tests covering edge-list ingestion.
use std::io::{Cursor, Write};

use netmodels_core::Adjacency;
use netmodels_providers_edgelist::{
    EdgeListError, EdgeListFormat, EdgeListProvider, IngestStats,
};
use rstest::rstest;

fn read(raw: &str, format: EdgeListFormat) -> EdgeListProvider {
    EdgeListProvider::try_from_reader("demo", Cursor::new(raw.to_owned()), format)
        .expect("in-memory reads must succeed")
}

#[rstest]
fn csv_skips_exactly_one_header_line() {
    let provider = read("0,1\n1,2\n2,3\n", EdgeListFormat::Csv);
    assert_eq!(
        provider.stats(),
        IngestStats {
            lines: 3,
            edges: 2,
            skipped: 0,
        }
    );
    assert!(!provider.graph().contains_node(0));
    assert_eq!(provider.graph().neighbours(2), Some(&[1, 3][..]));
}

#[rstest]
fn csv_skips_malformed_rows_silently() {
    let raw = "numeric_id_1,numeric_id_2\n0,1\nnot,a number\n1\n-3,4\n1,2\n";
    let provider = read(raw, EdgeListFormat::Csv);
    assert_eq!(provider.stats().edges, 2);
    assert_eq!(provider.stats().skipped, 3);
    assert_eq!(provider.graph().node_count(), 3);
}

#[rstest]
fn snap_ignores_comments_and_reads_tabs() {
    let raw = "# Directed graph: amazon0302.txt\n# FromNodeId\tToNodeId\n0\t1\n0\t2\n1 2\n";
    let provider = read(raw, EdgeListFormat::Snap);
    assert_eq!(
        provider.stats(),
        IngestStats {
            lines: 5,
            edges: 3,
            skipped: 0,
        }
    );
    assert_eq!(provider.graph().adjacency_entry_count(), 6);
    assert_eq!(provider.format(), EdgeListFormat::Snap);
}

#[rstest]
#[case(EdgeListFormat::Csv, "a,b\r\n5,6\r\n\r\n6,7\r\n")]
#[case(EdgeListFormat::Snap, "5 6\n\n6 7\n")]
fn blank_lines_and_carriage_returns_are_tolerated(
    #[case] format: EdgeListFormat,
    #[case] raw: &str,
) {
    let provider = read(raw, format);
    assert_eq!(provider.stats().edges, 2);
    assert_eq!(provider.stats().skipped, 0);
    assert_eq!(provider.graph().degree(6), Some(2));
}

fn read_bytes(raw: Vec<u8>, format: EdgeListFormat) -> EdgeListProvider {
    EdgeListProvider::try_from_reader("demo", Cursor::new(raw), format)
        .expect("undecodable rows must not abort ingestion")
}

#[rstest]
fn rows_that_are_not_utf8_are_skipped() {
    let mut raw = b"h\n0,1\n".to_vec();
    raw.extend_from_slice(&[0xff, 0xfe, b',', b'2', b'\n']);
    raw.extend_from_slice(b"1,2\n");
    let provider = read_bytes(raw, EdgeListFormat::Csv);
    assert_eq!(
        provider.stats(),
        IngestStats {
            lines: 4,
            edges: 2,
            skipped: 1,
        }
    );
    assert_eq!(provider.graph().neighbours(1), Some(&[0, 2][..]));
}

#[rstest]
fn undecodable_header_is_still_ignored() {
    let mut raw = vec![0xc3, 0x28, b'\n'];
    raw.extend_from_slice(b"4,5\n");
    let provider = read_bytes(raw, EdgeListFormat::Csv);
    assert_eq!(provider.stats().edges, 1);
    assert_eq!(provider.stats().skipped, 0);
}

#[rstest]
fn duplicate_rows_are_kept_as_multi_edges() {
    let provider = read("h\n1,2\n2,1\n", EdgeListFormat::Csv);
    assert_eq!(provider.graph().degree(1), Some(2));
}

#[rstest]
fn empty_input_yields_empty_graph() {
    let provider = read("", EdgeListFormat::Csv);
    assert!(provider.graph().is_empty());
    assert_eq!(provider.stats(), IngestStats::default());
}

#[rstest]
fn graph_carries_the_provider_name() {
    let provider = read("h\n1,2\n", EdgeListFormat::Csv);
    assert_eq!(provider.into_graph().name(), "demo");
}

#[rstest]
fn try_from_path_reads_files() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file must be created");
    writeln!(file, "numeric_id_1,numeric_id_2").expect("header must be written");
    writeln!(file, "10,11").expect("row must be written");
    writeln!(file, "11,12").expect("row must be written");
    file.flush().expect("file must flush");

    let provider = EdgeListProvider::try_from_path("file", file.path(), EdgeListFormat::Csv)
        .expect("file must load");
    assert_eq!(provider.graph().node_count(), 3);
}

#[rstest]
fn try_from_path_reports_missing_files() {
    let dir = tempfile::tempdir().expect("temp dir must be created");
    let err = EdgeListProvider::try_from_path(
        "missing",
        dir.path().join("absent.csv"),
        EdgeListFormat::Csv,
    )
    .expect_err("missing files must fail");
    assert!(matches!(err, EdgeListError::Io(_)));
}

#[rstest]
fn try_from_reader_propagates_io_error() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl std::io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    let err = EdgeListProvider::try_from_reader("demo", FailingReader, EdgeListFormat::Snap)
        .expect_err("I/O failure must propagate");
    assert!(matches!(err, EdgeListError::Io(_)));
}
