//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary edge lists and assert error handling
//! behaviour. These helpers keep the test cases concise and consistent.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::commands::run_compare;
use super::{Cli, CliError, Combination, Command, CompareCommand, InputFormat, Scope, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// CSV rows for a ring of `nodes` nodes joined to `per_side` neighbours on
/// each side, preceded by a header line.
pub(super) fn ring_csv(nodes: u64, per_side: u64) -> String {
    let mut rows = String::from("numeric_id_1,numeric_id_2\n");
    for node in 0..nodes {
        for offset in 1..=per_side {
            let _ = writeln!(rows, "{node},{}", (node + offset) % nodes);
        }
    }
    rows
}

pub(super) fn compare_command(path: &Path) -> CompareCommand {
    CompareCommand {
        path: path.to_path_buf(),
        format: InputFormat::Csv,
        workers: 2,
        beta: 0.1,
        seed: Some(11),
        combination: Combination::PartitionMean,
        scope: Scope::Component,
        name: None,
    }
}

pub(super) fn compare_cli(command: CompareCommand) -> Cli {
    Cli {
        command: Command::Compare(command),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_compare_expecting_error(command: CompareCommand, panic_msg: &str) -> CliError {
    match run_compare(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
