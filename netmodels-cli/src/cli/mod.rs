//! Command-line interface orchestration for netmodels.
//!
//! The `compare` command loads an edge list, extracts its largest connected
//! component, derives parameters for a small-world and a
//! preferential-attachment model of the same size, and summarises all three
//! networks side by side.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, Combination, Command, CompareCommand, InputFormat, Scope, derive_model_degrees,
    run_cli,
};
pub use report::{ComparisonReport, render_report};

#[cfg(test)]
mod test_helpers;
