//! Support library for the netmodels CLI binary.
//!
//! Re-exports the CLI and logging modules so doctests and integration tests
//! can exercise the comparison pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
