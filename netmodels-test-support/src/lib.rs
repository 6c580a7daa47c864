//! Shared test utilities used across netmodels crates.

pub mod tracing;
