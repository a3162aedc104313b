//! Testing infrastructure for tzplot integration tests.
//!
//! - `TestWorld`: isolated configuration file plus a runner for the binary
//! - `fixtures`: ready-made configurations and raw config files
//! - `assertions`: checks on plotted output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
