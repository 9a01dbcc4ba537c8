//! Testing infrastructure for paneshop integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: catalogs and sessions used across test suites
//! - `render`: draw into an in-memory terminal and read the cells back

pub mod fixtures;
pub mod render;
pub mod world;

pub use world::{CliResult, TestWorld};
