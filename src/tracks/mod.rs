// src/tracks/mod.rs

//! Track assignment over the bead dependency graph.
//!
//! - [`assigner`] holds the partition-and-merge core and the [`Track`]
//!   output record.
//! - [`graph`] holds non-fatal diagnostics (cycles, dangling references).

pub mod assigner;
pub mod graph;

pub use assigner::{assign, Track};
pub use graph::{dangling_references, find_cycle};
