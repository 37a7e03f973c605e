// src/beads/mod.rs

//! Bead input handling for trackdag.
//!
//! - [`model`] defines the [`Bead`](model::Bead) record deserialized from a
//!   beads JSON export.
//! - [`loader`] reads and parses the file.

pub mod loader;
pub mod model;

pub use loader::load_from_path;
pub use model::{Bead, EPIC_TYPE};
