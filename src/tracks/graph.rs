// src/tracks/graph.rs

//! Diagnostics over the `blocked_by` graph.
//!
//! The assignment itself tolerates broken graphs (that is part of its
//! contract), so nothing here produces an error. The CLI runs these checks
//! before assigning and reports findings as warnings:
//!
//! - a dependency cycle means the involved beads can never become ready;
//! - a dangling reference usually means the export and the tracker have
//!   drifted apart.

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::beads::model::Bead;

/// Find one bead involved in a `blocked_by` cycle, if any exists.
///
/// Edge direction is dep -> bead: for a bead `B` with `blocked_by = ["A"]`
/// we add the edge `A -> B`, and a topological sort fails iff the graph has
/// a cycle. A bead that lists itself is a cycle of length one and is
/// reported before the sort (self-edges stay out of the graph).
pub fn find_cycle(beads: &[Bead]) -> Option<String> {
    for bead in beads {
        if bead.blocked_by.iter().any(|dep| *dep == bead.id) {
            return Some(bead.id.clone());
        }
    }

    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for bead in beads {
        graph.add_node(bead.id.as_str());
    }

    for bead in beads {
        for dep in &bead.blocked_by {
            if *dep != bead.id {
                graph.add_edge(dep.as_str(), bead.id.as_str(), ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => None,
        Err(cycle) => Some(cycle.node_id().to_string()),
    }
}

/// Collect `(bead, dep)` pairs where `dep` names no bead in the input.
///
/// Epics count as present: a reference to an epic is organisationally
/// meaningful and is not reported here.
pub fn dangling_references(beads: &[Bead]) -> Vec<(String, String)> {
    let known: HashSet<&str> = beads.iter().map(|b| b.id.as_str()).collect();

    let mut missing = Vec::new();
    for bead in beads {
        for dep in &bead.blocked_by {
            if !known.contains(dep.as_str()) {
                missing.push((bead.id.clone(), dep.clone()));
            }
        }
    }

    missing
}
