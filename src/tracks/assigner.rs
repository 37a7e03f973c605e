// src/tracks/assigner.rs

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::beads::model::Bead;

/// One worker lane in the final assignment.
///
/// Serialises as `{"track": 1, "beads": [...], "depends_on": [...]}`, the
/// shape downstream tooling consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// 1-based track number, following post-merge list order.
    #[serde(rename = "track")]
    pub number: usize,

    /// Bead IDs assigned to this lane, in placement order.
    pub beads: Vec<String>,

    /// External bead IDs (not members of this track) that some member is
    /// blocked on. Deduplicated, first-seen order.
    pub depends_on: Vec<String>,
}

/// Partition the non-epic beads into at most `max_tracks` parallel tracks.
///
/// Placement is a single pass:
/// - every ready bead seeds its own track, in input order;
/// - every blocked bead chains onto the track of its *primary blocker*
///   (the first `blocked_by` entry) when that blocker has already been
///   placed, and otherwise opens a new track.
///
/// There is no look-ahead: a primary blocker that only gets placed later in
/// the same pass does not attract the bead. Callers that want chaining must
/// order blockers before their dependents in the input.
///
/// Tracks beyond the budget are merged greedily, smallest two first, which
/// approximates balanced lanes without full bin packing. The merge never
/// reduces below one track, so the result is non-empty whenever any
/// schedulable bead exists.
///
/// Precondition: `max_tracks >= 1`. Smaller values are not sanitised; they
/// simply merge everything into a single track.
pub fn assign(beads: &[Bead], max_tracks: usize) -> Vec<Track> {
    // Epics are organisational containers, never assigned to a lane.
    let tasks: Vec<&Bead> = beads.iter().filter(|b| !b.is_epic()).collect();

    let (ready, blocked): (Vec<&Bead>, Vec<&Bead>) =
        tasks.into_iter().partition(|b| b.ready);

    // One singleton track per ready bead, plus a local bead -> track index
    // map that placement updates as it goes.
    let mut lanes: Vec<Vec<String>> = ready.iter().map(|b| vec![b.id.clone()]).collect();
    let mut lane_of: HashMap<&str, usize> = ready
        .iter()
        .enumerate()
        .map(|(idx, b)| (b.id.as_str(), idx))
        .collect();

    for bead in &blocked {
        let target = bead
            .primary_blocker()
            .and_then(|primary| lane_of.get(primary).copied());

        match target {
            Some(idx) => {
                lanes[idx].push(bead.id.clone());
                lane_of.insert(bead.id.as_str(), idx);
            }
            None => {
                // No blocker listed, or the primary blocker is not placed
                // (still unprocessed, or a dangling reference). Either way
                // the bead opens its own lane.
                lanes.push(vec![bead.id.clone()]);
                lane_of.insert(bead.id.as_str(), lanes.len() - 1);
            }
        }
    }

    while lanes.len() > max_tracks && lanes.len() > 1 {
        merge_smallest_two(&mut lanes);
    }

    // External dependencies come from the *full* blocker lists of the
    // complete input, epics included, so a dependency on an epic is still
    // surfaced even though the epic itself is never scheduled.
    let blockers: HashMap<&str, &[String]> = beads
        .iter()
        .map(|b| (b.id.as_str(), b.blocked_by.as_slice()))
        .collect();

    lanes
        .into_iter()
        .enumerate()
        .map(|(idx, bead_ids)| {
            let members: HashSet<&str> = bead_ids.iter().map(String::as_str).collect();

            let mut depends_on: Vec<String> = Vec::new();
            for bead_id in &bead_ids {
                let deps = blockers.get(bead_id.as_str()).copied().unwrap_or(&[]);
                for dep in deps {
                    if !members.contains(dep.as_str()) && !depends_on.contains(dep) {
                        depends_on.push(dep.clone());
                    }
                }
            }

            Track {
                number: idx + 1,
                beads: bead_ids,
                depends_on,
            }
        })
        .collect()
}

/// Stable-sort the lanes by bead count and fold the smallest into the next
/// smallest. Equal-length lanes keep their prior relative order, so repeated
/// merges stay deterministic.
fn merge_smallest_two(lanes: &mut Vec<Vec<String>>) {
    lanes.sort_by_key(|lane| lane.len());
    let smallest = lanes.remove(0);
    lanes[0].extend(smallest);
}
