use std::collections::HashSet;

use proptest::prelude::*;
use trackdag::beads::{Bead, EPIC_TYPE};
use trackdag::tracks::assign;

// Strategy to generate an arbitrary bead list.
// Each bead gets a random ready flag, a small chance of being an epic, and
// up to three blockers. A blocker slot of `n` (one past the last index)
// becomes a reference to a bead that does not exist, so dangling ids are
// exercised too. Self references and forward references are allowed.
fn bead_list_strategy(max_beads: usize) -> impl Strategy<Value = Vec<Bead>> {
    (1..=max_beads).prop_flat_map(|n| {
        proptest::collection::vec(
            (
                any::<bool>(),
                proptest::bool::weighted(0.2),
                proptest::collection::vec(0..=n, 0..4),
            ),
            n,
        )
        .prop_map(move |raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (ready, epic, blocker_slots))| Bead {
                    id: format!("b{i}"),
                    kind: epic.then(|| EPIC_TYPE.to_string()),
                    ready,
                    blocked_by: blocker_slots
                        .into_iter()
                        .map(|slot| {
                            if slot == n {
                                "ghost".to_string()
                            } else {
                                format!("b{slot}")
                            }
                        })
                        .collect(),
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn assignment_invariants_hold(
        beads in bead_list_strategy(12),
        max_tracks in 1..=5usize,
    ) {
        let tracks = assign(&beads, max_tracks);

        let non_epic: HashSet<&str> = beads
            .iter()
            .filter(|b| !b.is_epic())
            .map(|b| b.id.as_str())
            .collect();
        let epics: HashSet<&str> = beads
            .iter()
            .filter(|b| b.is_epic())
            .map(|b| b.id.as_str())
            .collect();

        // Track count respects the budget and is only zero when there is
        // nothing to schedule.
        if non_epic.is_empty() {
            prop_assert!(tracks.is_empty());
        } else {
            prop_assert!(!tracks.is_empty());
            prop_assert!(tracks.len() <= max_tracks);
        }

        // Tracks are numbered 1..=K in order.
        for (idx, track) in tracks.iter().enumerate() {
            prop_assert_eq!(track.number, idx + 1);
        }

        // Every non-epic bead is assigned exactly once, and no epic ever is.
        let mut assigned: Vec<&str> = tracks
            .iter()
            .flat_map(|t| t.beads.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(assigned.len(), non_epic.len());
        assigned.sort_unstable();
        let mut expected: Vec<&str> = non_epic.iter().copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(assigned, expected);
        for track in &tracks {
            for id in &track.beads {
                prop_assert!(!epics.contains(id.as_str()));
            }
        }

        // depends_on never points inside its own track, never repeats an id,
        // and every entry is justified by some member's blocker list.
        for track in &tracks {
            let members: HashSet<&str> =
                track.beads.iter().map(String::as_str).collect();
            let mut seen: HashSet<&str> = HashSet::new();
            for dep in &track.depends_on {
                prop_assert!(!members.contains(dep.as_str()));
                prop_assert!(seen.insert(dep.as_str()));
                let justified = track.beads.iter().any(|id| {
                    beads
                        .iter()
                        .filter(|b| b.id == *id)
                        .any(|b| b.blocked_by.contains(dep))
                });
                prop_assert!(justified);
            }
        }
    }

    #[test]
    fn assignment_is_deterministic(
        beads in bead_list_strategy(12),
        max_tracks in 1..=5usize,
    ) {
        let first = assign(&beads, max_tracks);
        let second = assign(&beads, max_tracks);
        prop_assert_eq!(first, second);
    }
}
