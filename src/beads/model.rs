// src/beads/model.rs

use serde::Deserialize;

/// Type tag that marks a bead as an epic (a container grouping related
/// beads). Epics are never assigned to a track.
pub const EPIC_TYPE: &str = "epic";

/// A single work item from a beads JSON export.
///
/// This is a direct mapping of the exported shape:
///
/// ```json
/// {
///   "id": "bd-114",
///   "type": "task",
///   "ready": false,
///   "blocked_by": ["bd-112", "bd-109"]
/// }
/// ```
///
/// Only `id` is required. Exports usually carry extra fields (title,
/// priority, assignee, ...); those are ignored here since the assignment
/// only looks at identity, type, readiness and blockers.
#[derive(Debug, Clone, Deserialize)]
pub struct Bead {
    /// Unique bead identifier.
    pub id: String,

    /// Category tag (`"task"`, `"epic"`, ...). `"epic"` excludes the bead
    /// from scheduling.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// True once every blocking dependency of this bead is satisfied.
    #[serde(default)]
    pub ready: bool,

    /// IDs of the beads this one is blocked on, in priority order.
    ///
    /// The first entry is the *primary blocker*: the only one consulted
    /// when choosing a track. The full list still counts when surfacing a
    /// track's external dependencies.
    #[serde(default)]
    pub blocked_by: Vec<String>,
}

impl Bead {
    /// Whether this bead is an epic and therefore not schedulable.
    pub fn is_epic(&self) -> bool {
        self.kind.as_deref() == Some(EPIC_TYPE)
    }

    /// The first entry of `blocked_by`, if any.
    pub fn primary_blocker(&self) -> Option<&str> {
        self.blocked_by.first().map(String::as_str)
    }
}
