#![allow(dead_code)]

use trackdag::beads::{Bead, EPIC_TYPE};

/// Builder for `Bead` to simplify test setup.
pub struct BeadBuilder {
    bead: Bead,
}

impl BeadBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            bead: Bead {
                id: id.to_string(),
                kind: None,
                ready: false,
                blocked_by: vec![],
            },
        }
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.bead.kind = Some(kind.to_string());
        self
    }

    pub fn epic(self) -> Self {
        self.kind(EPIC_TYPE)
    }

    pub fn ready(mut self, val: bool) -> Self {
        self.bead.ready = val;
        self
    }

    pub fn blocked_by(mut self, dep: &str) -> Self {
        self.bead.blocked_by.push(dep.to_string());
        self
    }

    pub fn build(self) -> Bead {
        self.bead
    }
}

/// A ready bead with no blockers.
pub fn ready_bead(id: &str) -> Bead {
    BeadBuilder::new(id).ready(true).build()
}

/// A not-yet-ready bead blocked by the given ids, in order.
pub fn blocked_bead(id: &str, blocked_by: &[&str]) -> Bead {
    let mut builder = BeadBuilder::new(id);
    for dep in blocked_by {
        builder = builder.blocked_by(dep);
    }
    builder.build()
}
