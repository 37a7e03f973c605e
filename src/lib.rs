// src/lib.rs

pub mod beads;
pub mod cli;
pub mod errors;
pub mod logging;
pub mod render;
pub mod tracks;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::beads::Bead;
use crate::cli::CliArgs;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - beads file loading
/// - graph diagnostics (warnings only, never fatal)
/// - the track assignment itself
/// - table / JSON rendering on stdout
pub fn run(args: CliArgs) -> Result<()> {
    if args.max_workers == 0 {
        return Err(anyhow!("--max-workers must be >= 1 (got 0)"));
    }

    let beads = beads::load_from_path(&args.beads_file)?;

    let epics = beads.iter().filter(|b| b.is_epic()).count();
    let ready = beads.iter().filter(|b| !b.is_epic() && b.ready).count();
    info!(
        total = beads.len(),
        ready,
        blocked = beads.len() - epics - ready,
        epics,
        "loaded beads file"
    );

    report_graph_findings(&beads);

    let assignment = tracks::assign(&beads, args.max_workers);
    info!(tracks = assignment.len(), "track assignment complete");

    if args.json {
        println!("{}", render::render_json(&assignment)?);
    } else {
        println!("{}", render::render_table(&assignment));
        println!();
        println!("Summary: {}", render::summary_line(&assignment));
    }

    Ok(())
}

/// Log non-fatal problems in the `blocked_by` graph.
///
/// The assignment tolerates both findings; they usually mean the beads
/// export has drifted from the tracker, so they are worth surfacing.
fn report_graph_findings(beads: &[Bead]) {
    for (bead, dep) in tracks::dangling_references(beads) {
        warn!(bead = %bead, dep = %dep, "blocked_by references an unknown bead id");
    }

    if let Some(bead) = tracks::find_cycle(beads) {
        warn!(
            bead = %bead,
            "dependency cycle in blocked_by graph; cyclic beads can never become ready"
        );
    }
}
