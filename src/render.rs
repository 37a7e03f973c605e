// src/render.rs

//! Renderers for the assignment result. All of these return `String`s;
//! printing (and the choice of stream) stays with the caller.

use serde::Serialize;

use crate::errors::Result;
use crate::tracks::Track;

/// Render the assignment as a fixed-width table.
///
/// ```text
/// Track    Beads                                    Depends On
/// ------------------------------------------------------------------------------
/// 1        bd-101, bd-104                           bd-099
/// ```
pub fn render_table(tracks: &[Track]) -> String {
    let mut out = format!("{:<8} {:<40} {:<30}\n", "Track", "Beads", "Depends On");
    out.push_str(&"-".repeat(78));

    for track in tracks {
        let beads = track.beads.join(", ");
        let deps = if track.depends_on.is_empty() {
            "-".to_string()
        } else {
            track.depends_on.join(", ")
        };
        out.push_str(&format!("\n{:<8} {:<40} {:<30}", track.number, beads, deps));
    }

    out
}

/// The one-line totals string: `"<K> tracks, <N> beads"`.
pub fn summary_line(tracks: &[Track]) -> String {
    let total_beads: usize = tracks.iter().map(|t| t.beads.len()).sum();
    format!("{} tracks, {} beads", tracks.len(), total_beads)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tracks: &'a [Track],
    summary: String,
}

/// Render the assignment as pretty JSON with the summary embedded:
/// `{"tracks": [...], "summary": "<K> tracks, <N> beads"}`.
pub fn render_json(tracks: &[Track]) -> Result<String> {
    let report = JsonReport {
        tracks,
        summary: summary_line(tracks),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
