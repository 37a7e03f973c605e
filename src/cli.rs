// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `trackdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trackdag",
    version,
    about = "Generate track assignments from a beads dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the beads JSON file.
    #[arg(value_name = "BEADS_FILE")]
    pub beads_file: PathBuf,

    /// Maximum number of parallel tracks (worker lanes) to emit.
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub max_workers: usize,

    /// Output as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TRACKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
