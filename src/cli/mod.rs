//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, PathArgs, ReachArgs};
pub use output::OutputFormat;
use output::parse_format;

/// Graphwalk - reachability and shortest paths over graphs and meshes
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config value, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log traversal details at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `info`, `graphwalk_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./graphwalk.toml when present)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a graph document
    Info(GraphArgs),

    /// List every node reachable from a source
    Reach(ReachArgs),

    /// Find a shortest path from a source to the nearest destination
    Path(PathArgs),
}
