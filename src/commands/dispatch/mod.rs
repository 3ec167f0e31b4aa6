//! Command dispatch logic for graphwalk

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub use command::{effective_format, CommandContext};
use command::{Command, NoCommand};

/// Load `--config`, else `graphwalk.toml` in the working directory
pub fn resolve_config(cli: &Cli, start: Instant) -> Result<GraphwalkConfig> {
    let cwd = env::current_dir()?;
    let config = GraphwalkConfig::resolve(cli.config.as_deref(), &cwd)?;
    debug!(elapsed = ?start.elapsed(), "resolve_config");
    Ok(config)
}

pub fn run(cli: &Cli, config: GraphwalkConfig, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
