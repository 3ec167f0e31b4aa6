//! Command implementations for all graphwalk commands

use std::time::Instant;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::{info, path, reach};
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let start = Instant::now();
        let result = match self {
            Commands::Info(args) => info::execute(ctx, args),
            Commands::Reach(args) => reach::execute(ctx, args),
            Commands::Path(args) => path::execute(ctx, args),
        };
        trace_command!(ctx.cli, start, "execute_command");
        result
    }
}
