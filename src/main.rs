//! Graphwalk - reachability and shortest paths over graphs and meshes
//!
//! Loads a graph document (plain adjacency, edge list, surface or volume
//! mesh) and answers flood-fill and unit-weight shortest-path queries on
//! its primal or dual adjacency.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphError};
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists, so honor a JSON request
            // seen on the raw argv
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let mut format = cli.format.unwrap_or_default();
    let result = match commands::dispatch::resolve_config(&cli, start) {
        Ok(config) => {
            format = commands::dispatch::effective_format(&cli, &config);
            commands::dispatch::run(&cli, config, start)
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::from(GraphwalkExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json || argv_format_json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
