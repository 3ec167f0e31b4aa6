use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log traversal stats at debug level.
///
/// Usage:
/// ```rust,ignore
/// let result = find_path(&graph, 0, Target::Node(3), None, &opts)?;
/// log_traversal_stats!(&result.stats, "path");
/// ```
#[macro_export]
macro_rules! log_traversal_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            expanded = $stats.expanded,
            relaxed = $stats.relaxed,
            reinserted = $stats.reinserted,
            "traversal_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "graphwalk=debug,graphwalk_core=debug",
        (false, None) => "graphwalk=warn,graphwalk_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Filter directives for a bare level such as `info`
fn directives_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphwalk={level},graphwalk_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support GRAPHWALK_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHWALK_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directives_for(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_for_bare_level() {
        assert_eq!(
            directives_for("info"),
            "graphwalk=info,graphwalk_core=info"
        );
    }

    #[test]
    fn test_directives_pass_through() {
        assert_eq!(directives_for("graphwalk_core=trace"), "graphwalk_core=trace");
    }
}
