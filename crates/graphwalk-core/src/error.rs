//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out of range node ids)
//! - 3: Data error (malformed graph document, unreachable destination)

mod macros;

use thiserror::Error;

use crate::graph::types::NodeId;

/// Exit codes used by the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed document, no path (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {index} is out of range (bound {bound})")]
    InvalidIndex {
        context: String,
        index: usize,
        bound: usize,
    },

    #[error("{context} must be empty on entry")]
    EmptyOutputViolation { context: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no path found from node {source_node}")]
    NoPathFound { source_node: NodeId },

    #[error("traversal stopped after {limit} expansions")]
    ExpansionLimit { limit: usize },

    #[error("invalid graph document: {reason}")]
    InvalidDocument { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an index outside `0..bound`
    pub fn invalid_index(context: &str, index: usize, bound: usize) -> Self {
        GraphError::InvalidIndex {
            context: context.to_string(),
            index,
            bound,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed graph document or mesh
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        GraphError::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidIndex { .. }
            | GraphError::EmptyOutputViolation { .. }
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::NoPathFound { .. }
            | GraphError::ExpansionLimit { .. }
            | GraphError::InvalidDocument { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidIndex { .. } => "invalid_index",
            GraphError::EmptyOutputViolation { .. } => "empty_output_violation",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::NoPathFound { .. } => "no_path_found",
            GraphError::ExpansionLimit { .. } => "expansion_limit",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
