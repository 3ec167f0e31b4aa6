//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphwalk.toml";

/// graphwalk configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphwalkConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Search limits
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for GraphwalkConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Configuration for traversal limits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop a traversal after this many node expansions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

/// Configuration for command output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print paths from source to destination instead of destination first
    #[serde(default)]
    pub forward: bool,

    /// Default output format when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
