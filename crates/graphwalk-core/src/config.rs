//! Configuration for graphwalk
//!
//! Configuration is read from `graphwalk.toml` in the working directory, or
//! from an explicit path given on the command line.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use crate::graph::types::SearchOptions;

pub use types::{
    GraphwalkConfig, OutputConfig, SearchConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION,
};

impl GraphwalkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphwalkConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            crate::bail_invalid!(
                "config version",
                format!(
                    "{} (this build supports up to {})",
                    config.version, CONFIG_FORMAT_VERSION
                )
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find the default configuration file in `dir`
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Load `explicit` if given, else the discovered file in `dir`, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Search options with an optional command-line override of the limit
    pub fn search_options(&self, max_expansions: Option<usize>) -> SearchOptions {
        SearchOptions {
            max_expansions: max_expansions.or(self.search.max_expansions),
        }
    }
}
