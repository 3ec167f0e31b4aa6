//! graphwalk core library
//!
//! Traversal engine for reachability and unit-weight shortest paths over
//! plain graphs and mesh connectivity.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod mesh;
