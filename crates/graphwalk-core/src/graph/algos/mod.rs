//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `reach`: Flood fill reachability
//! - `shortest`: Unit-weight shortest path search
//! - `path`: Predecessor walk-back
//! - `shared`: Argument checks used by every traversal

pub mod path;
pub mod reach;
pub mod shared;
pub mod shortest;

pub use reach::{flood_fill, flood_fill_masked, reach, reach_into};
pub use shortest::{
    find_path, find_path_into, shortest_path, shortest_path_masked, shortest_path_to_any,
};
