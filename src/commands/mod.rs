//! CLI commands for graphwalk

pub mod dispatch;
pub mod info;
pub mod path;
pub mod reach;
