//! CLI commands

pub mod add;
pub mod dashboard;
pub mod menu;
pub mod refresh;
pub mod utils;
