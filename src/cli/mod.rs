//! CLI interface for levrank
//!
//! Provides argument parsing, persistent configuration and the ranking
//! command itself.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::Cli;
pub use paths::{config_dir, config_file_path, PersistentConfig};
