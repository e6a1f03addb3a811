//! CLI module for recap
//!
//! Argument parsing and the command implementations behind each subcommand.

pub mod args;
pub mod commands;
pub mod completions;

pub use args::{Cli, Commands, ConfigCommand};
