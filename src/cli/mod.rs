//! Command-line interface for lyriclens.
//!
//! This module provides commands for looking up lyrics and translating
//! selected lines without any GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
