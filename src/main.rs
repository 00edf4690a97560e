//! Lyriclens - Afrobeats lyric lookup and translation.
//!
//! Looks up song lyrics by artist and title, lets the user select exactly
//! five lines, and asks a chat completion endpoint for a concise English
//! translation with brief cultural context. Search history is kept in
//! memory, bounded, most-recent-first.

pub mod cli;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod session;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("lyriclens=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
