//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed
//! arguments and returns an `anyhow::Result<()>`. Commands drive the same
//! `SearchSession` the library exposes, so the CLI exercises the exact
//! validation and error mapping a GUI front end would see.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::lyrics::{LyricsClient, TranslationClient};
use crate::session::selection::{LineSelection, REQUIRED_LINES};
use crate::session::SearchSession;

/// Lyriclens CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up lyrics for a song and print the lines numbered
    Search {
        /// Artist name
        artist: Option<String>,
        /// Song title
        title: Option<String>,
        /// Free-text query instead ("Burna Boy - Last Last" or "Burna Last")
        #[arg(short, long, conflicts_with_all = ["artist", "title"])]
        query: Option<String>,
    },
    /// Translate five selected lines of a song's lyrics
    Translate {
        /// Artist name
        artist: String,
        /// Song title
        title: String,
        /// Zero-based line indices to translate, e.g. --lines 0,2,4,6,8
        #[arg(short, long, value_delimiter = ',', required = true)]
        lines: Vec<usize>,
        /// OpenAI API key (or set OPENAI_API_KEY env var / config file)
        #[arg(long, env = "OPENAI_API_KEY")]
        api_key: Option<String>,
    },
    /// Print the config file location
    ConfigPath,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = config::load();

    match &cli.command {
        Commands::Search {
            artist,
            title,
            query,
        } => cmd_search(&rt, &config, artist.as_deref(), title.as_deref(), query.as_deref()),
        Commands::Translate {
            artist,
            title,
            lines,
            api_key,
        } => cmd_translate(&rt, &config, artist, title, lines, api_key.as_deref()),
        Commands::ConfigPath => cmd_config_path(),
    }
}

/// Build a session over the configured endpoints.
///
/// The translation client only needs a real key when a translation is
/// actually requested; search-only flows pass whatever the config holds.
fn build_session(
    config: &Config,
    api_key: String,
) -> SearchSession<LyricsClient, TranslationClient> {
    SearchSession::new(
        LyricsClient::new(&config.endpoints.lyrics_base_url),
        TranslationClient::new(
            &config.endpoints.completion_url,
            api_key,
            &config.endpoints.model,
        ),
    )
}

/// Look up and print lyrics
fn cmd_search(
    rt: &Runtime,
    config: &Config,
    artist: Option<&str>,
    title: Option<&str>,
    query: Option<&str>,
) -> anyhow::Result<()> {
    let key = config.credentials.openai_api_key.clone().unwrap_or_default();
    let mut session = build_session(config, key);

    rt.block_on(async {
        match (artist, title, query) {
            (_, _, Some(raw)) => session.search_free_text(raw).await,
            (Some(artist), Some(title), _) => session.search(artist, title).await,
            _ => anyhow::bail!("Provide either ARTIST TITLE or --query \"<text>\""),
        }

        if let Some(message) = &session.state().error_message {
            anyhow::bail!("{message}");
        }

        for (index, line) in session.state().lyrics.lines().enumerate() {
            println!("{index:>3}  {line}");
        }
        Ok(())
    })
}

/// Look up lyrics, select lines, and print the translation
fn cmd_translate(
    rt: &Runtime,
    config: &Config,
    artist: &str,
    title: &str,
    lines: &[usize],
    api_key: Option<&str>,
) -> anyhow::Result<()> {
    let key = api_key
        .map(str::to_string)
        .or_else(|| config.credentials.openai_api_key.clone())
        .context(
            "No OpenAI API key configured. Pass --api-key, set OPENAI_API_KEY, \
             or add it to the config file.",
        )?;

    if lines.len() != REQUIRED_LINES {
        anyhow::bail!(
            "Exactly {REQUIRED_LINES} line indices are required, got {}",
            lines.len()
        );
    }

    let mut session = build_session(config, key);

    rt.block_on(async {
        session.search(artist, title).await;
        if let Some(message) = &session.state().error_message {
            anyhow::bail!("{message}");
        }

        let selection = LineSelection::from_indices(lines.iter().copied());
        session.request_translation(&selection).await;
        if let Some(message) = &session.state().error_message {
            anyhow::bail!("{message}");
        }

        println!("{}", session.state().translation);
        Ok(())
    })
}

/// Print where the config file lives
fn cmd_config_path() -> anyhow::Result<()> {
    match config::config_path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => anyhow::bail!("Could not determine config directory"),
    }
}
