//! Tictac - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictac::{AppConfig, CreditsClient, Roster, run_tui};
use tictac_engine::{GameEngine, Tile};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Replay never reads the config file.
    match cli.command {
        Command::Play { player1, player2 } => {
            let config = AppConfig::load(&cli.config)?;
            init_file_tracing(config.log_file())?;
            run_play(config, player1, player2)
        }
        Command::Replay { tiles, json } => {
            init_stderr_tracing();
            run_replay(tiles, json)
        }
        Command::Credits => {
            init_stderr_tracing();
            let config = AppConfig::load(&cli.config)?;
            run_credits(config).await
        }
    }
}

/// Logs to a file so the TUI owns the terminal.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the terminal UI
#[instrument(skip(config))]
fn run_play(config: AppConfig, player1: Option<String>, player2: Option<String>) -> Result<()> {
    let roster = if player1.is_some() || player2.is_some() {
        Some(Roster::new(
            player1.as_deref().unwrap_or_default(),
            player2.as_deref().unwrap_or_default(),
        ))
    } else {
        None
    };

    run_tui(config, roster)
}

/// Replay tiles and print the outcome
#[instrument(skip(tiles), fields(moves = tiles.len()))]
fn run_replay(tiles: Vec<Tile>, json: bool) -> Result<()> {
    let engine = GameEngine::replay(tiles);
    let result = engine.evaluate();
    info!(?result, "Replay evaluated");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}\n", engine);
        match result {
            Some(result) => println!("{}", result),
            None => println!("No winner"),
        }
    }
    Ok(())
}

/// Fetch and print the credits list
#[instrument(skip(config), fields(url = %config.credits_url()))]
async fn run_credits(config: AppConfig) -> Result<()> {
    let client = CreditsClient::new(config.credits_url().clone());
    let credits = client.fetch().await?;
    for name in credits {
        println!("{}", name);
    }
    Ok(())
}
