//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::Tile;

/// Tictac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Play {
        /// Player 1 name; skips the home screen when either name is given
        #[arg(long = "p1")]
        player1: Option<String>,

        /// Player 2 name
        #[arg(long = "p2")]
        player2: Option<String>,
    },

    /// Replay tiles (1-9) in order and print the board and result
    Replay {
        /// Tiles in the order they are played
        #[arg(required = true)]
        tiles: Vec<Tile>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print the credits list
    Credits,
}
