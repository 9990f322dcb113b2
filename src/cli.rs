//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_search::{Algorithm, Player};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with minimax and alpha-beta opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Two humans share the keyboard instead of playing the computer
        #[arg(long)]
        friend: bool,

        /// Path to an engine config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Algorithm for the computer's moves (overrides the config file)
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Search depth in plies (overrides the config file)
        #[arg(short, long)]
        depth: Option<u32>,

        /// Side the human plays: x or o (overrides the config file)
        #[arg(long)]
        human: Option<Player>,

        /// Seed for the random algorithm (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two algorithms against each other
    Selfplay {
        /// Algorithm playing X
        #[arg(short = 'x', long, value_enum, default_value = "alpha-beta-advanced")]
        x: Algorithm,

        /// Algorithm playing O
        #[arg(short = 'o', long, value_enum, default_value = "random")]
        o: Algorithm,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Search depth in plies for both sides
        #[arg(short, long)]
        depth: Option<u32>,
    },
}
