//! Tic-tac-toe console.
//!
//! Play against a friend or against the computer with any of the search
//! algorithms, or let two algorithms play each other.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use console::{Console, Opponent};
use tictactoe_search::{Algorithm, EngineConfig, run_series};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            friend,
            config,
            algorithm,
            depth,
            human,
            seed,
        } => {
            let mut engine = match config {
                Some(path) => EngineConfig::from_file(path)?,
                None => EngineConfig::default(),
            };
            if let Some(algorithm) = algorithm {
                engine = engine.with_algorithm(algorithm);
            }
            if depth.is_some() {
                engine = engine.with_depth(depth);
            }
            if let Some(human) = human {
                engine = engine.with_human(human);
            }
            if seed.is_some() {
                engine = engine.with_seed(seed);
            }
            run_console(friend, &engine)
        }
        Command::Selfplay { x, o, games, depth } => run_selfplay(x, o, games, depth),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(engine))]
fn run_console(friend: bool, engine: &EngineConfig) -> Result<()> {
    let opponent = if friend {
        Opponent::Friend
    } else {
        info!(algorithm = %engine.algorithm(), depth = ?engine.depth(), "Playing the computer");
        Opponent::Computer {
            side: engine.human().opponent(),
            strategy: engine.strategy(),
        }
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(opponent, stdin.lock(), std::io::stdout());
    console.run()?;
    info!(status = ?console.board().status(), "Session ended");
    Ok(())
}

/// Play a series of computer-versus-computer games and print the tally
#[instrument]
fn run_selfplay(x: Algorithm, o: Algorithm, games: usize, depth: Option<u32>) -> Result<()> {
    let mut x_strategy = x.strategy(depth);
    let mut o_strategy = o.strategy(depth);
    let tally = run_series(games, x_strategy.as_mut(), o_strategy.as_mut())?;

    println!("X ({x}) wins: {}", tally.x_wins);
    println!("O ({o}) wins: {}", tally.o_wins);
    println!("Draws: {}", tally.draws);
    Ok(())
}
