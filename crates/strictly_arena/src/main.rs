//! Strictly Arena - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_arena::{ArenaConfig, play, solve};
use strictly_noughts::{Board, Difficulty, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            first,
            seed,
            json,
        } => run_play(config, x, o, first, seed, json),
        Command::Solve { board, mark, json } => run_solve(board, mark, json),
    }
}

/// Play one game and print the result
#[instrument(skip_all)]
fn run_play(
    config: Option<PathBuf>,
    x: Option<Difficulty>,
    o: Option<Difficulty>,
    first: Option<Player>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => ArenaConfig::from_file(path)?,
        None => ArenaConfig::default(),
    }
    .with_overrides(x, o, first, seed);

    info!(x = %config.x(), o = %config.o(), "Starting game");
    let report = play(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n\n{}", report.board().display(), report.phase());
    }
    Ok(())
}

/// Solve a position and print per-move scores
#[instrument(skip_all)]
fn run_solve(board: Board, mark: Player, json: bool) -> Result<()> {
    let report = solve(&board, mark)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board.display());
        for entry in report.scores() {
            println!("{:>2}: {:+}", entry.index(), entry.score());
        }
        println!("\n{} plays {}", mark, report.best());
    }
    Ok(())
}
