//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use strictly_noughts::{Board, Difficulty, Player};

/// Strictly Arena - pit tic-tac-toe strategies against each other
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Headless tic-tac-toe strategy arena", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game between two strategies
    Play {
        /// Path to an arena config file; flags below override it
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Difficulty for X (easy, medium, hard)
        #[arg(long)]
        x: Option<Difficulty>,

        /// Difficulty for O (easy, medium, hard)
        #[arg(long)]
        o: Option<Difficulty>,

        /// Player who moves first
        #[arg(long)]
        first: Option<Player>,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every legal move of a position with exact search
    Solve {
        /// Nine squares in row-major order, e.g. "XX  O    "
        board: Board,

        /// Player to move
        #[arg(short, long)]
        mark: Player,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
