//! Draughts-Core: board state and move validation for 10x10 draughts.
//!
//! ## Usage
//!
//! - `draughts-core` - Show a demo
//! - `draughts-core dtp` - Start the DTP server for GUI integration
//! - `draughts-core demo` - Play the opening example
//! - `draughts-core fuzz` - Throw random moves at a fresh board

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use draughts_core::board::Board;
use draughts_core::cell::Color;
use draughts_core::constants::{COLS, ROWS};
use draughts_core::dtp::DtpEngine;

/// Draughts-Core: 10x10 draughts board and move validation
#[derive(Parser)]
#[command(name = "draughts-core")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the DTP (Draughts Text Protocol) server on stdin/stdout
    Dtp {
        /// Echo every request and its outcome to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Play the opening example
    Demo,
    /// Apply random coordinate quadruples to an initialized board
    Fuzz {
        /// Number of moves to attempt
        #[arg(short, long, default_value_t = 1000)]
        turns: usize,
        /// RNG seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dtp { verbose }) => {
            let mut engine = DtpEngine::with_verbose(verbose);
            engine.run().context("DTP session failed")?;
        }
        Some(Commands::Fuzz { turns, seed }) => run_fuzz(turns, seed),
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Draughts-Core: 10x10 draughts board\n");

    let mut board = Board::new();
    board.initialize();
    println!(
        "Initialized: {} light, {} dark, {} to move",
        board.piece_count(Color::Light),
        board.piece_count(Color::Dark),
        board.current_turn()
    );

    board
        .play_turn(4, 1, 5, 2)
        .context("opening move 4 1 -> 5 2 rejected")?;
    println!("Played 4 1 -> 5 2, {} to move", board.current_turn());

    match board.play_turn(7, 2, 8, 1) {
        Ok(()) => println!("Played 7 2 -> 8 1"),
        Err(e) => println!("7 2 -> 8 1: {e} ({:?})", e.reason()),
    }

    println!("History:");
    for mv in board.history() {
        println!("  {mv}");
    }
    Ok(())
}

fn run_fuzz(turns: usize, seed: u64) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new();
    board.initialize();

    let mut accepted = 0;
    let mut rejected = 0;
    for _ in 0..turns {
        // One past each edge so bounds failures get exercised too
        let sr = rng.usize(0..=ROWS + 1);
        let sc = rng.usize(0..=COLS + 1);
        let dr = rng.usize(0..=ROWS + 1);
        let dc = rng.usize(0..=COLS + 1);
        match board.play_turn(sr, sc, dr, dc) {
            Ok(()) => accepted += 1,
            Err(_) => rejected += 1,
        }
    }

    eprintln!("fuzz: seed {seed}, {turns} attempts");
    println!("Accepted: {accepted}");
    println!("Rejected: {rejected}");
    println!("To move: {}", board.current_turn());
    println!(
        "Pieces: {} light, {} dark",
        board.piece_count(Color::Light),
        board.piece_count(Color::Dark)
    );
}
