//! Draughts Text Protocol (DTP).
//!
//! A line-oriented protocol in the style of GTP for driving a [`Board`]
//! from a GUI or script. Each request is `[id] command args...`; each
//! response is `=[id] message` on success or `?[id] message` on failure,
//! followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the session
//! - `clear_board` - Replace the board with an empty one
//! - `initialize` - Place the starting men
//! - `play <sr> <sc> <dr> <dc>` - Validate and apply a move
//! - `turn` - Color to move
//! - `count <color>` - Number of pieces of a color
//! - `piece <r> <c>` - Piece on a cell, e.g. `light man`
//! - `set <r> <c> <color> <rank>` - Put a piece on a cell
//! - `remove <r> <c>` - Empty a cell
//! - `history` - Recorded moves, one per line
//!
//! ## Example
//!
//! ```ignore
//! use draughts_core::dtp::DtpEngine;
//! let mut engine = DtpEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::cell::{Color, Piece, Rank};

/// The list of known DTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "count",
    "history",
    "initialize",
    "known_command",
    "list_commands",
    "name",
    "piece",
    "play",
    "protocol_version",
    "quit",
    "remove",
    "set",
    "turn",
    "version",
];

/// DTP session state.
pub struct DtpEngine {
    board: Board,
    /// Echo requests and outcomes to stderr
    verbose: bool,
}

impl Default for DtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DtpEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::new()
        }
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if self.verbose {
                let outcome = if success { "ok" } else { message.as_str() };
                eprintln!("dtp: {command_line} -> {outcome}");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Parse the first `K` arguments as coordinates.
    fn parse_coords<const K: usize>(args: &[&str]) -> Result<[usize; K], String> {
        if args.len() < K {
            return Err("missing arguments".to_string());
        }
        let mut out = [0; K];
        for (slot, arg) in out.iter_mut().zip(args) {
            *slot = arg
                .parse::<usize>()
                .map_err(|_| format!("invalid coordinate: {arg}"))?;
        }
        Ok(out)
    }

    /// Execute a DTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "draughts-core".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = Board::new();
                (true, String::new())
            }

            "initialize" => {
                self.board.initialize();
                (true, String::new())
            }

            "play" => {
                let [sr, sc, dr, dc] = match Self::parse_coords::<4>(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                match self.board.play_turn(sr, sc, dr, dc) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "turn" => (true, self.board.current_turn().to_string()),

            "count" => {
                let Some(color) = args.first().and_then(|s| Color::parse(s)) else {
                    return (false, "expected color: light or dark".to_string());
                };
                (true, self.board.piece_count(color).to_string())
            }

            "piece" => {
                let [row, col] = match Self::parse_coords::<2>(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                match self.board.piece(row, col) {
                    Ok(piece) => (true, piece.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "set" => {
                let [row, col] = match Self::parse_coords::<2>(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let color = args.get(2).and_then(|s| Color::parse(s));
                let rank = args.get(3).and_then(|s| Rank::parse(s));
                let (Some(color), Some(rank)) = (color, rank) else {
                    return (false, "expected: set <row> <col> <color> <rank>".to_string());
                };
                match self.board.set_piece(row, col, Piece::new(color, rank)) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "remove" => {
                let [row, col] = match Self::parse_coords::<2>(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                match self.board.remove_piece(row, col) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "history" => {
                let lines: Vec<String> =
                    self.board.history().iter().map(|m| m.to_string()).collect();
                (true, lines.join("\n"))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
