//! Draughts-Core: board state and move validation for international draughts.
//!
//! This crate models a 10x10 draughts board: cells holding pieces of a color
//! and rank, a turn history, single-step move validation and promotion on
//! the back ranks. Captures are not modelled.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and starting layout
//! - [`cell`] - Colors, ranks, pieces and cells
//! - [`board`] - The grid, turn history and `play_turn`
//! - [`error`] - Access and move-validation errors
//! - [`dtp`] - Draughts Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use draughts_core::board::Board;
//! use draughts_core::cell::Color;
//!
//! let mut board = Board::new();
//! board.initialize();
//!
//! board.play_turn(4, 1, 5, 2).unwrap();
//! assert_eq!(board.current_turn(), Color::Dark);
//! assert!(board.play_turn(7, 2, 8, 1).is_err());
//! ```

pub mod board;
pub mod cell;
pub mod constants;
pub mod dtp;
pub mod error;
