//! Pieces and the cells that hold them.

use std::fmt;

use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Parse a protocol token, case-insensitive: `light`/`l` (alias
    /// `white`/`w`) or `dark`/`d` (alias `black`/`b`).
    pub fn parse(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "light" | "l" | "white" | "w" => Some(Color::Light),
            "dark" | "d" | "black" | "b" => Some(Color::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

impl Rank {
    pub fn parse(s: &str) -> Option<Rank> {
        match s.to_ascii_lowercase().as_str() {
            "man" | "m" => Some(Rank::Man),
            "king" | "k" => Some(Rank::King),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Man => write!(f, "man"),
            Rank::King => write!(f, "king"),
        }
    }
}

/// A piece on the board. Color is fixed for its lifetime; rank may be promoted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    pub rank: Rank,
}

impl Piece {
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_man(&self) -> bool {
        self.rank == Rank::Man
    }

    /// Crown the piece in place.
    pub fn promote(&mut self) {
        self.rank = Rank::King;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}

/// A single board square holding at most one piece.
///
/// Coordinates are 1-based and fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    occupant: Option<Piece>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            occupant: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn has_occupant(&self) -> bool {
        self.occupant.is_some()
    }

    /// The piece on this cell.
    ///
    /// # Errors
    /// `BoardError::EmptyCell` if the cell is empty.
    pub fn occupant(&self) -> Result<&Piece, BoardError> {
        self.occupant.as_ref().ok_or(self.empty_error())
    }

    pub fn occupant_mut(&mut self) -> Result<&mut Piece, BoardError> {
        let err = self.empty_error();
        self.occupant.as_mut().ok_or(err)
    }

    /// Overwrite whatever was on the cell.
    pub fn set_occupant(&mut self, piece: Piece) {
        self.occupant = Some(piece);
    }

    pub fn clear(&mut self) {
        self.occupant = None;
    }

    fn empty_error(&self) -> BoardError {
        BoardError::EmptyCell {
            row: self.row,
            col: self.col,
        }
    }
}
