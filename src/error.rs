//! Error types for board access and move validation.
//!
//! Accessors on [`Board`](crate::board::Board) and [`Cell`](crate::cell::Cell)
//! fail with [`BoardError`]. [`Board::play_turn`](crate::board::Board::play_turn)
//! only ever fails with [`IllegalMove`]: any lookup failure encountered while
//! validating a move is folded into it, so callers see one uniform failure.
//! The underlying [`IllegalReason`] is kept for diagnostics.

use std::fmt;

/// Failure of a bounds- or occupancy-checked board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside `1..=10`.
    OutOfBounds { row: usize, col: usize },
    /// Read of a cell that holds no piece.
    EmptyCell { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "out of bounds: ({row}, {col})")
            }
            BoardError::EmptyCell { row, col } => write!(f, "empty cell: ({row}, {col})"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// Destination is not a dark square.
    LightSquare,
    /// Source or destination could not be resolved on the board.
    Unresolved(BoardError),
    /// A man tried to move sideways or backwards.
    Backward,
    /// Destination already holds a piece.
    Occupied,
}

/// A rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMove {
    reason: IllegalReason,
}

impl IllegalMove {
    pub fn new(reason: IllegalReason) -> Self {
        Self { reason }
    }

    /// The rule or lookup that caused the rejection.
    pub fn reason(&self) -> IllegalReason {
        self.reason
    }
}

impl From<BoardError> for IllegalMove {
    fn from(err: BoardError) -> Self {
        IllegalMove::new(IllegalReason::Unresolved(err))
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move")
    }
}

impl std::error::Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfBounds { row: 0, col: 5 };
        assert_eq!(err.to_string(), "out of bounds: (0, 5)");

        let err = BoardError::EmptyCell { row: 5, col: 2 };
        assert_eq!(err.to_string(), "empty cell: (5, 2)");
    }

    #[test]
    fn test_illegal_move_hides_cause() {
        let from_bounds = IllegalMove::from(BoardError::OutOfBounds { row: 11, col: 1 });
        let from_rule = IllegalMove::new(IllegalReason::Backward);

        // Same message regardless of cause
        assert_eq!(from_bounds.to_string(), from_rule.to_string());

        // Cause still available for diagnostics
        assert_eq!(
            from_bounds.reason(),
            IllegalReason::Unresolved(BoardError::OutOfBounds { row: 11, col: 1 })
        );
    }
}
