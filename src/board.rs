//! The 10x10 draughts board: grid, turn history and move validation.
//!
//! Coordinates are 1-based. The turn to move is never stored; it is derived
//! from the parity of the history length.
//!
//! Known quirks kept as-is:
//! - `play_turn` copies the moving piece to the destination but leaves the
//!   source cell occupied.
//! - The promotion sweep only scans columns 1 to 9 of each back rank and runs
//!   after every move, whichever piece moved.
//! - `play_turn` does not check that the mover owns the current turn.

use std::fmt;

use crate::cell::{Cell, Color, Piece};
use crate::constants::{
    COLS, DARK_CROWN_ROW, DARK_START_ROWS, LIGHT_CROWN_ROW, LIGHT_START_ROWS,
    PROMOTION_COL_END, ROWS, is_dark_square,
};
use crate::error::{BoardError, IllegalMove, IllegalReason};

/// One applied turn, as recorded in the history.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub src_row: usize,
    pub src_col: usize,
    pub dst_row: usize,
    pub dst_col: usize,
}

impl Move {
    pub fn new(src_row: usize, src_col: usize, dst_row: usize, dst_col: usize) -> Self {
        Self {
            src_row,
            src_col,
            dst_row,
            dst_col,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.src_row, self.src_col, self.dst_row, self.dst_col
        )
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    grid: [[Cell; COLS]; ROWS],
    history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with no history.
    pub fn new() -> Self {
        Self {
            grid: std::array::from_fn(|r| std::array::from_fn(|c| Cell::new(r + 1, c + 1))),
            history: Vec::new(),
        }
    }

    /// Place the starting men: Light on rows 1-4, Dark on rows 7-10,
    /// dark squares only. Other cells and the history are left untouched.
    pub fn initialize(&mut self) {
        self.place_band(LIGHT_START_ROWS, Color::Light);
        self.place_band(DARK_START_ROWS, Color::Dark);
    }

    fn place_band(&mut self, (first, last): (usize, usize), color: Color) {
        for row in first..=last {
            for col in 1..=COLS {
                if is_dark_square(row, col) {
                    self.grid[row - 1][col - 1].set_occupant(Piece::man(color));
                }
            }
        }
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row == 0 || col == 0 || row > ROWS || col > COLS {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(())
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(&self.grid[row - 1][col - 1])
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(&mut self.grid[row - 1][col - 1])
    }

    /// Replace the cell at `(row, col)` wholesale.
    ///
    /// The cell is stored as given, so its own `row()`/`col()` (and any
    /// `EmptyCell` error it reports) may differ from the slot it sits in.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        *self.cell_mut(row, col)? = cell;
        Ok(())
    }

    /// Empty the cell at `(row, col)`.
    pub fn remove_piece(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.clear();
        Ok(())
    }

    pub fn has_piece(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell(row, col)?.has_occupant())
    }

    pub fn piece(&self, row: usize, col: usize) -> Result<&Piece, BoardError> {
        self.cell(row, col)?.occupant()
    }

    pub fn set_piece(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), BoardError> {
        self.cell_mut(row, col)?.set_occupant(piece);
        Ok(())
    }

    /// Light moves when the history length is even, Dark when it is odd.
    pub fn current_turn(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.grid.iter().flatten()
    }

    /// Validate and apply a single move, then crown any men on the back ranks.
    ///
    /// # Errors
    /// Every failure, including out-of-range coordinates and an empty source,
    /// is reported as [`IllegalMove`].
    pub fn play_turn(
        &mut self,
        src_row: usize,
        src_col: usize,
        dst_row: usize,
        dst_col: usize,
    ) -> Result<(), IllegalMove> {
        if !is_dark_square(dst_row, dst_col) {
            return Err(IllegalMove::new(IllegalReason::LightSquare));
        }

        let piece = *self.piece(src_row, src_col)?;
        if piece.is_man() {
            let forward = match piece.color() {
                Color::Light => dst_row > src_row,
                Color::Dark => dst_row < src_row,
            };
            if !forward {
                return Err(IllegalMove::new(IllegalReason::Backward));
            }
        }
        if self.has_piece(dst_row, dst_col)? {
            return Err(IllegalMove::new(IllegalReason::Occupied));
        }

        self.history.push(Move::new(src_row, src_col, dst_row, dst_col));
        self.set_piece(dst_row, dst_col, piece)?;
        self.promote_back_ranks();
        Ok(())
    }

    fn promote_back_ranks(&mut self) {
        for col in 1..PROMOTION_COL_END {
            for row in [LIGHT_CROWN_ROW, DARK_CROWN_ROW] {
                if let Ok(piece) = self.grid[row - 1][col - 1].occupant_mut() {
                    if piece.is_man() {
                        piece.promote();
                    }
                }
            }
        }
    }

    /// Number of pieces of `color` anywhere on the board.
    pub fn piece_count(&self, color: Color) -> usize {
        self.cells()
            .filter_map(|cell| cell.occupant().ok())
            .filter(|piece| piece.color() == color)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Rank;
    use crate::constants::CELL_COUNT;

    fn initialized() -> Board {
        let mut board = Board::new();
        board.initialize();
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells().count(), CELL_COUNT);
        assert!(board.cells().all(|c| !c.has_occupant()));
        assert_eq!(board.piece_count(Color::Light), 0);
        assert_eq!(board.piece_count(Color::Dark), 0);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_cell_coordinates() {
        let board = Board::new();
        for row in 1..=ROWS {
            for col in 1..=COLS {
                let cell = board.cell(row, col).unwrap();
                assert_eq!((cell.row(), cell.col()), (row, col));
            }
        }
    }

    #[test]
    fn test_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.cell(0, 5).unwrap_err(),
            BoardError::OutOfBounds { row: 0, col: 5 }
        );
        assert_eq!(
            board.cell(11, 5).unwrap_err(),
            BoardError::OutOfBounds { row: 11, col: 5 }
        );
        assert!(board.has_piece(5, 0).is_err());
        assert!(board.set_piece(5, 11, Piece::man(Color::Light)).is_err());
        assert!(board.set_cell(0, 0, Cell::new(1, 1)).is_err());
    }

    #[test]
    fn test_initialize() {
        let board = initialized();
        assert_eq!(board.piece_count(Color::Light), 20);
        assert_eq!(board.piece_count(Color::Dark), 20);

        for cell in board.cells() {
            if let Ok(piece) = cell.occupant() {
                assert!(is_dark_square(cell.row(), cell.col()));
                assert_eq!(piece.rank, Rank::Man);
                let expected = if cell.row() <= 4 { Color::Light } else { Color::Dark };
                assert_eq!(piece.color(), expected);
            }
        }
        for col in 1..=COLS {
            assert!(!board.has_piece(5, col).unwrap());
            assert!(!board.has_piece(6, col).unwrap());
        }
    }

    #[test]
    fn test_play_turn_forward() {
        let mut board = initialized();
        assert_eq!(board.current_turn(), Color::Light);

        board.play_turn(4, 1, 5, 2).unwrap();
        assert_eq!(board.current_turn(), Color::Dark);
        assert_eq!(board.history(), &[Move::new(4, 1, 5, 2)]);
        assert_eq!(*board.piece(5, 2).unwrap(), Piece::man(Color::Light));
        // Source is left occupied
        assert!(board.has_piece(4, 1).unwrap());
    }

    #[test]
    fn test_play_turn_rejections() {
        let mut board = initialized();

        let err = board.play_turn(4, 1, 5, 1).unwrap_err();
        assert_eq!(err.reason(), IllegalReason::LightSquare);

        let err = board.play_turn(4, 1, 3, 2).unwrap_err();
        assert_eq!(err.reason(), IllegalReason::Backward);

        let err = board.play_turn(3, 2, 4, 3).unwrap_err();
        assert_eq!(err.reason(), IllegalReason::Occupied);

        let err = board.play_turn(5, 2, 6, 3).unwrap_err();
        assert_eq!(
            err.reason(),
            IllegalReason::Unresolved(BoardError::EmptyCell { row: 5, col: 2 })
        );

        let err = board.play_turn(0, 1, 6, 1).unwrap_err();
        assert_eq!(
            err.reason(),
            IllegalReason::Unresolved(BoardError::OutOfBounds { row: 0, col: 1 })
        );

        assert!(board.history().is_empty());
    }

    #[test]
    fn test_king_ignores_direction_and_distance() {
        let mut board = Board::new();
        board
            .set_piece(5, 4, Piece::new(Color::Light, Rank::King))
            .unwrap();
        board.play_turn(5, 4, 2, 1).unwrap();
        assert_eq!(board.piece(2, 1).unwrap().rank, Rank::King);
    }

    #[test]
    fn test_promotion_sweep() {
        let mut board = Board::new();
        board.set_piece(9, 2, Piece::man(Color::Light)).unwrap();
        board.play_turn(9, 2, 10, 1).unwrap();
        assert_eq!(board.piece(10, 1).unwrap().rank, Rank::King);

        // Column 10 of the back rank is outside the sweep
        board.set_piece(2, 9, Piece::man(Color::Dark)).unwrap();
        board.play_turn(2, 9, 1, 10).unwrap();
        assert_eq!(board.piece(1, 10).unwrap().rank, Rank::Man);
    }

    #[test]
    fn test_sweep_promotes_pieces_that_did_not_move() {
        let mut board = Board::new();
        board.set_piece(1, 4, Piece::man(Color::Light)).unwrap();
        board.set_piece(5, 2, Piece::man(Color::Light)).unwrap();
        assert_eq!(board.piece(1, 4).unwrap().rank, Rank::Man);

        board.play_turn(5, 2, 6, 3).unwrap();
        assert_eq!(board.piece(1, 4).unwrap().rank, Rank::King);
    }
}
