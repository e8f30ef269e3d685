//! Board geometry constants.
//!
//! International draughts is played on a fixed 10x10 grid. All external
//! coordinates are 1-based: rows and columns both run from 1 to 10.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 10;

/// Number of columns on the board.
pub const COLS: usize = 10;

/// Total number of cells.
pub const CELL_COUNT: usize = ROWS * COLS;

// =============================================================================
// Starting Position
// =============================================================================

/// First and last row (inclusive) holding Light men after initialization.
pub const LIGHT_START_ROWS: (usize, usize) = (1, 4);

/// First and last row (inclusive) holding Dark men after initialization.
pub const DARK_START_ROWS: (usize, usize) = (7, 10);

// =============================================================================
// Promotion
// =============================================================================

/// Back rank where Light men are crowned.
pub const LIGHT_CROWN_ROW: usize = ROWS;

/// Back rank where Dark men are crowned.
pub const DARK_CROWN_ROW: usize = 1;

/// One past the last column scanned by the promotion sweep.
/// Column 10 is never scanned.
pub const PROMOTION_COL_END: usize = COLS;

/// Returns true if `(row, col)` is a dark (playable) square.
#[inline]
pub fn is_dark_square(row: usize, col: usize) -> bool {
    row % 2 != col % 2
}
