//! Win condition checking
//!
//! A player wins with 5 or more contiguous stones in any of the 4 line
//! directions. Move application always checks incrementally from the
//! last-placed cell; the whole-board scan exists only for the search's
//! terminal test.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Five-in-a-row check at a specific cell.
///
/// For each direction, counts contiguous `color` stones extending from
/// `pos` both ways, the cell at `pos` included as 1. The cell itself is
/// never read, so the check is valid whether or not the stone has been
/// physically placed yet.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        // Positive direction
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            count += 1;
            r += dr;
            c += dc;
        }
        // Negative direction
        r = i32::from(pos.row) - dr;
        c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            count += 1;
            r -= dr;
            c -= dc;
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Scan the whole board for a decided win.
///
/// Returns `Some(color)` if either color has 5-in-a-row. Used by the
/// search's terminal test only; move application relies on `check_win`
/// at the placed cell instead.
pub fn winner_on_board(board: &Board) -> Option<Stone> {
    for color in [Stone::Black, Stone::White] {
        let Some(stones) = board.stones(color) else {
            continue;
        };
        for pos in stones.iter_ones() {
            if check_win(board, pos, color) {
                return Some(color);
            }
        }
    }
    None
}
