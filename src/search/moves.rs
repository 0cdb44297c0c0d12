//! Candidate-move generation
//!
//! Minimax over every empty cell is intractable even on a 9x9 board at
//! depth > 1, so candidates are restricted to the neighborhood of
//! occupied cells. On an empty board the opening candidates are the 3x3
//! block around the center point.

use crate::board::{Bitboard, Board, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Chebyshev radius around occupied cells considered worth searching
const NEIGHBORHOOD: i32 = 2;

/// Radius of the opening block around the center cell
const OPENING_RADIUS: i32 = 1;

/// Enumerate candidate moves for the current position.
///
/// Every empty cell within Chebyshev distance 2 of an occupied cell,
/// each listed once, discovered in row-major order over occupied cells
/// and then row-major over each 5x5 block. Returns the center 3x3 block
/// when the board has no stones. Empty only when the board is full.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::new();
    let mut seen = Bitboard::new();

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) {
            continue;
        }
        for dr in -NEIGHBORHOOD..=NEIGHBORHOOD {
            for dc in -NEIGHBORHOOD..=NEIGHBORHOOD {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if !Pos::is_valid(r, c) {
                    continue;
                }
                let neighbor = Pos::new(r as u8, c as u8);
                if board.is_empty(neighbor) && !seen.get(neighbor) {
                    seen.set(neighbor);
                    moves.push(neighbor);
                }
            }
        }
    }

    // Opening: no stones to gather around yet
    if moves.is_empty() {
        let center = (BOARD_SIZE / 2) as i32;
        for dr in -OPENING_RADIUS..=OPENING_RADIUS {
            for dc in -OPENING_RADIUS..=OPENING_RADIUS {
                let r = center + dr;
                let c = center + dc;
                if Pos::is_valid(r, c) {
                    let pos = Pos::new(r as u8, c as u8);
                    if board.is_empty(pos) {
                        moves.push(pos);
                    }
                }
            }
        }
    }

    moves
}
