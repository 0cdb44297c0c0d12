//! Non-search fallback chooser
//!
//! Used when the minimax pass had no candidates to evaluate. Scans the
//! whole board in row-major order with a fixed priority: win now, block
//! the opponent's win, else take the best cell by a cheap proximity
//! heuristic.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::rules::check_win;

/// Pick a move without searching.
///
/// Priority order: the first cell (row-major) that wins immediately for
/// the computer, else the first cell that blocks the opponent's
/// immediate win, else the highest-scoring cell under
/// [`simple_heuristic`] with ties going to the earlier cell. `None`
/// only on a full board.
pub fn simple_best_move(board: &Board, ai: Stone) -> Option<Pos> {
    let opponent = ai.opponent();

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) && check_win(board, pos, ai) {
            return Some(pos);
        }
    }

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) && check_win(board, pos, opponent) {
            return Some(pos);
        }
    }

    let mut scored: Vec<(Pos, i32)> = (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| (pos, simple_heuristic(board, pos, ai)))
        .collect();

    // Stable sort: among equal scores the row-major earlier cell wins
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.first().map(|&(pos, _)| pos)
}

/// Cheap positional score: closeness to the center plus neighbor bonuses.
///
/// `+3` per adjacent own stone, `+1` per adjacent opponent stone.
fn simple_heuristic(board: &Board, pos: Pos, ai: Stone) -> i32 {
    let center = (BOARD_SIZE / 2) as i32;
    let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
    let mut score = (10 - dist).max(0);

    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            if !Pos::is_valid(r, c) {
                continue;
            }
            match board.get(Pos::new(r as u8, c as u8)) {
                s if s == ai => score += 3,
                Stone::Empty => {}
                _ => score += 1,
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_win_over_block() {
        let mut board = Board::new();
        // Both sides have a four; the computer's own win comes first
        for i in 2..6 {
            board.place_stone(Pos::new(2, i), Stone::White);
            board.place_stone(Pos::new(6, i), Stone::Black);
        }
        board.place_stone(Pos::new(2, 1), Stone::Black);
        board.place_stone(Pos::new(6, 1), Stone::White);
        assert_eq!(simple_best_move(&board, Stone::White), Some(Pos::new(2, 6)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let mut board = Board::new();
        for i in 2..6 {
            board.place_stone(Pos::new(6, i), Stone::Black);
        }
        board.place_stone(Pos::new(6, 1), Stone::White);
        assert_eq!(simple_best_move(&board, Stone::White), Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_block_takes_first_in_row_major_order() {
        let mut board = Board::new();
        // Open four: both (6,1) and (6,6) block; row-major first wins
        for i in 2..6 {
            board.place_stone(Pos::new(6, i), Stone::Black);
        }
        assert_eq!(simple_best_move(&board, Stone::White), Some(Pos::new(6, 1)));
    }

    #[test]
    fn test_empty_board_takes_center() {
        let board = Board::new();
        assert_eq!(simple_best_move(&board, Stone::White), Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_prefers_own_neighborhood() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 2), Stone::White);
        board.place_stone(Pos::new(4, 6), Stone::Black);
        // (4,3) sits next to the computer's stone: 9 + 3 beats every
        // other cell's distance score plus bonuses
        assert_eq!(simple_best_move(&board, Stone::White), Some(Pos::new(4, 3)));
    }

    #[test]
    fn test_tie_resolves_to_earlier_cell() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        // The four cells orthogonally adjacent to the center all score
        // 9 + 1; (3,4) is first in row-major order
        assert_eq!(simple_best_move(&board, Stone::White), Some(Pos::new(3, 4)));
    }

    #[test]
    fn test_full_board_no_move() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx), stone);
        }
        assert_eq!(simple_best_move(&board, Stone::White), None);
    }
}
