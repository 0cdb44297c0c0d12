//! Heuristic evaluation of board positions
//!
//! The evaluation sums, over every occupied cell, the cell's line scores
//! in all four directions, added for the evaluated color's stones and
//! subtracted for the opponent's. There is no run deduplication: every
//! stone in a run contributes the full run score, so longer runs are
//! amplified super-linearly on top of the score table.

use crate::board::{Board, Pos, Stone};

use super::patterns::line_score;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `perspective`, negative values the opponent.
#[must_use]
pub fn evaluate(board: &Board, perspective: Stone) -> i32 {
    let mut total = 0;
    for color in [Stone::Black, Stone::White] {
        let Some(stones) = board.stones(color) else {
            continue;
        };
        let mut sum = 0;
        for pos in stones.iter_ones() {
            sum += evaluate_position(board, pos, color);
        }
        total += if color == perspective { sum } else { -sum };
    }
    total
}

/// Score one occupied cell: sum of its line scores in all 4 directions.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    let mut score = 0;
    for &(dr, dc) in &DIRECTIONS {
        let (count, blocked) = line_run(board, pos, dr, dc, color);
        score += line_score(count, blocked);
    }
    score
}

/// Measure the run through `pos` along `(dr, dc)`.
///
/// Walks forward then backward from the cell (counted as 1). An empty
/// neighbor past the run leaves that end open; an opponent stone or the
/// board edge marks it blocked. Returns `(count, blocked ends)`.
fn line_run(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (i32, u8) {
    let mut count = 1;
    let mut blocked = 0u8;

    for (step_r, step_c) in [(dr, dc), (-dr, -dc)] {
        let mut r = i32::from(pos.row) + step_r;
        let mut c = i32::from(pos.col) + step_c;
        loop {
            if !Pos::is_valid(r, c) {
                blocked += 1;
                break;
            }
            match board.get(Pos::new(r as u8, c as u8)) {
                s if s == color => {
                    count += 1;
                    r += step_r;
                    c += step_c;
                }
                Stone::Empty => break,
                _ => {
                    blocked += 1;
                    break;
                }
            }
        }
    }

    (count, blocked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::LineScore;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black), 0);
        assert_eq!(evaluate(&board, Stone::White), 0);
    }

    #[test]
    fn test_single_center_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        // 4 directions, each a lone stone open on both ends
        assert_eq!(evaluate_position(&board, Pos::new(4, 4), Stone::Black), 40);
        assert_eq!(evaluate(&board, Stone::Black), 40);
        assert_eq!(evaluate(&board, Stone::White), -40);
    }

    #[test]
    fn test_single_corner_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        // Horizontal, vertical and SE diagonal are half-open; the NE
        // diagonal is edge-blocked on both ends and scores zero.
        assert_eq!(evaluate_position(&board, Pos::new(0, 0), Stone::White), 3);
    }

    #[test]
    fn test_adjacent_pair() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        // Each stone: open two horizontally plus three lone open lines
        assert_eq!(evaluate_position(&board, Pos::new(4, 3), Stone::Black), 130);
        assert_eq!(evaluate(&board, Stone::Black), 260);
    }

    #[test]
    fn test_half_open_run() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 1), Stone::White);
        for i in 2..5 {
            board.place_stone(Pos::new(4, i), Stone::Black);
        }
        let horizontal: i32 = {
            let (count, blocked) = line_run(&board, Pos::new(4, 3), 0, 1, Stone::Black);
            assert_eq!((count, blocked), (3, 1));
            line_score(count, blocked)
        };
        assert_eq!(horizontal, LineScore::CLOSED_THREE);
    }

    #[test]
    fn test_edge_counts_as_blocked() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place_stone(Pos::new(0, i), Stone::Black);
        }
        // Run starts at the left edge: one end blocked, one open
        let (count, blocked) = line_run(&board, Pos::new(0, 0), 0, 1, Stone::Black);
        assert_eq!((count, blocked), (3, 1));
    }

    #[test]
    fn test_fully_blocked_run_worthless() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 1), Stone::White);
        for i in 2..5 {
            board.place_stone(Pos::new(4, i), Stone::Black);
        }
        board.place_stone(Pos::new(4, 5), Stone::White);
        let (count, blocked) = line_run(&board, Pos::new(4, 3), 0, 1, Stone::Black);
        assert_eq!((count, blocked), (3, 2));
        assert_eq!(line_score(count, blocked), 0);
    }

    #[test]
    fn test_perspective_antisymmetry() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        board.place_stone(Pos::new(4, 5), Stone::Black);
        board.place_stone(Pos::new(2, 2), Stone::White);
        assert_eq!(
            evaluate(&board, Stone::Black),
            -evaluate(&board, Stone::White)
        );
    }

    #[test]
    fn test_open_beats_blocked() {
        let mut open = Board::new();
        for i in 2..5 {
            open.place_stone(Pos::new(4, i), Stone::Black);
        }
        let mut blocked = open.clone();
        blocked.place_stone(Pos::new(4, 1), Stone::White);
        assert!(evaluate(&open, Stone::Black) > evaluate(&blocked, Stone::Black));
    }

    #[test]
    fn test_longer_run_dominates() {
        let mut three = Board::new();
        for i in 2..5 {
            three.place_stone(Pos::new(4, i), Stone::Black);
        }
        let mut four = three.clone();
        four.place_stone(Pos::new(4, 5), Stone::Black);
        assert!(evaluate(&four, Stone::Black) > evaluate(&three, Stone::Black) * 2);
    }
}
