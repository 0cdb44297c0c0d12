//! Depth-limited minimax with alpha-beta pruning
//!
//! The computer is the maximizing player. The search mutates the live
//! board with place/undo pairs; recursion is strictly sequential, so no
//! two branches are ever in flight at once and the board is restored
//! before every return. Each root candidate is searched with a fresh
//! full window; pruning happens inside the recursion only.
//!
//! A position already containing a five-in-a-row is terminal and scored
//! at a coarse `±1000` signal rather than the evaluator's `100000`
//! five-score. Leaf positions with no five are scored by the evaluator.

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::{check_win, winner_on_board};

use super::fallback::simple_best_move;
use super::moves::candidate_moves;

/// Fixed lookahead: the computer's move and the opponent's reply
pub const SEARCH_DEPTH: i8 = 2;

/// Terminal score for a decided position inside the search
const WIN_SIGNAL: i32 = 1_000;

const INF: i32 = i32::MAX;

/// Pick the computer's move.
///
/// Tries every candidate: a move that wins on the spot is returned
/// immediately (first found in generator order, never passed through
/// the heuristic); otherwise the candidate with the best minimax score
/// wins, ties keeping the first found. Falls back to
/// [`simple_best_move`] when the candidate set is empty, which the
/// caller should have excluded by checking for a full board first.
pub fn best_move(board: &mut Board, ai: Stone) -> Option<Pos> {
    let mut best = None;
    let mut best_score = -INF;

    for pos in candidate_moves(board) {
        board.place_stone(pos, ai);
        if check_win(board, pos, ai) {
            board.remove_stone(pos);
            debug!(row = pos.row, col = pos.col, "immediate winning move");
            return Some(pos);
        }
        let score = minimax(board, ai, SEARCH_DEPTH - 1, false, -INF, INF);
        board.remove_stone(pos);

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    if best.is_none() {
        return simple_best_move(board, ai);
    }
    if let Some(pos) = best {
        debug!(row = pos.row, col = pos.col, score = best_score, "search complete");
    }
    best
}

/// Minimax over candidate moves with alpha-beta pruning.
///
/// `maximizing` nodes place the computer's stones, minimizing nodes the
/// opponent's. A decided position returns `±WIN_SIGNAL` before any
/// deeper search; depth exhaustion returns the evaluator's score.
fn minimax(
    board: &mut Board,
    ai: Stone,
    depth: i8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = winner_on_board(board) {
        return if winner == ai { WIN_SIGNAL } else { -WIN_SIGNAL };
    }
    if depth == 0 {
        return evaluate(board, ai);
    }

    let moves = candidate_moves(board);

    if maximizing {
        let mut best = -INF;
        for pos in moves {
            board.place_stone(pos, ai);
            let value = minimax(board, ai, depth - 1, false, alpha, beta);
            board.remove_stone(pos);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for pos in moves {
            board.place_stone(pos, ai.opponent());
            let value = minimax(board, ai, depth - 1, true, alpha, beta);
            board.remove_stone(pos);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
