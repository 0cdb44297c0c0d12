//! Search module for the computer player
//!
//! Contains:
//! - Candidate-move generation with proximity filtering
//! - Depth-limited minimax with alpha-beta pruning
//! - A non-search fallback chooser (win-now / block-now / proximity)

pub mod alphabeta;
pub mod fallback;
pub mod moves;

pub use alphabeta::{best_move, SEARCH_DEPTH};
pub use fallback::simple_best_move;
pub use moves::candidate_moves;
