//! Evaluation module for board positions
//!
//! Pattern recognition and scoring:
//! - Line patterns (open/blocked runs of length 1-5)
//! - Perspective-signed totals (positive favors the evaluated color)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_position};
pub use patterns::{line_score, LineScore};
