//! Five-in-a-row game engine for a fixed 9x9 board
//!
//! Two modes: human-vs-human and human-vs-computer. The computer picks
//! its moves with a depth-limited minimax over a proximity-restricted
//! candidate set, scored by line-pattern heuristics, with a simple
//! win-now / block-now / center-weighted fallback.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality and win detection
//! - [`eval`]: Position evaluation (open/blocked run scoring)
//! - [`search`]: Minimax with alpha-beta pruning and the fallback chooser
//! - [`session`]: Game session orchestration (turns, modes, outcome)
//!
//! # Quick Start
//!
//! ```
//! use wuziqi::{GameMode, GameSession, Stone};
//!
//! let mut session = GameSession::new(GameMode::Pvc);
//!
//! // Human opens at the center, the computer replies
//! session.apply_move(4, 4).unwrap();
//! let reply = session.play_ai_move().unwrap();
//! assert_eq!(session.board().get(reply), Stone::White);
//! ```
//!
//! The engine performs no I/O of its own: a front end feeds it
//! `(row, col)` move requests and renders the board snapshot, current
//! player, and outcome it exposes after every accepted transition.

pub mod board;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use session::{GameMode, GameSession, MoveError, Outcome};
