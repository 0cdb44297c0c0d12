//! Game session orchestration
//!
//! The session owns the board, sequences turns, and holds the terminal
//! outcome. All board mutation goes through the single `advance`
//! transition; rejected moves are typed errors and leave the state
//! untouched. The session is an explicit value constructed by the entry
//! point; there is no process-wide game instance.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::rules::{check_win, is_legal};
use crate::search::best_move;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans at one board
    Pvp,
    /// Human (Black) against the computer (White)
    Pvc,
}

/// Terminal outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// A rejected move. The session state is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("illegal move: ({row}, {col}) is out of bounds or occupied")]
    Illegal { row: i32, col: i32 },
}

/// One game from first move to win or draw.
pub struct GameSession {
    board: Board,
    current: Stone,
    mode: GameMode,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// The computer's color in [`GameMode::Pvc`]
    pub const AI_STONE: Stone = Stone::White;

    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current: Stone::Black,
            mode,
            outcome: None,
        }
    }

    /// Switch mode and start over
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Fresh board, Black to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Stone::Black;
        self.outcome = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_player(&self) -> Stone {
        self.current
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if the computer should move next
    pub fn ai_to_move(&self) -> bool {
        self.mode == GameMode::Pvc && self.current == Self::AI_STONE && !self.is_over()
    }

    /// Apply an externally requested move for the current player.
    ///
    /// This is the input path for the presentation layer. In computer
    /// mode it only accepts moves on the human's turn; the computer
    /// replies through [`GameSession::play_ai_move`].
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.mode == GameMode::Pvc && self.current == Self::AI_STONE {
            return Err(MoveError::NotYourTurn);
        }
        if !is_legal(&self.board, row, col) {
            return Err(MoveError::Illegal { row, col });
        }
        self.advance(Pos::new(row as u8, col as u8));
        Ok(())
    }

    /// Run the search and apply the computer's reply.
    ///
    /// Only callable when [`GameSession::ai_to_move`] is true. The
    /// search works on the live board and restores it before the chosen
    /// move is applied.
    pub fn play_ai_move(&mut self) -> Result<Pos, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.ai_to_move() {
            return Err(MoveError::NotYourTurn);
        }
        // A full board would already have ended the game in a draw, so
        // the search always has at least one cell to pick.
        let pos = best_move(&mut self.board, Self::AI_STONE)
            .expect("search invoked on a full board");
        self.advance(pos);
        Ok(pos)
    }

    /// The single accepted-move transition: place, check win, check
    /// draw, flip the turn.
    fn advance(&mut self, pos: Pos) {
        let mover = self.current;
        self.board.place_stone(pos, mover);
        debug!(row = pos.row, col = pos.col, %mover, "stone placed");

        if check_win(&self.board, pos, mover) {
            self.outcome = Some(Outcome::Win(mover));
            info!(winner = %mover, "game over");
            return;
        }
        if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
            info!("game over: draw");
            return;
        }
        self.current = mover.opponent();
    }

    #[cfg(test)]
    fn from_parts(board: Board, current: Stone, mode: GameMode) -> Self {
        Self {
            board,
            current,
            mode,
            outcome: None,
        }
    }
}
