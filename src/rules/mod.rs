//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so callers and the search engine share one evaluator.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn, or still in progress.
///
/// A winning line is checked before fullness, so a full board that
/// contains a completed line is reported as `Won`, never `Draw`.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = win::check_winner(board) {
        GameStatus::Won(winner)
    } else if draw::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
