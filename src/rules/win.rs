//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Lines are scanned in a fixed order and the
/// first complete line wins; a legal board has at most one winner.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(Square::Occupied(player)) = board.get(a) {
            if board.get(b) == Some(Square::Occupied(player))
                && board.get(c) == Some(Square::Occupied(player))
            {
                return Some(player);
            }
        }
    }

    None
}
