//! Exhaustive adversarial search for the computer player.
//!
//! The game tree from any 3x3 position is small (at most 9! leaf paths),
//! so the search visits every node with no pruning and no depth limit.
//!
//! The scoring polarity is a fixed contract, not a parameter: a position
//! where X has won scores -10, a position where O has won scores +10, and
//! a draw scores 0. O is therefore the maximizing side and X the
//! minimizing side. Callers that want winning play from the computer must
//! bind `Player::O` to the computer's mark.

use crate::rules;
use crate::types::{Board, Player};
use tracing::{error, instrument};

/// Score of a position where X has won.
const X_WIN: i32 = -10;
/// Score of a position where O has won.
const O_WIN: i32 = 10;
/// Score of a drawn position.
const DRAW: i32 = 0;

/// Outcome of a search: the chosen position and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Index of the best move, `None` when the board is already terminal.
    pub position: Option<usize>,
    /// Game-theoretic value of the board, one of -10, 0, or +10.
    pub score: i32,
}

/// Computes the best achievable outcome for the side to move.
///
/// Terminal boards are classified before any move is generated, with the
/// win check strictly ahead of the fullness check. Otherwise every open
/// square is tried in ascending index order on a private copy of the
/// board, the opponent's best reply is evaluated recursively, and the
/// candidate with the best score for the mover is kept. Ties keep the
/// earliest candidate, which makes the result fully deterministic.
///
/// The input board is never mutated; equal inputs yield equal outputs.
pub fn search(board: &Board, to_move: Player) -> Evaluation {
    match rules::check_winner(board) {
        Some(Player::X) => {
            return Evaluation {
                position: None,
                score: X_WIN,
            };
        }
        Some(Player::O) => {
            return Evaluation {
                position: None,
                score: O_WIN,
            };
        }
        None => {}
    }

    if rules::is_full(board) {
        return Evaluation {
            position: None,
            score: DRAW,
        };
    }

    let mut best: Option<Evaluation> = None;
    for position in (0..9).filter(|&pos| board.is_empty(pos)) {
        let child = board.with(position, to_move);
        let score = search(&child, to_move.opponent()).score;

        let improved = match best {
            None => true,
            Some(current) => match to_move {
                Player::O => score > current.score,
                Player::X => score < current.score,
            },
        };
        if improved {
            best = Some(Evaluation {
                position: Some(position),
                score,
            });
        }
    }

    best.unwrap_or_else(|| {
        // A non-terminal board has at least one open square.
        error!("no candidate scored on a non-terminal board");
        Evaluation {
            position: None,
            score: DRAW,
        }
    })
}

/// Picks the computer's move for the given board.
///
/// Equivalent to `search(board, Player::O).position`: by the polarity
/// contract the computer plays O. Returns a concrete index whenever the
/// board has an open square and no winner, and `None` only when the board
/// handed in is already terminal.
#[instrument]
pub fn computer_move(board: &Board) -> Option<usize> {
    search(board, Player::O).position
}
