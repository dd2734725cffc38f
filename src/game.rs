//! Game engine driving a human-versus-computer match.
//!
//! The engine owns the caller-level state machine: it validates moves,
//! applies them, flips the turn, and reclassifies the board after every
//! accepted move. Terminal states accept no further moves.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::minimax;
use crate::rules;
use crate::types::{Board, GameState, GameStatus, Player};
use tracing::{instrument, warn};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position does not reference a square on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// X is the human side and moves first; O is the computer side driven
/// by [`minimax::computer_move`].
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Makes a move at the given position (0-8) for the player to move.
    ///
    /// Rejects moves after the game has ended, out-of-range positions,
    /// and occupied squares. On success the board is reclassified (a win
    /// is detected before a draw) and the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the first failed check.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn make_move(&mut self, pos: usize) -> Result<(), MoveError> {
        if self.state.status() != &GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if pos >= 9 {
            return Err(MoveError::OutOfBounds(pos));
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.apply_move(pos, player);
        self.state.set_status(rules::status(self.state.board()));

        GameInvariants::check_all(&self.state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "move postcondition failed");
            MoveError::InvariantViolation(descriptions)
        })?;

        Ok(())
    }

    /// Lets the computer take its turn.
    ///
    /// Asks the search engine for O's optimal move and applies it,
    /// returning the chosen position. The polarity contract binds the
    /// computer to O, so this is only valid when O is to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended and
    /// [`MoveError::WrongPlayer`] if it is not O's turn.
    #[instrument(skip(self))]
    pub fn make_computer_move(&mut self) -> Result<usize, MoveError> {
        if self.state.status() != &GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if self.state.current_player() != Player::O {
            return Err(MoveError::WrongPlayer(Player::O));
        }

        // An in-progress board always has an open square.
        let pos = minimax::computer_move(self.state.board()).ok_or(MoveError::GameOver)?;
        self.make_move(pos)?;
        Ok(pos)
    }

    /// Resets to a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_moves_alternate_turns() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.make_move(0).unwrap();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.state().history(), &[4, 0]);
    }

    #[test]
    fn test_rejects_occupied_square() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        assert_eq!(game.make_move(4), Err(MoveError::SquareOccupied(4)));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let mut game = Game::new();
        assert_eq!(game.make_move(9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        // X: 0, 1, 2 wins the top row; O: 3, 4
        for pos in [0, 3, 1, 4, 2] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(game.status(), &GameStatus::Won(Player::X));
        assert_eq!(game.make_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_move_requires_o_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.make_computer_move(),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_computer_blocks_threat() {
        let mut game = Game::new();
        game.make_move(0).unwrap(); // X
        game.make_move(4).unwrap(); // O
        game.make_move(1).unwrap(); // X threatens 2
        let pos = game.make_computer_move().unwrap();
        assert_eq!(pos, 2);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        game.reset();
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::SquareOccupied(4).to_string(),
            "Square 4 is already occupied"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::O).to_string(),
            "It's not O's turn"
        );
    }
}
