//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use crate::types::{Board, GameState, GameStatus, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn count_marks(board: &Board, player: Player) -> usize {
    board
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(player))
        .count()
}

/// Invariant: mark counts stay balanced.
///
/// X moves first, so after any number of accepted moves the number of
/// X marks equals the number of O marks or exceeds it by exactly one.
pub struct MarksBalanced;

impl Invariant<GameState> for MarksBalanced {
    fn holds(state: &GameState) -> bool {
        let x = count_marks(state.board(), Player::X);
        let o = count_marks(state.board(), Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Mark counts stay balanced (X leads by at most one)"
    }
}

/// Invariant: while the game is in progress, the turn follows board parity.
///
/// X moves first, so X is to move exactly when an even number of squares
/// is filled.
pub struct TurnFollowsParity;

impl Invariant<GameState> for TurnFollowsParity {
    fn holds(state: &GameState) -> bool {
        if state.status() != &GameStatus::InProgress {
            return true;
        }
        let filled = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        let expected = if filled % 2 == 0 { Player::X } else { Player::O };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Turn follows board parity (X moves on even fill counts)"
    }
}

/// Invariant: replaying the history reproduces the board.
///
/// Starting from an empty board and alternating from X, the recorded
/// positions must land on empty squares only and rebuild the current
/// board exactly.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for &pos in state.history() {
            if reconstructed.get(pos) != Some(Square::Empty) {
                return false;
            }
            if reconstructed.set(pos, Square::Occupied(player)).is_err() {
                return false;
            }
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "History replays to the current board without overwrites"
    }
}

/// All engine invariants as a composable set.
pub type GameInvariants = (MarksBalanced, TurnFollowsParity, HistoryConsistent);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_holds() {
        let state = GameState::new();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut state = GameState::new();
        state.apply_move(4, Player::X);
        state.apply_move(0, Player::O);
        state.apply_move(8, Player::X);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_out_of_turn_move_violates() {
        // O moving first corrupts balance, parity, and the replay.
        let mut state = GameState::new();
        state.apply_move(4, Player::O);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(!MarksBalanced::holds(&state));
        assert!(!TurnFollowsParity::holds(&state));
        assert!(!HistoryConsistent::holds(&state));
    }

    #[test]
    fn test_history_mismatch_violates() {
        // A move applied to the board but missing from the history.
        let mut state = GameState::new();
        state.apply_move(4, Player::X);
        let mut other = GameState::new();
        other.apply_move(4, Player::X);
        other.apply_move(0, Player::O);
        // Splice: board from `other`, history from `state`.
        let json = serde_json::json!({
            "board": other.board(),
            "current_player": "X",
            "status": "InProgress",
            "history": state.history(),
        });
        let corrupt: GameState = serde_json::from_value(json).unwrap();
        assert!(!HistoryConsistent::holds(&corrupt));
    }
}
