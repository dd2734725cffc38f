//! Pure 3x3 tic-tac-toe game logic with a perfect-play computer opponent.
//!
//! The crate is a side-effect-free core: the caller owns presentation and
//! input, hands in board values, and receives moves and classifications.
//!
//! # Architecture
//!
//! - **Types**: board, players, squares, and game state as plain values
//! - **Rules**: pure win, draw, and status evaluation over a board
//! - **Minimax**: exhaustive adversarial search choosing O's optimal move
//! - **Game**: caller-level engine validating moves and tracking turns
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, MoveError};
//!
//! let mut game = Game::new();
//! game.make_move(4)?; // the human plays X in the center
//! let reply = game.make_computer_move()?; // O answers optimally
//! assert_ne!(reply, 4);
//! assert_eq!(game.status(), &GameStatus::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod invariants;
mod minimax;
mod rules;
mod types;

// Crate-level exports - game engine
pub use game::{Game, MoveError};

// Crate-level exports - invariants
pub use invariants::{
    GameInvariants, HistoryConsistent, Invariant, InvariantSet, InvariantViolation, MarksBalanced,
    TurnFollowsParity,
};

// Crate-level exports - search
pub use minimax::{Evaluation, computer_move, search};

// Crate-level exports - board evaluation
pub use rules::{check_winner, is_draw, is_full, status};

// Crate-level exports - domain types
pub use types::{Board, GameState, GameStatus, Player, Square};
