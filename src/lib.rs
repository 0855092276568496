//! Tic-Tac-Toe rules and an exhaustive minimax player.
//!
//! The crate is split in two: the rules (the [`Board`] trait and its [`TicTacToeBoard`]
//! implementation) and a search engine ([`Minimax`]) that walks every line of play to the end and
//! returns an optimal move for whoever is to act. When several moves share the best value, one of
//! them is picked with an injected [`RandomGenerator`], so a fixed seed gives reproducible play.
//!
//! # Example
//!
//! ```rust
//! use ttt_minimax::{apply_action, initial_state, is_terminal, outcome, Minimax, Outcome};
//!
//! let mut board = initial_state();
//! let mut minimax = Minimax::builder().with_seed(42).build();
//!
//! // Let the engine play both sides.
//! while !is_terminal(&board) {
//!     let action = minimax.optimal_action(&board)?.expect("game is not over");
//!     board = apply_action(&board, action)?;
//! }
//!
//! // Optimal play from the empty board always ends in a draw.
//! assert_eq!(outcome(&board), Outcome::Drawn);
//! # Ok::<(), ttt_minimax::GameError>(())
//! ```

/// Contains the `Board` trait and the enums shared by every game.
pub mod board;
/// Contains the implementations of the `Board` trait shipped with the crate.
pub mod boards;
/// Errors raised by the rules.
pub mod error;
/// The exhaustive minimax search.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use board::{Board, Outcome, Player};
pub use boards::tic_tac_toe::{
    Action, Cell, TicTacToeBoard, apply_action, current_player, initial_state, is_terminal,
    legal_actions, outcome, utility,
};
pub use error::{GameError, Result};
pub use minimax::{
    Decision, Minimax, MinimaxBuilder, minimax_value, optimal_action, scored_actions,
};
pub use random::{FirstChoice, RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};
