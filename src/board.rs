use crate::error::Result;
use std::fmt::Debug;

/// The central trait of the library, defining the interface for a game state.
///
/// The minimax search only talks to a game through this trait. Implementations are value types:
/// applying an action returns a new board and leaves `self` untouched, so sibling branches of the
/// search never observe each other's moves.
pub trait Board: Clone + Debug {
    /// The type representing a move in the game. For Tic-Tac-Toe this is a `(row, col)` pair.
    type Action: Copy + PartialEq + Debug;

    /// Returns the player whose turn it is to make a move.
    fn current_player(&self) -> Player;

    /// Returns the current outcome of the game.
    fn outcome(&self) -> Outcome;

    /// Returns every legal action, in a deterministic order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Returns the board that results from the current player taking `action`.
    fn apply_action(&self, action: &Self::Action) -> Result<Self>;

    /// Returns `true` once the game has been won or drawn.
    fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// Score of the board from X's point of view: `1` when X has won, `-1` when O has won and `0`
    /// for everything else, including boards that are still in progress.
    fn utility(&self) -> i32 {
        match self.outcome() {
            Outcome::Won(Player::X) => 1,
            Outcome::Won(Player::O) => -1,
            Outcome::Drawn | Outcome::InProgress => 0,
        }
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Outcome {
    /// The game is still ongoing.
    InProgress,
    /// The given player completed a line.
    Won(Player),
    /// The board is full and nobody won.
    Drawn,
}

/// The two sides of the game. X always moves first and maximizes the utility; O minimizes it.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    /// The first player, the maximizer.
    X,
    /// The second player, the minimizer.
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}
