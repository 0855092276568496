use derive_more::{Display, Error};

/// Errors raised by the rules when a move or a board is not legal.
///
/// The search never recovers from these; they are handed straight back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The coordinate lies outside the 3x3 grid.
    #[display("cell ({row}, {col}) is outside the 3x3 grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// A board that is not over offers no legal action.
    #[display("game is still in progress but no action is legal")]
    NoLegalActions,
    /// The marks on the board cannot come from alternating play starting with X.
    #[display("impossible mark counts: {x_count} X against {o_count} O")]
    InvalidBoard {
        /// Number of X marks on the board.
        x_count: usize,
        /// Number of O marks on the board.
        o_count: usize,
    },
}

impl GameError {
    /// Returns `true` for the errors that reject a single move rather than a whole board.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::OutOfRange { .. } | GameError::Occupied { .. })
    }
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
