use crate::board::{Board, Outcome, Player};
use crate::error::{GameError, Result};
use std::fmt;
use tracing::warn;

/// Side length of the grid.
pub const SIZE: usize = 3;

/// The eight winning lines: three rows, three columns and the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A single square of the grid.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// The square holds the given player's mark.
    Mark(Player),
}

/// A move: place the current player's mark at `(row, col)`.
///
/// Any pair can be built; coordinates outside `0..3` are rejected by [`Board::apply_action`].
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Action {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The grid is a row-major `3x3` array of [`Cell`]. The player to move is stored next to the
/// grid and flipped by every applied action; [`TicTacToeBoard::player_from_marks`] recomputes it
/// from the mark counts, which is how [`TicTacToeBoard::from_cells`] validates foreign input.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    cells: [[Cell; SIZE]; SIZE],
    to_move: Player,
}

impl TicTacToeBoard {
    /// Creates the empty starting board with X to move.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            to_move: Player::X,
        }
    }

    /// Builds a board from raw cells, deriving the player to move from the mark counts.
    ///
    /// Fails with [`GameError::InvalidBoard`] unless X has as many marks as O or exactly one more.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Result<Self> {
        let to_move = Self::player_from_marks(&cells)?;
        Ok(Self { cells, to_move })
    }

    /// Derives whose turn it is from the marks alone: O when X is one mark ahead, X when the
    /// counts are level (the empty board included).
    pub fn player_from_marks(cells: &[[Cell; SIZE]; SIZE]) -> Result<Player> {
        let (x_count, o_count) = count_marks(cells);
        if x_count == o_count {
            Ok(Player::X)
        } else if x_count == o_count + 1 {
            Ok(Player::O)
        } else {
            Err(GameError::InvalidBoard { x_count, o_count })
        }
    }

    /// Returns the raw grid.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            match (self.at(a), self.at(b), self.at(c)) {
                (Cell::Mark(p), Cell::Mark(q), Cell::Mark(r)) if p == q && q == r => Some(p),
                _ => None,
            }
        })
    }

    /// Returns `true` when no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Returns `true` when no mark has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == Cell::Empty)
    }

    /// Number of marks placed so far.
    pub fn moves_made(&self) -> usize {
        let (x_count, o_count) = count_marks(&self.cells);
        x_count + o_count
    }

    fn at(&self, (row, col): (usize, usize)) -> Cell {
        self.cells[row][col]
    }
}

impl Default for TicTacToeBoard {
    /// Creates a new Tic-Tac-Toe board with player 'X' starting.
    fn default() -> Self {
        TicTacToeBoard::new()
    }
}

impl Board for TicTacToeBoard {
    type Action = Action;

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            Outcome::Won(player)
        } else if self.is_full() {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        }
    }

    fn legal_actions(&self) -> Vec<Self::Action> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
            .filter(|a| self.cells[a.row][a.col] == Cell::Empty)
            .collect()
    }

    fn apply_action(&self, action: &Self::Action) -> Result<Self> {
        let Action { row, col } = *action;
        let err = match self.cell(row, col) {
            None => GameError::OutOfRange { row, col },
            Some(Cell::Mark(_)) => GameError::Occupied { row, col },
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[row][col] = Cell::Mark(self.to_move);
                next.to_move = self.to_move.opponent();
                return Ok(next);
            }
        };
        warn!(row, col, %err, "rejected move");
        Err(err)
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "|")?;
                }
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Mark(Player::X) => 'X',
                    Cell::Mark(Player::O) => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

fn count_marks(cells: &[[Cell; SIZE]; SIZE]) -> (usize, usize) {
    cells
        .iter()
        .flatten()
        .fold((0, 0), |(x, o), cell| match cell {
            Cell::Mark(Player::X) => (x + 1, o),
            Cell::Mark(Player::O) => (x, o + 1),
            Cell::Empty => (x, o),
        })
}

/// Returns the all-empty starting board.
pub fn initial_state() -> TicTacToeBoard {
    TicTacToeBoard::new()
}

/// Returns the player who moves next on `board`.
pub fn current_player(board: &TicTacToeBoard) -> Player {
    board.current_player()
}

/// Returns every empty coordinate of `board`, row-major.
pub fn legal_actions(board: &TicTacToeBoard) -> Vec<Action> {
    board.legal_actions()
}

/// Returns the board that results from the current player playing `action`.
pub fn apply_action(board: &TicTacToeBoard, action: Action) -> Result<TicTacToeBoard> {
    board.apply_action(&action)
}

/// Evaluates the eight lines and fullness of `board`.
pub fn outcome(board: &TicTacToeBoard) -> Outcome {
    board.outcome()
}

/// Returns `true` once `board` is won or drawn.
pub fn is_terminal(board: &TicTacToeBoard) -> bool {
    board.is_terminal()
}

/// `1` if X has won, `-1` if O has won, `0` otherwise.
pub fn utility(board: &TicTacToeBoard) -> i32 {
    board.utility()
}
