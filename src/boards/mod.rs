//! Contains the implementations of the `Board` trait shipped with the crate.

/// The 3x3 Tic-Tac-Toe rules.
pub mod tic_tac_toe;
