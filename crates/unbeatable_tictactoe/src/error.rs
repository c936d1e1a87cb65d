//! Move validation errors.

use crate::types::Coord;

/// Error that can occur when validating or applying a move.
///
/// A failed move never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the coordinate is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Coord),

    /// The coordinate lies outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are out of range (must be 0-2)", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
