//! The 3x3 board model.

use crate::error::MoveError;
use crate::rules;
use crate::types::{Cell, Coord, GameStatus, Player, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only change through [`Board::place_mark`] (one Empty cell becomes
/// a mark) or [`Board::reset`]. A rejected placement leaves the board
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from rows of mark symbols.
    ///
    /// `'X'` is the human, `'O'` the computer, anything else is empty.
    pub fn from_rows(rows: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (coord, symbol) in Coord::ALL.iter().zip(rows.iter().flatten()) {
            board.cells[coord.index()] = match symbol {
                'X' => Cell::Mark(Player::Human),
                'O' => Cell::Mark(Player::Computer),
                _ => Cell::Empty,
            };
        }
        board
    }

    /// Sets every cell back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(occupied = self.occupied_count(), "Resetting board");
        self.cells = [Cell::Empty; 9];
    }

    /// Places `player`'s mark at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark; the
    /// board is left unchanged.
    pub fn place_mark(&mut self, coord: Coord, player: Player) -> Result<(), MoveError> {
        let cell = &mut self.cells[coord.index()];
        if !cell.is_empty() {
            return Err(MoveError::Occupied(coord));
        }
        *cell = Cell::Mark(player);
        Ok(())
    }

    /// Validates raw coordinates and places `player`'s mark there.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates outside the grid and
    /// [`MoveError::Occupied`] for a taken cell. Either way nothing changes.
    pub fn place_at(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Coord, MoveError> {
        let coord = Coord::new(row, col)?;
        self.place_mark(coord, player)?;
        Ok(coord)
    }

    /// Marks a cell the search knows to be empty.
    pub(crate) fn fill(&mut self, coord: Coord, player: Player) {
        debug_assert!(self.get(coord).is_empty());
        self.cells[coord.index()] = Cell::Mark(player);
    }

    /// Empties a cell the search filled a moment ago.
    pub(crate) fn clear(&mut self, coord: Coord) {
        self.cells[coord.index()] = Cell::Empty;
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows of three cells.
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for coord in Coord::ALL {
            rows[coord.row()][coord.col()] = self.get(coord);
        }
        rows
    }

    /// Returns the player holding a complete line, if any.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if all nine cells are occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the empty cells in row-major order.
    ///
    /// Computed fresh on every call.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.get(coord).is_empty())
            .collect()
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Derives the game status from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.player().map_or('.', Player::symbol).to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
