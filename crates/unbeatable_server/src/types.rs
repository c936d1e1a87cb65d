//! Request and response types for the REST API.

use crate::session::DEFAULT_SESSION;
use serde::{Deserialize, Serialize};
use unbeatable_tictactoe::{rules, Board, Coord, Player};

/// Board as sent over the wire: three rows of `null`, `"X"` or `"O"`.
pub type WireBoard = Vec<Vec<Option<Player>>>;

/// Converts a board to its wire form.
pub fn wire_board(board: &Board) -> WireBoard {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.player()).collect())
        .collect()
}

/// A board coordinate on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

impl From<Coord> for CellRef {
    fn from(coord: Coord) -> Self {
        Self {
            row: coord.row(),
            col: coord.col(),
        }
    }
}

/// Request to make a move.
///
/// Coordinates are signed so that negative values are reported as out of
/// range rather than failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row to play (0-2).
    pub row: i64,
    /// Column to play (0-2).
    pub col: i64,
    /// Session to play in.
    #[serde(default)]
    pub game_id: Option<String>,
}

impl MoveRequest {
    /// Returns the session ID, falling back to the default session.
    pub fn game_id(&self) -> &str {
        self.game_id.as_deref().unwrap_or(DEFAULT_SESSION)
    }
}

/// Query string selecting a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameQuery {
    /// Session ID.
    #[serde(default)]
    pub game_id: Option<String>,
}

impl GameQuery {
    /// Returns the session ID, falling back to the default session.
    pub fn game_id(&self) -> &str {
        self.game_id.as_deref().unwrap_or(DEFAULT_SESSION)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
}

/// Response after resetting a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Always true.
    pub success: bool,
    /// The empty board.
    pub board: WireBoard,
    /// Status message.
    pub message: String,
}

/// Response after a move attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Whether the human move was accepted.
    pub success: bool,
    /// Board after the round.
    pub board: WireBoard,
    /// Winner, if the round ended the game with one.
    pub winner: Option<Player>,
    /// Whether the round ended in a draw.
    #[serde(default)]
    pub is_draw: bool,
    /// The computer's reply, if it made one.
    pub computer_move: Option<CellRef>,
    /// Promo code, issued only when the human wins.
    pub promo_code: Option<String>,
    /// Status message.
    pub message: Option<String>,
}

impl MoveResponse {
    /// A rejected move: the board is returned unchanged.
    pub fn rejected(board: &Board, message: &str) -> Self {
        Self {
            success: false,
            board: wire_board(board),
            message: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// Current state of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateResponse {
    /// Session ID.
    pub game_id: String,
    /// Current board.
    pub board: WireBoard,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Whether the game ended in a draw.
    pub is_draw: bool,
    /// Empty cells in row-major order.
    pub empty_cells: Vec<CellRef>,
}

impl GameStateResponse {
    /// Builds the state response for a board.
    pub fn new(game_id: &str, board: &Board) -> Self {
        Self {
            game_id: game_id.to_string(),
            board: wire_board(board),
            winner: board.check_winner(),
            is_draw: rules::is_draw(board),
            empty_cells: board.empty_cells().into_iter().map(CellRef::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_board_shape() {
        let mut board = Board::new();
        board.place_at(0, 2, Player::Human).unwrap();
        board.place_at(1, 1, Player::Computer).unwrap();

        let json = serde_json::to_value(wire_board(&board)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[null, null, "X"], [null, "O", null], [null, null, null]])
        );
    }

    #[test]
    fn test_move_request_defaults_session() {
        let req: MoveRequest = serde_json::from_str(r#"{"row": 1, "col": 2}"#).unwrap();
        assert_eq!(req.game_id(), DEFAULT_SESSION);

        let req: MoveRequest =
            serde_json::from_str(r#"{"row": 1, "col": 2, "game_id": "abc"}"#).unwrap();
        assert_eq!(req.game_id(), "abc");
    }

    #[test]
    fn test_state_response_flags() {
        let drawn = Board::from_rows([
            ['X', 'O', 'X'],
            ['X', 'O', 'O'],
            ['O', 'X', 'X'],
        ]);
        let state = GameStateResponse::new("d", &drawn);
        assert!(state.is_draw);
        assert_eq!(state.winner, None);
        assert!(state.empty_cells.is_empty());

        let won = Board::from_rows([
            ['X', 'X', 'X'],
            ['O', 'O', 'X'],
            ['O', 'X', 'O'],
        ]);
        let state = GameStateResponse::new("w", &won);
        assert!(!state.is_draw);
        assert_eq!(state.winner, Some(Player::Human));
    }
}
