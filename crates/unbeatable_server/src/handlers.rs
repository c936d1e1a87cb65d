//! REST handlers.

use crate::app::AppState;
use crate::notify::{spawn_notification, Notification};
use crate::turn::{play_turn, TurnOutcome};
use crate::types::{
    wire_board, GameQuery, GameStateResponse, HealthResponse, MoveRequest, MoveResponse,
    ResetResponse,
};
use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use unbeatable_tictactoe::MoveError;

const MSG_GAME_OVER: &str = "Game is already over. Please reset.";
const MSG_OCCUPIED: &str = "Invalid move. Cell is already occupied.";
const MSG_OUT_OF_RANGE: &str = "Invalid move. Coordinates out of range.";

/// Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Resets a session's board, creating the session if needed.
#[instrument(skip(state))]
pub async fn reset_game(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GameQuery>,
) -> Json<ResetResponse> {
    let board = state.sessions.reset(query.game_id());
    info!(
        session_id = query.game_id(),
        active_sessions = state.sessions.session_count(),
        "Game reset"
    );

    Json(ResetResponse {
        success: true,
        board: wire_board(&board),
        message: "Game reset successfully".to_string(),
    })
}

/// Returns a session's current board.
#[instrument(skip(state))]
pub async fn game_state(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GameQuery>,
) -> Json<GameStateResponse> {
    let board = state.sessions.snapshot(query.game_id());
    Json(GameStateResponse::new(query.game_id(), &board))
}

/// Plays the human move and the computer's reply.
#[instrument(skip(state, req), fields(session_id = req.game_id(), row = req.row, col = req.col))]
pub async fn make_move(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let game_id = req.game_id();

    let (Ok(row), Ok(col)) = (usize::try_from(req.row), usize::try_from(req.col)) else {
        warn!("Negative coordinates rejected");
        let board = state.sessions.snapshot(game_id);
        return Json(MoveResponse::rejected(&board, MSG_OUT_OF_RANGE));
    };

    // The whole round runs under the session lock.
    let (result, board) = state.sessions.with_board(game_id, |board| {
        (play_turn(board, row, col), board.clone())
    });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "Move rejected");
            let message = match e {
                MoveError::GameOver => MSG_GAME_OVER,
                MoveError::Occupied(_) => MSG_OCCUPIED,
                MoveError::OutOfRange { .. } => MSG_OUT_OF_RANGE,
            };
            return Json(MoveResponse::rejected(&board, message));
        }
    };

    info!(
        ?outcome,
        active_sessions = state.sessions.session_count(),
        "Round played"
    );

    let mut response = MoveResponse {
        success: true,
        board: wire_board(&board),
        winner: outcome.winner(),
        computer_move: outcome.computer_move().map(Into::into),
        ..MoveResponse::default()
    };

    let message = match outcome {
        TurnOutcome::HumanWon => {
            let promo_code = state.promo_codes.generate();
            spawn_notification(
                Arc::clone(&state.notifier),
                Notification::Victory {
                    promo_code: promo_code.clone(),
                },
            );
            response.promo_code = Some(promo_code);
            "Congratulations! You won!"
        }
        TurnOutcome::ComputerWon { .. } => {
            spawn_notification(Arc::clone(&state.notifier), Notification::Loss);
            "Computer wins! Better luck next time."
        }
        TurnOutcome::Draw { .. } => {
            response.is_draw = true;
            "It's a draw!"
        }
        TurnOutcome::Continue { .. } => "Your turn!",
    };
    response.message = Some(message.to_string());

    Json(response)
}
