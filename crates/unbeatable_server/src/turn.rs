//! One round of play: the human move followed by the computer's reply.

use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{compute_computer_move, Board, Coord, MoveError, Player};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The human completed a line; the computer did not move.
    HumanWon,
    /// The computer's reply completed a line.
    ComputerWon {
        /// The computer's winning move.
        computer_move: Coord,
    },
    /// The board filled up with no line.
    Draw {
        /// The computer's move, if the human move did not fill the board.
        computer_move: Option<Coord>,
    },
    /// The game goes on; it is the human's turn again.
    Continue {
        /// The computer's reply.
        computer_move: Coord,
    },
}

impl TurnOutcome {
    /// Returns the computer's move, if it made one.
    pub fn computer_move(&self) -> Option<Coord> {
        match *self {
            TurnOutcome::HumanWon => None,
            TurnOutcome::ComputerWon { computer_move } => Some(computer_move),
            TurnOutcome::Draw { computer_move } => computer_move,
            TurnOutcome::Continue { computer_move } => Some(computer_move),
        }
    }

    /// Returns the winner, if the round ended the game with one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            TurnOutcome::HumanWon => Some(Player::Human),
            TurnOutcome::ComputerWon { .. } => Some(Player::Computer),
            _ => None,
        }
    }
}

/// Applies the human move at `(row, col)` and, unless that ends the game,
/// the computer's reply.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board is already won or drawn
/// - [`MoveError::OutOfRange`] / [`MoveError::Occupied`] for an illegal
///   human move
///
/// The board is unchanged whenever an error is returned.
#[instrument(skip(board))]
pub fn play_turn(board: &mut Board, row: usize, col: usize) -> Result<TurnOutcome, MoveError> {
    if board.status().is_terminal() {
        return Err(MoveError::GameOver);
    }

    let human_move = board.place_at(row, col, Player::Human)?;
    debug!(%human_move, "Human move applied");

    if board.check_winner() == Some(Player::Human) {
        info!("Human completed a line");
        return Ok(TurnOutcome::HumanWon);
    }
    if board.is_full() {
        return Ok(TurnOutcome::Draw {
            computer_move: None,
        });
    }

    let computer_move = compute_computer_move(board).ok_or(MoveError::GameOver)?;
    board.place_mark(computer_move, Player::Computer)?;
    debug!(%computer_move, "Computer move applied");

    if board.check_winner() == Some(Player::Computer) {
        info!(%computer_move, "Computer completed a line");
        return Ok(TurnOutcome::ComputerWon { computer_move });
    }
    if board.is_full() {
        return Ok(TurnOutcome::Draw {
            computer_move: Some(computer_move),
        });
    }

    Ok(TurnOutcome::Continue { computer_move })
}
