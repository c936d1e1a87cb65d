//! Unbeatable tic-tac-toe - board model and adversarial search
//!
//! This crate is the pure game core. It owns no sessions and no global
//! state: every operation works on a [`Board`] handed to it by the caller.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with placement, winner, fullness and empty-cell queries
//! - **Rules**: line and draw detection shared by the board and the search
//! - **Search**: minimax with alpha-beta pruning picking the computer's move
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Coord, Player, compute_computer_move};
//!
//! # fn example() -> Result<(), unbeatable_tictactoe::MoveError> {
//! let mut board = Board::new();
//! board.place_mark(Coord::new(1, 1)?, Player::Human)?;
//!
//! let reply = compute_computer_move(&mut board).expect("board has empty cells");
//! board.place_mark(reply, Player::Computer)?;
//! assert_eq!(reply, Coord::new(0, 0)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
pub mod search;
mod types;

pub use board::Board;
pub use error::MoveError;
pub use search::{compute_computer_move, evaluate_moves, minimax};
pub use types::{Cell, Coord, GameStatus, Player, BOARD_SIZE};
