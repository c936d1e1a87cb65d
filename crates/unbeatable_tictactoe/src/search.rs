//! Minimax search with alpha-beta pruning.
//!
//! The search uses the caller's board as scratch space: it places a mark,
//! recurses, then clears the mark again. The `&mut Board` borrow keeps
//! every other reader and writer out for the duration of the call, and the
//! board is back in its starting state when the call returns.
//!
//! Scores are from the computer's point of view. A computer win found after
//! `depth` plies is worth `10 - depth`, a human win `depth - 10`, a draw `0`,
//! so quicker wins and slower losses rank higher.

use crate::{rules, Board, Coord, Player};
use tracing::{debug, instrument};

/// Score for a line completed at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Scores a board by exhaustive minimax with alpha-beta pruning.
///
/// `depth` is the number of plies already played in this branch. When
/// `maximizing` is true the computer is to move, otherwise the human.
/// Children are visited in row-major order and siblings are skipped once
/// `beta <= alpha`.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match rules::check_winner(board) {
        Some(Player::Computer) => return WIN_SCORE - depth,
        Some(Player::Human) => return depth - WIN_SCORE,
        None if rules::is_full(board) => return 0,
        None => {}
    }

    if maximizing {
        let mut best = i32::MIN;
        for coord in board.empty_cells() {
            board.fill(coord, Player::Computer);
            let score = minimax(board, depth + 1, false, alpha, beta);
            board.clear(coord);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for coord in board.empty_cells() {
            board.fill(coord, Player::Human);
            let score = minimax(board, depth + 1, true, alpha, beta);
            board.clear(coord);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Scores every computer move available on the board.
///
/// Each candidate is searched with fresh `(-inf, +inf)` bounds, so the
/// returned scores are exact game values. Order is row-major.
pub fn evaluate_moves(board: &mut Board) -> Vec<(Coord, i32)> {
    board
        .empty_cells()
        .into_iter()
        .map(|coord| {
            board.fill(coord, Player::Computer);
            let score = minimax(board, 0, false, i32::MIN, i32::MAX);
            board.clear(coord);
            (coord, score)
        })
        .collect()
}

/// Picks the computer's optimal move.
///
/// Returns the highest scoring cell, keeping the earliest in row-major
/// order on ties, so the same board always yields the same move. The caller
/// must only ask on a board that is not already won or drawn; `None` comes
/// back when there is no empty cell at all.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn compute_computer_move(board: &mut Board) -> Option<Coord> {
    let mut best: Option<(Coord, i32)> = None;
    for (coord, score) in evaluate_moves(board) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((coord, score));
        }
    }

    match best {
        Some((coord, score)) => {
            debug!(%coord, score, "Computer move chosen");
            Some(coord)
        }
        None => board.empty_cells().first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let mut computer_won = Board::from_rows([
            ['O', 'O', 'O'],
            ['X', 'X', '.'],
            ['X', '.', '.'],
        ]);
        assert_eq!(minimax(&mut computer_won, 3, true, i32::MIN, i32::MAX), 7);

        let mut human_won = Board::from_rows([
            ['X', 'X', 'X'],
            ['O', 'O', '.'],
            ['.', '.', '.'],
        ]);
        assert_eq!(minimax(&mut human_won, 2, false, i32::MIN, i32::MAX), -8);

        let mut drawn = Board::from_rows([
            ['X', 'O', 'X'],
            ['X', 'O', 'O'],
            ['O', 'X', 'X'],
        ]);
        assert_eq!(minimax(&mut drawn, 5, true, i32::MIN, i32::MAX), 0);
    }

    #[test]
    fn test_prefers_immediate_win_over_block() {
        // O can win at (1,2); X threatens (0,2).
        let mut board = Board::from_rows([
            ['X', 'X', '.'],
            ['O', 'O', '.'],
            ['X', '.', '.'],
        ]);
        assert_eq!(compute_computer_move(&mut board), Coord::new(1, 2).ok());
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        let mut board = Board::from_rows([
            ['X', 'X', '.'],
            ['O', 'O', '.'],
            ['X', '.', '.'],
        ]);
        let scores = evaluate_moves(&mut board);
        let win = scores
            .iter()
            .find(|(coord, _)| *coord == Coord::new(1, 2).unwrap())
            .unwrap();
        assert_eq!(win.1, WIN_SCORE);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::from_rows([
            ['X', '.', '.'],
            ['.', 'O', '.'],
            ['.', '.', 'X'],
        ]);
        let before = board.clone();
        compute_computer_move(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::from_rows([
            ['X', 'O', 'X'],
            ['X', 'O', 'O'],
            ['O', 'X', 'X'],
        ]);
        assert_eq!(compute_computer_move(&mut board), None);
    }
}
