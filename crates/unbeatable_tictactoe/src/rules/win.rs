//! Win detection logic for tic-tac-toe.

use crate::{Board, Coord, Player};

const fn at(row: usize, col: usize) -> Coord {
    Coord::ALL[row * 3 + col]
}

/// The eight winning lines: rows 0-2, columns 0-2, then both diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the player of the first uniform, non-empty line in [`LINES`]
/// order. Under legal alternating play at most one player can hold a line.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[((usize, usize), Player)]) -> Board {
        let mut board = Board::new();
        for &((row, col), player) in marks {
            board.place_at(row, col, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            ((0, 0), Player::Human),
            ((0, 1), Player::Human),
            ((0, 2), Player::Human),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            ((0, 2), Player::Computer),
            ((1, 2), Player::Computer),
            ((2, 2), Player::Computer),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            ((0, 2), Player::Computer),
            ((1, 1), Player::Computer),
            ((2, 0), Player::Computer),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            ((1, 0), Player::Human),
            ((1, 1), Player::Computer),
            ((1, 2), Player::Human),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for coord in line {
                board.place_mark(coord, Player::Human).unwrap();
            }
            assert_eq!(check_winner(&board), Some(Player::Human), "line {line:?}");
        }
    }
}
