//! Terminal game against the engine.

use crate::turn::{play_turn, TurnOutcome};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use unbeatable_tictactoe::{Board, GameStatus};

/// Plays one game over line-based input and output.
///
/// Each input line is `row col` (0-2 each). Returns the final status, or
/// `InProgress` if the input ran out before the game ended.
#[instrument(skip_all)]
pub fn run_terminal_game(input: impl BufRead, mut output: impl Write) -> Result<GameStatus> {
    let mut board = Board::new();
    writeln!(output, "You are X. Enter moves as `row col` (0-2).\n")?;
    writeln!(output, "{}\n", board.display())?;

    for line in input.lines() {
        let line = line?;
        let Some((row, col)) = parse_move(&line) else {
            writeln!(output, "Could not read {:?}; expected `row col`.", line.trim())?;
            continue;
        };

        let outcome = match play_turn(&mut board, row, col) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };
        debug!(?outcome, "Terminal round played");

        if let Some(reply) = outcome.computer_move() {
            writeln!(output, "Computer plays {reply}")?;
        }
        writeln!(output, "{}\n", board.display())?;

        match outcome {
            TurnOutcome::HumanWon => writeln!(output, "Congratulations! You won!")?,
            TurnOutcome::ComputerWon { .. } => {
                writeln!(output, "Computer wins! Better luck next time.")?
            }
            TurnOutcome::Draw { .. } => writeln!(output, "It's a draw!")?,
            TurnOutcome::Continue { .. } => continue,
        }
        break;
    }

    Ok(board.status())
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 2"), Some((1, 2)));
        assert_eq!(parse_move(" 0,0 "), Some((0, 0)));
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("1 2 3"), None);
    }

    #[test]
    fn test_scripted_game_never_ends_in_human_win() {
        // Center, then whatever corners are still free; bad input mixed in.
        let script = "1 1\nnonsense\n0 0\n0 2\n2 0\n2 2\n0 1\n1 0\n1 2\n2 1\n";
        let mut out = Vec::new();

        let status = run_terminal_game(Cursor::new(script), &mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();

        assert!(transcript.contains("Computer plays (0, 0)"));
        assert!(transcript.contains("Could not read"));
        assert!(matches!(
            status,
            GameStatus::Draw | GameStatus::Won(unbeatable_tictactoe::Player::Computer)
        ));
    }
}
