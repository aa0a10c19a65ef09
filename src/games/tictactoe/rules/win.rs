//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a board for three in a row.
///
/// `winner` and `line` are either both set or both empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    winner: Option<Player>,
    line: Option<[Position; 3]>,
}

impl WinResult {
    /// No line completed.
    pub fn none() -> Self {
        Self::default()
    }

    /// `player` completed `line`.
    pub fn won(player: Player, line: [Position; 3]) -> Self {
        Self {
            winner: Some(player),
            line: Some(line),
        }
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        self.line
    }

    /// Whether `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates the board against the winning lines.
///
/// The first line in [`LINES`] whose three squares hold the same mark wins.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> WinResult {
    for line @ [a, b, c] in LINES {
        if let Some(player) = board.get(a).player()
            && board.get(b).player() == Some(player)
            && board.get(c).player() == Some(player)
        {
            return WinResult::won(player, line);
        }
    }

    WinResult::none()
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn board_with(line: [Position; 3], player: Player) -> Board {
        line.iter()
            .fold(Board::new(), |b, pos| b.with(*pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), WinResult::none());
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let result = evaluate(&board_with(line, player));
                assert_eq!(result.winner(), Some(player));
                assert_eq!(result.line(), Some(line));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Top row and left column both complete for X.
        let board = board_with(LINES[0], Player::X)
            .with(Position::MiddleLeft, Square::Occupied(Player::X))
            .with(Position::BottomLeft, Square::Occupied(Player::X));
        assert_eq!(evaluate(&board).line(), Some(LINES[0]));
    }

    #[test]
    fn test_highlights() {
        let result = evaluate(&board_with(LINES[6], Player::O));
        assert!(result.highlights(Position::Center));
        assert!(!result.highlights(Position::TopRight));
        assert!(!WinResult::none().highlights(Position::Center));
    }
}
