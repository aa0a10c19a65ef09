//! Headless view of a game state.

use crate::games::tictactoe::{GameState, GameStatus, MoveEntry, Player, Position};
use serde::Serialize;

/// Everything a view renders for one state, in plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Cells in row-major order.
    pub board: [Option<Player>; 9],
    /// Status line.
    pub status: GameStatus,
    /// Winning line to highlight.
    pub winning_line: Option<[Position; 3]>,
    /// Step currently shown.
    pub current_step: usize,
    /// Number of recorded steps.
    pub history_len: usize,
    /// Whether `moves` is newest-first.
    pub display_reversed: bool,
    /// Move-history list in display order.
    pub moves: Vec<MoveEntry>,
}

impl From<&GameState> for GameSummary {
    fn from(state: &GameState) -> Self {
        let outcome = state.outcome();
        Self {
            board: state.current_board().squares().map(|s| s.player()),
            status: state.status(),
            winning_line: outcome.line(),
            current_step: state.current_step(),
            history_len: state.history().len(),
            display_reversed: state.display_reversed(),
            moves: state.moves(),
        }
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.board.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| ".".to_string(), |p| p.to_string()))
                .collect();
            writeln!(f, " {}", cells.join(" | "))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        if let Some(line) = self.winning_line {
            let indices: Vec<String> = line.iter().map(|p| p.index().to_string()).collect();
            writeln!(f, "Winning line: {}", indices.join(", "))?;
        }
        writeln!(f)?;
        for entry in &self.moves {
            let marker = if entry.is_current() { '>' } else { ' ' };
            writeln!(f, "{} {}", marker, entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_won_game() {
        let state = GameState::replay(&[0, 3, 1, 4, 2].map(|i| Position::ALL[i]));
        let summary = GameSummary::from(&state);
        assert_eq!(summary.status, GameStatus::Won(Player::X));
        assert_eq!(
            summary.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(summary.board[3], Some(Player::O));
        assert_eq!(summary.board[8], None);

        let text = summary.to_string();
        assert!(text.starts_with(" X | X | X\n O | O | .\n . | . | .\n"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Winning line: 0, 1, 2"));
        assert!(text.contains("> Go to move #5 (3, 1)"));
    }

    #[test]
    fn test_summary_json() {
        let state = GameState::new().apply_move(Position::Center);
        let json = serde_json::to_value(GameSummary::from(&state)).expect("serializable");
        assert_eq!(json["current_step"], 1);
        assert_eq!(json["board"][4], "X");
        assert_eq!(json["status"]["InProgress"]["next"], "O");
        assert_eq!(json["moves"][1]["placed"], "Center");
    }
}
