//! Time-travel game state for tic-tac-toe.
//!
//! [`GameState`] is a plain value. Every transition borrows the current state
//! and returns the next one, so a view can keep the previous value around or
//! drop it as it likes. The turn, the current board and the game status are
//! all derived from the history and the current step on every read.

use super::contracts::{Contract, MoveContract};
use super::error::{GameError, MoveError};
use super::history::{History, Snapshot};
use super::rules::{self, WinResult};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of snapshots in a game where every cell was filled.
pub const FULL_HISTORY: usize = 10;

/// Status line shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line has been completed on the current board.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Moves remain.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player to move at the current step.
        next: Player,
    },
    /// Every cell was filled without a winner.
    #[display("Draw")]
    Draw,
}

/// One row of the move-history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    step: usize,
    placed: Option<Position>,
    is_current: bool,
}

impl MoveEntry {
    /// Step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Cell filled to reach this step.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }

    /// Row of the filled cell.
    pub fn row(&self) -> Option<usize> {
        self.placed.map(Position::row)
    }

    /// Column of the filled cell.
    pub fn col(&self) -> Option<usize> {
        self.placed.map(Position::col)
    }

    /// Whether this is the step currently shown.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Label without the 1-based (col, row) suffix.
    ///
    /// Entries are numbered by step, so "move #n" is the board after the
    /// n-th mark and step 0 gets its own "game start" label.
    pub fn short_label(&self) -> String {
        match self.step {
            0 => "Go to game start".to_string(),
            n => format!("Go to move #{}", n),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.placed {
            Some(pos) => write!(
                f,
                "{} ({}, {})",
                self.short_label(),
                pos.col() + 1,
                pos.row() + 1
            ),
            None => write!(f, "{}", self.short_label()),
        }
    }
}

/// Authoritative game state: recorded history plus the step being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(super) history: History,
    pub(super) current_step: usize,
    pub(super) display_reversed: bool,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            display_reversed: false,
        }
    }

    /// Replays moves from the empty board, ignoring illegal ones.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        moves
            .iter()
            .fold(Self::new(), |state, pos| state.apply_move(*pos))
    }

    /// Recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is shown newest-first.
    pub fn display_reversed(&self) -> bool {
        self.display_reversed
    }

    /// Snapshot at the current step.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history.snapshots()[self.current_step]
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// Player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Win evaluation of the current board.
    pub fn outcome(&self) -> WinResult {
        rules::evaluate(self.current_board())
    }

    /// Status line for the current step.
    ///
    /// Draw is decided by the length of the recorded history, not the step
    /// being shown.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.outcome().winner() {
            GameStatus::Won(winner)
        } else if self.history.len() < FULL_HISTORY {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        } else {
            GameStatus::Draw
        }
    }

    /// Move-history list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snap)| MoveEntry {
                step,
                placed: snap.placed(),
                is_current: step == self.current_step,
            });
        if self.display_reversed {
            entries.rev().collect()
        } else {
            entries.collect()
        }
    }

    /// Places the next player's mark at `pos`, discarding any future steps.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board already has a winner.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &pos)?;

        let player = self.next_player();
        let board = self.current_board().with(pos, Square::Occupied(player));
        let next = GameState {
            history: self
                .history
                .branch(self.current_step, Snapshot::after_move(board, pos)),
            current_step: self.current_step + 1,
            display_reversed: self.display_reversed,
        };

        debug_assert!(
            MoveContract::post(self, &next).is_ok(),
            "move postcondition violated"
        );
        debug!(history_len = next.history.len(), "Move applied");
        Ok(next)
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Illegal moves leave the state unchanged.
    pub fn apply_move(&self, pos: Position) -> GameState {
        self.try_apply_move(pos).unwrap_or_else(|e| {
            debug!(error = %e, position = %pos, "Move ignored");
            self.clone()
        })
    }

    /// Like [`apply_move`](Self::apply_move) but takes a raw cell index.
    ///
    /// # Errors
    ///
    /// [`GameError::CellOutOfRange`] if `cell >= 9`.
    pub fn apply_index(&self, cell: usize) -> Result<GameState, GameError> {
        let pos = Position::try_from(cell)?;
        Ok(self.apply_move(pos))
    }

    /// Shows a recorded step. History is kept so later steps stay reachable.
    ///
    /// # Errors
    ///
    /// [`GameError::StepOutOfRange`] if `step` was never recorded.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!("Jumping to step");
        Ok(GameState {
            current_step: step,
            ..self.clone()
        })
    }

    /// Flips the move-list display order.
    pub fn toggle_move_order(&self) -> GameState {
        GameState {
            display_reversed: !self.display_reversed,
            ..self.clone()
        }
    }

    /// Empty cells that would accept a move at the current step.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> GameState {
        cells.iter().fold(GameState::new(), |s, c| {
            s.apply_index(*c).expect("valid cell index")
        })
    }

    #[test]
    fn test_first_move() {
        let state = GameState::new().apply_move(Position::TopLeft);
        assert_eq!(
            state.current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(state.current_step(), 1);
        assert!(!state.x_is_next());
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let state = play(&[4]);
        assert_eq!(
            state.try_apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(state.apply_move(Position::Center), state);
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(
            state.try_apply_move(Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
        assert_eq!(state.apply_move(Position::BottomRight).history().len(), 6);
        assert!(state.valid_moves().is_empty());
    }

    #[test]
    fn test_jump_keeps_future() {
        let state = play(&[0, 1, 2]).jump_to(1).expect("recorded step");
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.history().len(), 4);
        assert!(!state.x_is_next());
        assert_eq!(state.current_board().occupied(), 1);
    }

    #[test]
    fn test_jump_out_of_range() {
        let state = play(&[0]);
        assert_eq!(
            state.jump_to(2),
            Err(GameError::StepOutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_toggle_only_changes_order() {
        let state = play(&[0, 4]);
        let toggled = state.toggle_move_order();
        assert!(toggled.display_reversed());
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.current_step(), state.current_step());
        assert_eq!(
            toggled.moves().iter().map(MoveEntry::step).collect::<Vec<_>>(),
            vec![2, 1, 0]
        );
        assert!(!toggled.toggle_move_order().display_reversed());
    }

    #[test]
    fn test_apply_index_out_of_range() {
        assert_eq!(
            GameState::new().apply_index(9),
            Err(GameError::CellOutOfRange(9))
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameState::new().status().to_string(), "Next player: X");
        assert_eq!(play(&[0, 3, 1, 4, 2]).status().to_string(), "Winner: X");
        assert_eq!(play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).status().to_string(), "Draw");
    }

    #[test]
    fn test_move_entry_labels() {
        let moves = play(&[5]).moves();
        assert_eq!(moves[0].to_string(), "Go to game start");
        assert_eq!(moves[1].to_string(), "Go to move #1 (3, 2)");
        assert_eq!(moves[1].short_label(), "Go to move #1");
        assert!(moves[1].is_current());
        assert!(!moves[0].is_current());
    }
}
