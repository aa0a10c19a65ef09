//! Error types for tic-tac-toe transitions.

use super::{Player, Position};

/// Reason a move was not applied.
///
/// `GameState::apply_move` swallows these and returns the state unchanged;
/// `GameState::try_apply_move` surfaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the current step already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

/// Invalid argument passed to a game operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// Step not present in the recorded history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for GameError {}
