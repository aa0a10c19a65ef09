//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning `{P} action {Q}`: preconditions
//! decide whether a move is applied at all, postconditions verify that the
//! resulting state still satisfies every invariant.

use super::error::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::rules;
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the board at the current step has no winner yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Fails with [`MoveError::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match rules::check_winner(state.current_board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Current board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - History was cut at the previous step and grew by one
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        GameNotWon::check(state)?;
        SquareIsEmpty::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = TicTacToeInvariants::check_all(after).err().unwrap_or_default();

        let expected_len = before.current_step() + 2;
        if after.history().len() != expected_len || after.current_step() != expected_len - 1 {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History did not branch from the shown step"
            );
            violations.push(InvariantViolation::new(
                "History is cut at the shown step and grows by one",
            ));
        }

        let kept = &after.history().snapshots()[..after.history().len().min(expected_len - 1)];
        if kept != &before.history().snapshots()[..=before.current_step()] {
            violations.push(InvariantViolation::new("Earlier steps are preserved"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
