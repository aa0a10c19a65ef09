//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](super::GameState). They are testable independently and are
//! checked after each transition in debug builds.

pub mod alternating_turn;
pub mod single_cell_growth;
pub mod step_in_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_cell_growth::SingleCellGrowthInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    StepInBoundsInvariant,
    SingleCellGrowthInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::history::{History, Snapshot};
    use crate::games::tictactoe::{Board, GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let state = GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
        assert!(TicTacToeInvariants::check_all(&state).is_ok());

        let state = state
            .jump_to(1)
            .expect("recorded step")
            .apply_move(Position::BottomLeft);
        assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // O moves first and overwrites nothing, but out of turn.
        let board = Board::new().with(Position::Center, Square::Occupied(Player::O));
        let history = History::try_from(vec![
            Snapshot::initial(),
            Snapshot::after_move(board, Position::Center),
        ])
        .expect("non-empty");
        let state = GameState {
            history,
            current_step: 1,
            display_reversed: false,
        };

        let violations = TicTacToeInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, AlternatingTurnInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StepInBoundsInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
