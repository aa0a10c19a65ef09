//! Step bounds invariant: the shown step is always recorded.

use super::super::GameState;
use super::Invariant;

/// Invariant: history starts at the empty board and `current_step` indexes it.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(first) = state.history().get(0) else {
            return false;
        };
        first.placed().is_none()
            && first.board().occupied() == 0
            && state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the current step is recorded"
    }
}
