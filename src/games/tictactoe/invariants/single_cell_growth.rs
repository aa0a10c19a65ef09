//! Single cell growth invariant: each step fills exactly one empty cell.

use super::super::GameState;
use super::Invariant;

/// Invariant: `history[n].board` differs from `history[n-1].board` in exactly
/// one previously-empty cell, and that cell is the recorded placement.
pub struct SingleCellGrowthInvariant;

impl Invariant<GameState> for SingleCellGrowthInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match (after.board().diff(before.board()).as_slice(), after.placed()) {
                ([changed], Some(placed)) => {
                    *changed == placed
                        && before.board().is_empty(placed)
                        && !after.board().is_empty(placed)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one previously empty cell"
    }
}
