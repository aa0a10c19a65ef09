//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark placed to reach step `n` is X for odd `n`, O for even.
///
/// Together with the parity rule for `x_is_next` this keeps the turn in step
/// with the history after any jump.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let marks_alternate = state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snap)| {
                snap.placed().is_some_and(|pos| {
                    snap.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                })
            });

        marks_alternate && state.x_is_next() == (state.next_player() == Player::X)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_parity_after_every_jump() {
        let state = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]);
        for step in 0..state.history().len() {
            let jumped = state.jump_to(step).expect("recorded step");
            assert!(AlternatingTurnInvariant::holds(&jumped));
            assert_eq!(jumped.x_is_next(), step % 2 == 0);
        }
    }
}
