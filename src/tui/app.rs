//! Application state and logic.

use super::input::{Action, HitMap};
use crate::config::UiConfig;
use crate::games::tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the current [`GameState`] value and replaces it with the result of
/// each transition.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    show_coordinates: bool,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &UiConfig) -> Self {
        let state = if *config.reverse_moves() {
            GameState::new().toggle_move_order()
        } else {
            GameState::new()
        };
        Self {
            state,
            cursor: Position::Center,
            show_coordinates: *config.show_coordinates(),
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether move labels include coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the clickable areas of the frame just drawn.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Clickable areas of the last frame.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Applies a user action.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::MoveCursor(d_row, d_col) => {
                self.cursor = self.cursor.step(d_row, d_col);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::Jump(step) => self.jump(step),
            Action::StepBack => {
                if let Some(step) = self.state.current_step().checked_sub(1) {
                    self.jump(step);
                }
            }
            Action::StepForward => self.jump(self.state.current_step() + 1),
            Action::First => self.jump(0),
            Action::Last => self.jump(self.state.history().len() - 1),
            Action::ToggleOrder => self.state = self.state.toggle_move_order(),
            Action::NewGame => {
                info!("Starting new game");
                let reversed = self.state.display_reversed();
                self.state = GameState::new();
                if reversed {
                    self.state = self.state.toggle_move_order();
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        self.state = self.state.apply_move(pos);
    }

    fn jump(&mut self, step: usize) {
        match self.state.jump_to(step) {
            Ok(state) => self.state = state,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }
}
