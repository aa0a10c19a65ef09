//! Keyboard and mouse mapping to view actions.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Something the user asked the view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor by (rows, cols).
    MoveCursor(isize, isize),
    /// Place at the board cursor.
    PlaceAtCursor,
    /// Place at a specific cell.
    Place(Position),
    /// Show a recorded step.
    Jump(usize),
    /// Show the previous step.
    StepBack,
    /// Show the next recorded step.
    StepForward,
    /// Show step 0.
    First,
    /// Show the last recorded step.
    Last,
    /// Flip the move list order.
    ToggleOrder,
    /// Discard everything and start over.
    NewGame,
    /// Leave the TUI.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Up => Action::MoveCursor(-1, 0),
        KeyCode::Down => Action::MoveCursor(1, 0),
        KeyCode::Left => Action::MoveCursor(0, -1),
        KeyCode::Right => Action::MoveCursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Action::Place(Position::from_index(index)?)
        }
        KeyCode::Char('[') | KeyCode::PageUp => Action::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Action::StepForward,
        KeyCode::Home => Action::First,
        KeyCode::End => Action::Last,
        KeyCode::Char('r') => Action::ToggleOrder,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Screen areas of the clickable elements drawn in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, Position)>,
    moves: Vec<(Rect, usize)>,
    toggle: Option<Rect>,
}

impl HitMap {
    /// Records a board cell.
    pub fn add_cell(&mut self, area: Rect, pos: Position) {
        self.cells.push((area, pos));
    }

    /// Records a move-list row.
    pub fn add_move(&mut self, area: Rect, step: usize) {
        self.moves.push((area, step));
    }

    /// Records the order toggle.
    pub fn set_toggle(&mut self, area: Rect) {
        self.toggle = Some(area);
    }

    /// Action for a click at column `x`, row `y`.
    pub fn hit(&self, x: u16, y: u16) -> Option<Action> {
        let inside = |r: &Rect| x >= r.x && x < r.right() && y >= r.y && y < r.bottom();

        if let Some((_, pos)) = self.cells.iter().find(|(r, _)| inside(r)) {
            return Some(Action::Place(*pos));
        }
        if let Some((_, step)) = self.moves.iter().find(|(r, _)| inside(r)) {
            return Some(Action::Jump(*step));
        }
        self.toggle
            .filter(|r| inside(r))
            .map(|_| Action::ToggleOrder)
    }
}

/// Maps a left click to an action using the last frame's hit map.
pub fn action_for_mouse(event: MouseEvent, hit_map: &HitMap) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => hit_map.hit(event.column, event.row),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_place() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('1'))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('9'))),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for_key(press(KeyCode::Up)), Some(Action::MoveCursor(-1, 0)));
        assert_eq!(action_for_key(press(KeyCode::Char('['))), Some(Action::StepBack));
        assert_eq!(action_for_key(press(KeyCode::End)), Some(Action::Last));
        assert_eq!(action_for_key(press(KeyCode::Char('r'))), Some(Action::ToggleOrder));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(key), None);
    }

    #[test]
    fn test_hit_map() {
        let mut map = HitMap::default();
        map.add_cell(Rect::new(0, 0, 5, 3), Position::TopLeft);
        map.add_move(Rect::new(20, 4, 30, 1), 3);
        map.set_toggle(Rect::new(20, 2, 30, 1));

        assert_eq!(map.hit(4, 2), Some(Action::Place(Position::TopLeft)));
        assert_eq!(map.hit(5, 2), None);
        assert_eq!(map.hit(25, 4), Some(Action::Jump(3)));
        assert_eq!(map.hit(25, 2), Some(Action::ToggleOrder));
        assert_eq!(map.hit(25, 5), None);
    }
}
