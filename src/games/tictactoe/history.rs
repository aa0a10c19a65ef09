//! Recorded board snapshots for time travel.

use super::{Board, Position};
use serde::Serialize;

/// One recorded board state plus the cell that was just filled.
///
/// The initial snapshot has no placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    board: Board,
    placed: Option<Position>,
}

impl Snapshot {
    /// The empty board at step 0.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Snapshot recorded after filling `placed`.
    pub fn after_move(board: Board, placed: Position) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Board at this step.
    pub fn board(&self) -> &Board {
        &self.board
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
}

/// Ordered snapshots indexed by step; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<Snapshot>")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// History holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; step 0 is always present.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots in step order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterator over snapshots in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Copy of this history keeping steps `0..=step` and appending `snapshot`.
    pub(super) fn branch(&self, step: usize, snapshot: Snapshot) -> Self {
        let mut snapshots = Vec::with_capacity(step + 2);
        snapshots.extend_from_slice(&self.snapshots[..=step]);
        snapshots.push(snapshot);
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = &'static str;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        if snapshots.is_empty() {
            return Err("history must contain the initial snapshot");
        }
        Ok(Self { snapshots })
    }
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0).map(Snapshot::placed), Some(None));
    }

    #[test]
    fn test_branch_truncates_future() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let history = History::new()
            .branch(0, Snapshot::after_move(board, Position::Center))
            .branch(1, Snapshot::after_move(board, Position::TopLeft));
        assert_eq!(history.len(), 3);

        let branched = history.branch(0, Snapshot::after_move(board, Position::BottomRight));
        assert_eq!(branched.len(), 2);
        assert_eq!(branched.get(1).and_then(Snapshot::placed), Some(Position::BottomRight));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_snapshot_coordinates() {
        let snap = Snapshot::after_move(Board::new(), Position::MiddleRight);
        assert_eq!(snap.row(), Some(1));
        assert_eq!(snap.col(), Some(2));
        assert_eq!(Snapshot::initial().row(), None);
    }

    #[test]
    fn test_empty_history_rejected() {
        assert!(History::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_serializes_as_snapshot_list() {
        let board = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));
        let history = History::new().branch(0, Snapshot::after_move(board, Position::TopLeft));
        let json = serde_json::to_value(&history).expect("serializable");
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[0]["placed"], serde_json::Value::Null);
        assert_eq!(json[1]["placed"], "TopLeft");
    }
}
