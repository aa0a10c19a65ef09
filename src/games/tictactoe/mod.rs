//! Tic-tac-toe with a time-travel move history.

mod contracts;
mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use contracts::{Contract, GameNotWon, MoveContract, SquareIsEmpty};
pub use error::{GameError, MoveError};
pub use game::{FULL_HISTORY, GameState, GameStatus, MoveEntry};
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::WinResult;
pub use types::{Board, Player, Square};
