//! Tic-tac-toe with time travel.
//!
//! The core is a plain value, [`GameState`], holding every recorded board
//! snapshot and the step currently shown. Transitions take the current state
//! and return the next one:
//!
//! - [`GameState::apply_move`] places the next mark (illegal moves are no-ops)
//! - [`GameState::jump_to`] shows any recorded step
//! - [`GameState::toggle_move_order`] flips the move list order
//!
//! Win detection is the pure function [`evaluate`].
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let state = GameState::replay(&[
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ]);
//! assert_eq!(state.status(), GameStatus::Won(Player::X));
//!
//! let earlier = state.jump_to(2)?;
//! assert!(earlier.x_is_next());
//! # Ok::<(), time_travel_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod summary;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, UiConfig};

// Crate-level exports - Headless view
pub use summary::GameSummary;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules::{self, LINES, check_winner, evaluate, is_draw, is_full};
pub use games::tictactoe::{
    Board, Contract, FULL_HISTORY, GameError, GameNotWon, GameState, GameStatus, History,
    MoveContract, MoveEntry, MoveError, Player, Position, Snapshot, Square, SquareIsEmpty,
    WinResult,
};
