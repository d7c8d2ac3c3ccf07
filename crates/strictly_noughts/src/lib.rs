//! Strictly Noughts - immutable tic-tac-toe game-state engine
//!
//! Every value in this crate is an immutable snapshot. A [`GameState`]
//! derives turn ownership, completion and the winner purely from its
//! [`Grid`]; applying a move never mutates anything and instead returns a
//! new state together with a [`Move`] record linking the two snapshots.
//!
//! # Architecture
//!
//! - **Mark**: the two player symbols, `X` and `O`
//! - **Grid**: 9 cells in row-major order with memoized counts
//! - **GameState**: grid plus starting mark, all game queries and `make_move`
//! - **Move**: immutable before/after record of a single placement
//! - **Invariants**: checkable reachability properties of states and moves
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{GameState, Mark};
//!
//! # fn example() -> Result<(), strictly_noughts::EngineError> {
//! let state = GameState::default();
//! let (state, mv) = state.make_move(4)?;
//! assert_eq!(mv.mark(), Mark::Cross);
//! assert_eq!(state.current_mark(), Mark::Naught);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod grid;
mod lines;
mod mark;
mod moves;
mod state;

pub mod invariants;

// Crate-level exports - Errors
pub use error::EngineError;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use grid::{Cell, Grid};
pub use lines::{WINNING_LINES, completed_lines, find_winning_line};
pub use mark::Mark;
pub use moves::Move;
pub use state::{GameState, GameStatus};
