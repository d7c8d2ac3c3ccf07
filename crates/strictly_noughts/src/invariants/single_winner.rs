//! Single winner invariant: at most one mark completes a line.

use super::Invariant;
use crate::{GameState, completed_lines};

/// Invariant: at most one mark occupies a full line.
///
/// A mark may own two lines at once (the last move can close a row and
/// a column together), but both players never do.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        let lines = completed_lines(game.grid());
        lines.windows(2).all(|pair| pair[0].0 == pair[1].0)
    }

    fn description() -> &'static str {
        "At most one mark completes a line"
    }
}
