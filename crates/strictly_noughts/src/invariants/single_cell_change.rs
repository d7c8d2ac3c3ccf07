//! Single cell change invariant: a move writes exactly one empty cell.

use super::Invariant;
use crate::{Cell, Move};

/// Invariant: before and after grids differ only at the move's cell.
///
/// That cell goes from empty to the move's mark, the mark is the one
/// whose turn it was, and both states share a starting mark.
pub struct SingleCellChangeInvariant;

impl Invariant<Move> for SingleCellChangeInvariant {
    fn holds(mv: &Move) -> bool {
        let before = mv.before_state();
        let after = mv.after_state();

        if before.starting_mark() != after.starting_mark()
            || before.current_mark() != mv.mark()
            || !before.grid().is_empty_at(mv.cell_index())
        {
            return false;
        }

        before
            .grid()
            .cells()
            .iter()
            .zip(after.grid().cells())
            .enumerate()
            .all(|(index, (was, now))| {
                if index == mv.cell_index() {
                    *was == Cell::Empty && *now == Cell::Marked(mv.mark())
                } else {
                    was == now
                }
            })
    }

    fn description() -> &'static str {
        "A move writes its mark into exactly one empty cell"
    }
}
