//! Mark count invariants: players alternate, starting mark first.

use super::Invariant;
use crate::GameState;

/// Counts of the starting mark and the other mark on the grid.
fn counts(game: &GameState) -> (usize, usize) {
    let starting = game.starting_mark();
    (
        game.grid().mark_count(starting),
        game.grid().mark_count(starting.other()),
    )
}

/// Invariant: marks were placed alternately, starting mark first.
///
/// The starting mark is either level with the other mark or exactly one
/// ahead of it.
pub struct BalancedCountsInvariant;

impl Invariant<GameState> for BalancedCountsInvariant {
    fn holds(game: &GameState) -> bool {
        let (starting, other) = counts(game);
        starting == other || starting == other + 1
    }

    fn description() -> &'static str {
        "Marks alternate, starting mark first"
    }
}

/// Invariant: the winner placed the last mark.
///
/// Play stops at the first completed line, so a winning starting mark is
/// one ahead and a winning second mark is level.
pub struct WinnerMovedLastInvariant;

impl Invariant<GameState> for WinnerMovedLastInvariant {
    fn holds(game: &GameState) -> bool {
        let (starting, other) = counts(game);
        match game.winner() {
            None => true,
            Some(winner) if winner == game.starting_mark() => starting == other + 1,
            Some(_) => starting == other,
        }
    }

    fn description() -> &'static str {
        "Winner placed the last mark"
    }
}
