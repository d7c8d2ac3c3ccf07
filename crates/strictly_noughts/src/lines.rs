//! Winning line detection.

use crate::{Cell, Grid, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 winning lines as cell index triples, in search order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether every cell of `line` holds `mark`.
fn is_complete(grid: &Grid, line: &[usize; 3], mark: Mark) -> bool {
    line.iter()
        .all(|&index| grid.cell(index) == Some(Cell::Marked(mark)))
}

/// Finds the first completed line on the grid.
///
/// Lines are scanned in [`WINNING_LINES`] order and, for each line, marks
/// in `Cross`, `Naught` order. Returns the mark and the line's cells, or
/// `None` if no line is fully occupied by one mark.
#[instrument(level = "trace", skip(grid), fields(cells = %grid.symbols()))]
pub fn find_winning_line(grid: &Grid) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        for mark in Mark::iter() {
            if is_complete(grid, &line, mark) {
                return Some((mark, line));
            }
        }
    }

    None
}

/// Every completed line on the grid, in search order.
///
/// A grid reached through legal play has at most one winning mark, but
/// may have two lines for it (e.g. a row and a column through the last
/// cell played).
#[instrument(level = "trace", skip(grid), fields(cells = %grid.symbols()))]
pub fn completed_lines(grid: &Grid) -> Vec<(Mark, [usize; 3])> {
    WINNING_LINES
        .iter()
        .flat_map(|line| Mark::iter().map(move |mark| (mark, *line)))
        .filter(|(mark, line)| is_complete(grid, line, *mark))
        .collect()
}
