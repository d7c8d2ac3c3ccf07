//! Immutable 3x3 grid.

use crate::{EngineError, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
const CELL_COUNT: usize = 9;

/// A cell on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Serialization symbol: `' '`, `'X'` or `'O'`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(mark) => mark.symbol(),
        }
    }

    /// Parses a serialization symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Cell::Empty),
            other => Mark::from_symbol(other).map(Cell::Marked),
        }
    }
}

/// Immutable tic-tac-toe grid.
///
/// Cells are stored in row-major order (0-2 top row, 3-5 middle,
/// 6-8 bottom). Symbol counts are computed once at construction; any
/// change produces a new grid through [`Grid::with_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
    cross_count: usize,
    naught_count: usize,
    empty_count: usize,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    /// Creates a grid from exactly nine cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        let count = |target: Cell| cells.iter().filter(|c| **c == target).count();
        Self {
            cross_count: count(Cell::Marked(Mark::Cross)),
            naught_count: count(Cell::Marked(Mark::Naught)),
            empty_count: count(Cell::Empty),
            cells,
        }
    }

    /// Parses a 9-character symbol string such as `"XO X  O  "`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidGrid` if the string is not exactly nine
    /// characters or contains anything other than space, `X` or `O`.
    #[instrument]
    pub fn from_symbols(symbols: &str) -> Result<Self, EngineError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(EngineError::InvalidGrid(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                chars.len()
            )));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (slot, symbol) in cells.iter_mut().zip(chars) {
            *slot = Cell::from_symbol(symbol).ok_or_else(|| {
                EngineError::InvalidGrid(format!("illegal symbol {:?}", symbol))
            })?;
        }

        Ok(Self::from_cells(cells))
    }

    /// Returns a new grid with `index` set to `mark`.
    ///
    /// Occupancy is not checked here; that policy belongs to
    /// [`GameState::make_move`](crate::GameState::make_move).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidCell` if `index` is outside 0..=8.
    #[instrument(skip(self))]
    pub fn with_cell(&self, index: usize, mark: Mark) -> Result<Self, EngineError> {
        if index >= CELL_COUNT {
            return Err(EngineError::InvalidCell(index));
        }
        let mut cells = self.cells;
        cells[index] = Cell::Marked(mark);
        Ok(Self::from_cells(cells))
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|i| self.is_empty_at(*i)).collect()
    }

    /// Number of `X` cells.
    pub fn cross_count(&self) -> usize {
        self.cross_count
    }

    /// Number of `O` cells.
    pub fn naught_count(&self) -> usize {
        self.naught_count
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Number of cells holding `mark`.
    pub fn mark_count(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.cross_count,
            Mark::Naught => self.naught_count,
        }
    }

    /// The grid as its 9-character symbol string.
    pub fn symbols(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbols(s)
    }
}

impl TryFrom<&[Cell]> for Grid {
    type Error = EngineError;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| {
            EngineError::InvalidGrid(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            ))
        })?;
        Ok(Self::from_cells(cells))
    }
}

impl TryFrom<Vec<Cell>> for Grid {
    type Error = EngineError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::try_from(cells.as_slice())
    }
}

impl TryFrom<String> for Grid {
    type Error = EngineError;

    fn try_from(symbols: String) -> Result<Self, Self::Error> {
        Self::from_symbols(&symbols)
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.symbols()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].symbol())?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
