//! Immutable game state and the move transition.

use crate::invariants::{
    Invariant, InvariantSet, ReachableStateInvariants, SingleCellChangeInvariant,
};
use crate::{Cell, EngineError, Grid, Mark, Move, find_winning_line};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a game, derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameStatus {
    /// No mark has been placed yet.
    #[display("not started")]
    NotStarted,
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("won by {}", _0)]
    Won(Mark),
    /// Board is full with no winner.
    #[display("tied")]
    Tied,
}

impl GameStatus {
    /// Checks if this is a terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Tied)
    }
}

/// Snapshot of a game: a grid plus the mark that moved first.
///
/// Turn, winner and completion are pure functions of the grid. The
/// winning line is found once at construction, so queries are cheap and
/// always return the same answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "GameStateRecord", into = "GameStateRecord")]
pub struct GameState {
    grid: Grid,
    starting_mark: Mark,
    winning_line: Option<(Mark, [usize; 3])>,
}

/// Serialized form of [`GameState`]; derived data is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct GameStateRecord {
    grid: Grid,
    #[serde(default)]
    starting_mark: Mark,
}

impl From<GameStateRecord> for GameState {
    fn from(record: GameStateRecord) -> Self {
        Self::new(record.grid, record.starting_mark)
    }
}

impl From<GameState> for GameStateRecord {
    fn from(state: GameState) -> Self {
        Self {
            grid: state.grid,
            starting_mark: state.starting_mark,
        }
    }
}

impl GameState {
    /// Wraps a grid. No validation beyond the grid's own.
    pub fn new(grid: Grid, starting_mark: Mark) -> Self {
        Self {
            winning_line: find_winning_line(&grid),
            grid,
            starting_mark,
        }
    }

    /// Creates a fresh game where `starting_mark` moves first.
    pub fn with_starting_mark(starting_mark: Mark) -> Self {
        Self::new(Grid::new(), starting_mark)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the mark that moved first.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Whose turn it is.
    ///
    /// Assumes marks were placed strictly alternately: the starting mark
    /// moves whenever both marks have been placed equally often.
    pub fn current_mark(&self) -> Mark {
        if self.grid.cross_count() == self.grid.naught_count() {
            self.starting_mark
        } else {
            self.starting_mark.other()
        }
    }

    /// True iff all nine cells are empty.
    pub fn game_not_started(&self) -> bool {
        self.grid.empty_count() == 9
    }

    /// The mark occupying a full winning line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line.map(|(mark, _)| mark)
    }

    /// Cells of the winning line, or an empty slice without a winner.
    pub fn winning_cells(&self) -> &[usize] {
        match &self.winning_line {
            Some((_, cells)) => cells,
            None => &[],
        }
    }

    /// True iff there is no winner and no empty cell.
    pub fn tie(&self) -> bool {
        self.winner().is_none() && self.grid.empty_count() == 0
    }

    /// True iff the game has a winner or is tied.
    pub fn game_over(&self) -> bool {
        self.winner().is_some() || self.tie()
    }

    /// Current lifecycle phase.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Won(mark)
        } else if self.tie() {
            GameStatus::Tied
        } else if self.game_not_started() {
            GameStatus::NotStarted
        } else {
            GameStatus::InProgress
        }
    }

    /// Indices of cells a move could still target.
    ///
    /// Unlike [`Grid::empty_cells`], this is empty once the game is over,
    /// even if the grid still has empty cells.
    pub fn legal_cells(&self) -> Vec<usize> {
        if self.game_over() {
            return Vec::new();
        }
        self.grid.empty_cells()
    }

    /// Validates and applies a placement without logging.
    fn apply(&self, cell_index: usize) -> Result<(GameState, Move), EngineError> {
        if self.game_over() {
            return Err(EngineError::GameOver);
        }

        match self.grid.cell(cell_index) {
            None => return Err(EngineError::InvalidCell(cell_index)),
            Some(Cell::Marked(_)) => return Err(EngineError::CellOccupied(cell_index)),
            Some(Cell::Empty) => {}
        }

        let mark = self.current_mark();
        let after = GameState::new(self.grid.with_cell(cell_index, mark)?, self.starting_mark);
        let mv = Move::new(mark, cell_index, self.clone(), after.clone());

        debug_assert!(
            SingleCellChangeInvariant::holds(&mv),
            "{}",
            <SingleCellChangeInvariant as Invariant<Move>>::description()
        );

        Ok((after, mv))
    }

    /// Places the current mark at `cell_index`.
    ///
    /// Returns the new state together with the [`Move`] linking this state
    /// to it. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// - `EngineError::GameOver` if the game already has a winner or is tied
    /// - `EngineError::InvalidCell` if `cell_index` is outside 0..=8
    /// - `EngineError::CellOccupied` if the target cell is not empty
    #[instrument(skip(self), fields(mark = %self.current_mark(), grid = %self.grid.symbols()))]
    pub fn make_move(&self, cell_index: usize) -> Result<(GameState, Move), EngineError> {
        match self.apply(cell_index) {
            Ok((after, mv)) => {
                debug!(after = %after.grid.symbols(), "Move applied");
                if after.game_over() {
                    info!(status = %after.status(), "Game finished");
                }
                Ok((after, mv))
            }
            Err(err) => {
                match &err {
                    EngineError::GameOver => {
                        warn!(status = %self.status(), "Rejected move on finished game")
                    }
                    EngineError::InvalidCell(_) => warn!("Rejected move outside the grid"),
                    EngineError::CellOccupied(_) => warn!("Rejected move onto occupied cell"),
                    other => warn!(error = %other, "Rejected move"),
                }
                Err(err)
            }
        }
    }

    /// Every legal move from this state, in ascending cell order.
    ///
    /// Empty once the game is over. Candidates are not logged as played.
    #[instrument(skip(self))]
    pub fn possible_moves(&self) -> Vec<Move> {
        self.legal_cells()
            .into_iter()
            .filter_map(|index| self.apply(index).ok().map(|(_, mv)| mv))
            .collect()
    }

    /// Checks that this state is reachable by alternating legal moves.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvariantViolation` listing every failed
    /// invariant.
    #[instrument(skip(self), fields(grid = %self.grid.symbols()))]
    pub fn validate(&self) -> Result<(), EngineError> {
        ReachableStateInvariants::check_all(self).map_err(|violations| {
            let descriptions: Vec<&str> =
                violations.iter().map(|v| v.description.as_str()).collect();
            warn!(?descriptions, "Unreachable game state");
            EngineError::InvariantViolation(descriptions.join("; "))
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Grid::new(), Mark::Cross)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(symbols: &str) -> GameState {
        GameState::new(Grid::from_symbols(symbols).unwrap(), Mark::Cross)
    }

    #[test]
    fn test_fresh_game() {
        let game = GameState::default();
        assert!(game.game_not_started());
        assert_eq!(game.current_mark(), Mark::Cross);
        assert!(!game.game_over());
        assert_eq!(game.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_naught_starting() {
        let game = GameState::with_starting_mark(Mark::Naught);
        assert_eq!(game.current_mark(), Mark::Naught);
        let (game, _) = game.make_move(0).unwrap();
        assert_eq!(game.current_mark(), Mark::Cross);
        assert_eq!(game.grid().symbols(), "O        ");
    }

    #[test]
    fn test_status_in_progress() {
        let game = state("X   O    ");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.status().is_terminal());
    }

    #[test]
    fn test_status_won_and_tied() {
        assert_eq!(state("XXXOO    ").status(), GameStatus::Won(Mark::Cross));
        assert_eq!(state("XOXXOOOXX").status(), GameStatus::Tied);
        assert!(GameStatus::Tied.is_terminal());
    }

    #[test]
    fn test_winning_cells_empty_without_winner() {
        let game = state("XO       ");
        assert_eq!(game.winner(), None);
        assert!(game.winning_cells().is_empty());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Mark::Naught).to_string(), "won by O");
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
    }

    #[test]
    fn test_possible_moves() {
        let game = state("XO       ");
        let moves = game.possible_moves();
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.mark() == Mark::Cross));
        assert_eq!(moves[0].cell_index(), 2);
        assert!(state("XXXOO    ").possible_moves().is_empty());
    }
}
