//! Move records.
//!
//! A move is a domain event, not a side effect: it carries the mark that
//! was placed, where it went, and the snapshots on either side of it.
//! Drivers keep these around for undo and replay; the engine never does.

use crate::invariants::{Invariant, SingleCellChangeInvariant};
use crate::{EngineError, GameState, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single placement and the states immediately before and after it.
///
/// Deserialized records are checked against [`SingleCellChangeInvariant`];
/// a record whose states are not one legal placement apart is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "MoveRecord", into = "MoveRecord")]
pub struct Move {
    /// The mark placed.
    #[getter(skip)]
    mark: Mark,
    /// The cell written (0-8).
    #[getter(skip)]
    cell_index: usize,
    /// State before the placement.
    before_state: GameState,
    /// State after the placement.
    after_state: GameState,
}

/// Serialized form of [`Move`].
#[derive(Serialize, Deserialize)]
struct MoveRecord {
    mark: Mark,
    cell_index: usize,
    before_state: GameState,
    after_state: GameState,
}

impl TryFrom<MoveRecord> for Move {
    type Error = EngineError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        let mv = Self::new(
            record.mark,
            record.cell_index,
            record.before_state,
            record.after_state,
        );
        if !SingleCellChangeInvariant::holds(&mv) {
            let description = <SingleCellChangeInvariant as Invariant<Move>>::description();
            warn!(%mv, "Rejected inconsistent move record");
            return Err(EngineError::InvariantViolation(description.to_string()));
        }
        Ok(mv)
    }
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        Self {
            mark: mv.mark,
            cell_index: mv.cell_index,
            before_state: mv.before_state,
            after_state: mv.after_state,
        }
    }
}

impl Move {
    /// Creates a move record without checking it.
    pub(crate) fn new(
        mark: Mark,
        cell_index: usize,
        before_state: GameState,
        after_state: GameState,
    ) -> Self {
        Self {
            mark,
            cell_index,
            before_state,
            after_state,
        }
    }

    /// Returns the mark placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell written.
    pub fn cell_index(&self) -> usize {
        self.cell_index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell_index)
    }
}
