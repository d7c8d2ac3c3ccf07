//! First-class invariants for game states and moves.
//!
//! Invariants are logical properties that hold for anything produced by
//! alternating legal play. They are testable independently and back
//! [`GameState::validate`](crate::GameState::validate) for states that
//! arrive from outside the engine (hand-built grids, deserialized data).

/// A logical property that must hold for a given value.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given value.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same value type.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Records a violation when `I` does not hold.
fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

/// Converts collected violations into the set result.
fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod balanced_counts;
pub mod single_cell_change;
pub mod single_winner;

pub use balanced_counts::{BalancedCountsInvariant, WinnerMovedLastInvariant};
pub use single_cell_change::SingleCellChangeInvariant;
pub use single_winner::SingleWinnerInvariant;

/// Invariants every state reached by alternating legal moves satisfies.
pub type ReachableStateInvariants = (
    BalancedCountsInvariant,
    SingleWinnerInvariant,
    WinnerMovedLastInvariant,
);
