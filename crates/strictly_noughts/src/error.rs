//! Engine error types.

/// Error that can occur when building a grid or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The cell sequence is malformed (wrong length or illegal symbol).
    #[display("Invalid grid: {}", _0)]
    InvalidGrid(String),

    /// The cell index is outside 0..=8.
    #[display("Cell index {} is out of range (0-8)", _0)]
    InvalidCell(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The state could not have been reached by alternating legal moves.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::CellOccupied(4).to_string(),
            "Cell 4 is already occupied"
        );
        assert_eq!(
            EngineError::InvalidCell(9).to_string(),
            "Cell index 9 is out of range (0-8)"
        );
        assert_eq!(EngineError::GameOver.to_string(), "Game is already over");
    }
}
