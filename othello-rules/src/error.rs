//! Errors raised by the rules engine.

use crate::{Color, Coordinate};
use derive_more::{Display, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// The square is not on the frontier, or placing there captures nothing.
    #[display(fmt = "illegal move at {}", square)]
    IllegalMove { square: Coordinate },

    /// A row or column outside [0, 7]. Legal candidates never produce this.
    #[display(fmt = "square ({}, {}) is off the board", row, col)]
    OutOfRange { row: usize, col: usize },

    #[display(fmt = "{} cannot pass while holding a legal move", color)]
    PassNotAllowed { color: Color },

    #[display(fmt = "the game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_error_display() {
        let err = RulesError::IllegalMove {
            square: Coordinate::from_coords(5, 3),
        };
        assert_eq!(err.to_string(), "illegal move at d3");

        let err = RulesError::OutOfRange { row: 8, col: 2 };
        assert_eq!(err.to_string(), "square (8, 2) is off the board");

        let err = RulesError::PassNotAllowed {
            color: Color::White,
        };
        assert_eq!(err.to_string(), "White cannot pass while holding a legal move");
    }
}
