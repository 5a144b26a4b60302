//! Implements game-level Othello logic: passes and the end of the game.
//!
//! [`Board`] only knows about single placements. A [`Game`] also tracks
//! consecutive passes, so it can tell when play is over and who won.

use crate::{Board, Color, Coordinate, LegalMoveSet, RulesError};
use std::fmt;
use tracing::debug;

/// An action in an Othello game: pass or place a disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Coordinate),
    Pass,
}

impl From<Coordinate> for Action {
    fn from(dest: Coordinate) -> Self {
        Self::Place(dest)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(dest) => fmt::Display::fmt(dest, f),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl Outcome {
    /// Decide the result from the final disk counts.
    pub fn from_count((black, white): (u8, u8)) -> Self {
        use std::cmp::Ordering;
        match black.cmp(&white) {
            Ordering::Greater => Outcome::Winner(Color::Black),
            Ordering::Less => Outcome::Winner(Color::White),
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(color),
            Outcome::Draw => None,
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    passes: u8,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::initial())
    }
}

impl Game {
    /// Start a game from any position.
    pub fn new(board: Board) -> Self {
        Self { board, passes: 0 }
    }

    #[inline]
    pub fn board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn turn(self) -> Color {
        self.board.turn()
    }

    /// Returns whether the previous action was a pass.
    #[inline]
    pub fn just_passed(self) -> bool {
        self.passes > 0
    }

    /// Get the legal moves for the side to move.
    pub fn legal_moves(self) -> LegalMoveSet {
        LegalMoveSet::generate(&self.board)
    }

    /// The game ends when the board is full or both sides passed in a row.
    pub fn is_finished(self) -> bool {
        self.board.is_full() || self.passes >= 2
    }

    /// The result, once the game is finished.
    pub fn outcome(self) -> Option<Outcome> {
        if self.is_finished() {
            Some(Outcome::from_count(self.board.count()))
        } else {
            None
        }
    }

    /// Apply an action for the side to move.
    /// A pass is only accepted when the side to move has no legal placement.
    pub fn apply(self, action: Action) -> Result<Self, RulesError> {
        if self.is_finished() {
            return Err(RulesError::GameOver);
        }

        match action {
            Action::Place(dest) => {
                let board = self.board.apply(dest)?;
                Ok(Self { board, passes: 0 })
            }
            Action::Pass => {
                if !self.legal_moves().is_empty() {
                    return Err(RulesError::PassNotAllowed { color: self.turn() });
                }
                debug!(color = %self.turn(), "pass");
                Ok(Self {
                    board: self.board.pass(),
                    passes: self.passes + 1,
                })
            }
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if self.just_passed() {
            f.write_str("\n(Last move was a pass)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Black has no disks left to bracket with: both sides are stuck.
    const STUCK: &str = "
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXX.
        XXXXXX.O
        X";

    #[test]
    fn pass_rejected_when_moves_exist() {
        let game = Game::default();
        assert_eq!(
            game.apply(Action::Pass),
            Err(RulesError::PassNotAllowed {
                color: Color::Black
            })
        );
    }

    #[test]
    fn placement_resets_passes() {
        let game = Game::default();
        let next = game
            .apply(Action::Place(Coordinate::from_coords(2, 3)))
            .unwrap();
        assert!(!next.just_passed());
        assert_eq!(next.turn(), Color::White);
        assert!(!next.is_finished());
        assert_eq!(next.outcome(), None);
    }

    #[test]
    fn two_passes_end_the_game() {
        let board: Board = STUCK.parse().unwrap();
        let game = Game::new(board);
        assert!(game.legal_moves().is_empty());

        let game = game.apply(Action::Pass).unwrap();
        assert!(game.just_passed());
        assert!(!game.is_finished());
        assert!(game.legal_moves().is_empty());

        let game = game.apply(Action::Pass).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Black)));
        assert_eq!(game.apply(Action::Pass), Err(RulesError::GameOver));
    }

    #[test]
    fn full_board_is_finished() {
        let board: Board = format!("{}X", "XO".repeat(32)).parse().unwrap();
        let game = Game::new(board);
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(
            game.apply(Action::Place(Coordinate::from_coords(0, 0))),
            Err(RulesError::GameOver)
        );
    }

    #[test]
    fn outcome_from_count() {
        assert_eq!(Outcome::from_count((40, 24)), Outcome::Winner(Color::Black));
        assert_eq!(Outcome::from_count((10, 54)).winner(), Some(Color::White));
        assert_eq!(Outcome::from_count((32, 32)).winner(), None);
    }
}
