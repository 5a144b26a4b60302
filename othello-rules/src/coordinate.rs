//! Code for working with [`Coordinate`]s on the Othello board.

use crate::error::RulesError;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::ops::Add;

/// Column letters, left to right.
const FILES: &str = "abcdefgh";

/// Row digits, top to bottom: row 0 is rank 8.
const RANKS: &str = "87654321";

/// A square on the Othello board, as a 0-based (row, column) pair.
/// Always in bounds: every constructor checks the range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// A single step towards one of the eight neighbors of a square.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// The eight nonzero directions with components in {-1, 0, 1}.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

impl Coordinate {
    /// Build a coordinate, or fail with [`RulesError::OutOfRange`] if it is off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, RulesError> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfRange { row, col })
        }
    }

    /// Build a coordinate from values the caller knows are on the board.
    /// Panics otherwise.
    pub fn from_coords(row: usize, col: usize) -> Self {
        match Self::new(row, col) {
            Ok(coord) => coord,
            Err(err) => panic!("{}", err),
        }
    }

    /// Convert from a row-major square index (0 is a8, 63 is h1).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self {
            row: index / EDGE_LENGTH as u8,
            col: index % EDGE_LENGTH as u8,
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Every square on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_SPACES as u8).map(Self::from_index)
    }

    /// The squares adjacent to this one (3 for a corner, 5 on an edge, 8 otherwise).
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        DIRECTIONS.iter().filter_map(move |&dir| self + dir)
    }
}

/// Step one square in a direction. `None` once the step leaves the board.
impl Add<Direction> for Coordinate {
    type Output = Option<Coordinate>;

    #[inline]
    fn add(self, dir: Direction) -> Option<Coordinate> {
        let row = self.row as i8 + dir.d_row;
        let col = self.col as i8 + dir.d_col;
        if in_bounds(row) && in_bounds(col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

#[inline]
fn in_bounds(value: i8) -> bool {
    (0..EDGE_LENGTH as i8).contains(&value)
}

/// Convert this [`Coordinate`] into square notation ("d3").
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = FILES.chars().nth(self.col()).ok_or(fmt::Error)?;
        let rank = RANKS.chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(file)?;
        f.write_char(rank)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid square (expected a letter a-h followed by a digit 1-8)")]
pub struct ParseCoordinateError;

/// Build a [`Coordinate`] from square notation ("d3"), ignoring case.
impl std::str::FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParseCoordinateError)?.to_ascii_lowercase();
        let col = FILES.find(file).ok_or(ParseCoordinateError)?;
        let rank = chars.next().ok_or(ParseCoordinateError)?;
        let row = RANKS.find(rank).ok_or(ParseCoordinateError)?;

        if chars.next().is_some() {
            return Err(ParseCoordinateError);
        }

        Ok(Self::from_coords(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn coordinate_index_round_trips_corners() {
        assert_eq!(Coordinate::from_index(0), Coordinate::from_coords(0, 0));
        assert_eq!(Coordinate::from_index(63), Coordinate::from_coords(7, 7));
        assert_eq!(Coordinate::from_coords(3, 4).to_index(), 28);
    }

    #[test]
    fn coordinate_new_rejects_off_board() {
        assert_eq!(
            Coordinate::new(0, 8),
            Err(RulesError::OutOfRange { row: 0, col: 8 })
        );
        assert_eq!(
            Coordinate::new(8, 0),
            Err(RulesError::OutOfRange { row: 8, col: 0 })
        );
        assert!(Coordinate::new(7, 7).is_ok());
    }

    #[test]
    #[should_panic]
    fn coordinate_from_coords_fail() {
        Coordinate::from_coords(0, 8);
    }

    #[test]
    fn coordinate_add_direction() {
        let d4 = Coordinate::from_coords(4, 3);
        assert_eq!(d4 + Direction::new(-1, 1), Some(Coordinate::from_coords(3, 4)));
        assert_eq!(Coordinate::from_coords(0, 0) + Direction::new(-1, 0), None);
        assert_eq!(Coordinate::from_coords(7, 7) + Direction::new(0, 1), None);
    }

    #[test]
    fn coordinate_neighbors() {
        assert_eq!(Coordinate::from_coords(0, 0).neighbors().count(), 3);
        assert_eq!(Coordinate::from_coords(0, 4).neighbors().count(), 5);
        assert_eq!(Coordinate::from_coords(3, 3).neighbors().count(), 8);
    }

    #[test]
    fn coordinate_from_str_success() {
        assert_eq!(Coordinate::from_str("d3"), Ok(Coordinate::from_coords(5, 3)));
        assert_eq!(Coordinate::from_str("A8"), Ok(Coordinate::from_coords(0, 0)));
        assert_eq!(Coordinate::from_str("h1"), Ok(Coordinate::from_coords(7, 7)));
    }

    #[test]
    fn coordinate_from_str_fail() {
        assert_eq!(Coordinate::from_str(""), Err(ParseCoordinateError));
        assert_eq!(Coordinate::from_str("a"), Err(ParseCoordinateError));
        assert_eq!(Coordinate::from_str("a12"), Err(ParseCoordinateError));
        assert_eq!(Coordinate::from_str("aa"), Err(ParseCoordinateError));
        assert_eq!(Coordinate::from_str("a9"), Err(ParseCoordinateError));
        assert_eq!(Coordinate::from_str("a0"), Err(ParseCoordinateError));
        assert_eq!(Coordinate::from_str("i5"), Err(ParseCoordinateError));
    }

    #[test]
    fn coordinate_to_str() {
        assert_eq!(Coordinate::from_coords(0, 0).to_string(), "a8");
        assert_eq!(Coordinate::from_coords(7, 7).to_string(), "h1");
        assert_eq!(Coordinate::from_str("E2").unwrap().to_string(), "e2");
        assert_eq!(Coordinate::from_str("f6").unwrap().to_string(), "f6");
    }
}
