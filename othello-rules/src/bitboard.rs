//! Sets of squares packed into a single [`u64`].
//!
//! By convention, the MSB is the upper-left square (a8) and bits proceed in
//! row-major order, so bit `63 - index` holds the square with row-major `index`.

use crate::{utils, Coordinate, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Formatter};
use std::iter::FromIterator;

/// Holds a single bit per square of an Othello board.
/// Wraps [`u64`] for cheap set operations, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

// Masks clearing the column a shift wrapped into.
const NOT_FILE_A: u64 = 0x7f7f_7f7f_7f7f_7f7f;
const NOT_FILE_H: u64 = 0xfefe_fefe_fefe_fefe;

impl Bitboard {
    pub const EMPTY: Self = Self(0);

    /// Count the number of occupied squares in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, coord: Coordinate) -> bool {
        !(self & Self::from(coord)).is_empty()
    }

    /// Every square adjacent (in any of the 8 directions) to a square in this set.
    /// Squares of the set itself are only included when adjacent to another member.
    pub fn neighbors(self) -> Self {
        let bits = self.0;
        let east_west = ((bits >> 1) & NOT_FILE_A) | ((bits << 1) & NOT_FILE_H);
        let rows = bits | east_west;
        Self(east_west | (rows << 8) | (rows >> 8))
    }

    /// Iterate over the squares in this set, in row-major order.
    #[inline]
    pub fn squares(self) -> Squares {
        Squares(self.0)
    }
}

impl From<Coordinate> for Bitboard {
    #[inline]
    fn from(coord: Coordinate) -> Self {
        Self(1 << (NUM_SPACES as u8 - 1 - coord.to_index()))
    }
}

impl FromIterator<Coordinate> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |acc, coord| acc | Self::from(coord))
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            Coordinate::all().map(|coord| match self.contains(coord) {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator over the squares of a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.leading_zeros() as u8;
        self.0 &= !(1 << (NUM_SPACES as u8 - 1 - index));
        Some(Coordinate::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Squares {}
