//! The set of legal moves out of a position.

use crate::{Board, Coordinate};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Maps every legal destination for the side to move to the board it produces.
///
/// Resulting boards are computed eagerly: strategies score positions, not squares.
/// Keys are kept sorted so that seeded strategies replay identically.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LegalMoveSet {
    moves: BTreeMap<Coordinate, Board>,
}

impl LegalMoveSet {
    /// Scan the frontier of `board` and keep every square that captures.
    pub fn generate(board: &Board) -> Self {
        let moves = board
            .reachable()
            .squares()
            .filter(|&dest| board.is_legal(dest))
            .filter_map(|dest| board.apply(dest).ok().map(|next| (dest, next)))
            .collect();
        Self { moves }
    }

    /// Returns whether the side to move has no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn contains(&self, dest: Coordinate) -> bool {
        self.moves.contains_key(&dest)
    }

    /// The board reached by moving to `dest`, if that move is legal.
    pub fn get(&self, dest: Coordinate) -> Option<&Board> {
        self.moves.get(&dest)
    }

    /// Legal destinations, in row-major order.
    pub fn destinations(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Coordinate, Board> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a LegalMoveSet {
    type Item = (&'a Coordinate, &'a Board);
    type IntoIter = btree_map::Iter<'a, Coordinate, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LegalMoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .destinations()
            .map(|dest| dest.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn opening_move_set() {
        let board = Board::initial();
        let moves = LegalMoveSet::generate(&board);
        assert_eq!(moves.len(), 4);
        assert_eq!(moves.to_string(), "[d6, c5, f4, e3]");

        for (&dest, next) in &moves {
            assert_eq!(Some(*next), board.apply(dest).ok());
            assert_eq!(next.count(), (4, 1));
        }
    }

    #[test]
    fn frontier_square_without_capture_is_excluded() {
        let board = Board::initial();
        let c3 = Coordinate::from_coords(5, 2);
        assert_eq!(board.get(c3), Cell::Reachable);
        assert!(!LegalMoveSet::generate(&board).contains(c3));
    }

    #[test]
    fn no_moves_for_a_side_without_disks() {
        let board: Board = format!("{}X{}X", ".".repeat(27), ".".repeat(36))
            .parse()
            .unwrap();
        let moves = LegalMoveSet::generate(&board);
        assert!(moves.is_empty());
        assert_eq!(moves.to_string(), "[]");
    }
}
