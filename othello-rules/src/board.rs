//! One immutable Othello position and the rules that act on it.
//!
//! Disks and the move frontier are stored as [`Bitboard`]s; cells are derived on
//! demand. Every move produces a new [`Board`] and leaves the old one untouched.

use crate::bitboard::Bitboard;
use crate::{utils, Coordinate, Direction, RulesError, DIRECTIONS, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt;
use tracing::trace;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// The character used for this side's disks in board text.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

/// The state of one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Empty, with at least one occupied neighbor.
    Reachable,
    Black,
    White,
}

impl Cell {
    /// The color of the disk on this square, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Reachable => None,
        }
    }

    pub fn is_occupied(self) -> bool {
        self.color().is_some()
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Reachable => '*',
            Cell::Black => Color::Black.symbol(),
            Cell::White => Color::White.symbol(),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Opponent disks crossed while walking one direction from a destination.
/// A walk visits at most seven squares before leaving the board.
pub type Run = ArrayVec<[Coordinate; 7]>;

/// A complete Othello position: disks, frontier, side to move and disk count.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    reachable: Bitboard,
    turn: Color,
    placed: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// The starting position: d4 and e5 black, d5 and e4 white, black to move.
    pub fn initial() -> Self {
        let black = [(3, 4), (4, 3)]
            .iter()
            .map(|&(row, col)| Coordinate::from_coords(row, col))
            .collect();
        let white = [(3, 3), (4, 4)]
            .iter()
            .map(|&(row, col)| Coordinate::from_coords(row, col))
            .collect();
        Self::from_disks(black, white, Color::Black)
    }

    /// Build a position from its disks, deriving the frontier and disk count.
    /// `black` and `white` must not overlap.
    pub fn from_disks(black: Bitboard, white: Bitboard, turn: Color) -> Self {
        debug_assert!((black & white).is_empty());
        let occupied = black | white;
        Self {
            black,
            white,
            reachable: occupied.neighbors() & !occupied,
            turn,
            placed: occupied.count_occupied(),
        }
    }

    /// The side to move.
    #[inline]
    pub fn turn(self) -> Color {
        self.turn
    }

    /// The number of disks on the board.
    #[inline]
    pub fn placed(self) -> u8 {
        self.placed
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.placed as usize == NUM_SPACES
    }

    /// Returns `(black disks, white disks)`.
    #[inline]
    pub fn count(self) -> (u8, u8) {
        (self.black.count_occupied(), self.white.count_occupied())
    }

    /// The squares holding `color`'s disks.
    #[inline]
    pub fn disks(self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.black | self.white
    }

    /// Empty squares next to at least one disk: the only candidates for a move.
    #[inline]
    pub fn reachable(self) -> Bitboard {
        self.reachable
    }

    /// The state of one square.
    pub fn get(self, coord: Coordinate) -> Cell {
        if self.black.contains(coord) {
            Cell::Black
        } else if self.white.contains(coord) {
            Cell::White
        } else if self.reachable.contains(coord) {
            Cell::Reachable
        } else {
            Cell::Empty
        }
    }

    /// The state of the square at `(row, col)`, or [`RulesError::OutOfRange`].
    pub fn try_at(self, row: usize, col: usize) -> Result<Cell, RulesError> {
        Ok(self.get(Coordinate::new(row, col)?))
    }

    /// The state of the square at `(row, col)`. Panics if it is off the board.
    pub fn at(self, row: usize, col: usize) -> Cell {
        self.get(Coordinate::from_coords(row, col))
    }

    /// All 64 cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        Coordinate::all().map(move |coord| self.get(coord))
    }

    /// The opponent disks the side to move would capture walking from `origin` along `dir`.
    /// `None` unless the walk crosses at least one opponent disk and then reaches one
    /// of the mover's own disks before an empty square or the edge.
    pub fn captures_toward(self, origin: Coordinate, dir: Direction) -> Option<Run> {
        let own = self.disks(self.turn);
        let opponent = self.disks(!self.turn);

        let mut run = Run::new();
        let mut cursor = origin + dir;
        while let Some(coord) = cursor {
            if opponent.contains(coord) {
                run.push(coord);
                cursor = coord + dir;
            } else if own.contains(coord) {
                return Some(run).filter(|run| !run.is_empty());
            } else {
                return None;
            }
        }

        None
    }

    /// Every disk a placement at `dest` would flip, across all eight directions.
    pub fn flips(self, dest: Coordinate) -> Bitboard {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.captures_toward(dest, dir))
            .flatten()
            .collect()
    }

    /// Whether the side to move may place a disk at `dest`.
    pub fn is_legal(self, dest: Coordinate) -> bool {
        self.reachable.contains(dest)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.captures_toward(dest, dir).is_some())
    }

    /// Place a disk for the side to move, returning the resulting position.
    pub fn apply(self, dest: Coordinate) -> Result<Self, RulesError> {
        let flips = if self.reachable.contains(dest) {
            self.flips(dest)
        } else {
            Bitboard::EMPTY
        };
        if flips.is_empty() {
            return Err(RulesError::IllegalMove { square: dest });
        }

        let placed = Bitboard::from(dest);
        let (black, white) = match self.turn {
            Color::Black => (self.black | placed | flips, self.white ^ flips),
            Color::White => (self.black ^ flips, self.white | placed | flips),
        };
        let occupied = black | white;

        trace!(
            color = %self.turn,
            square = %dest,
            flipped = flips.count_occupied(),
            "applied move"
        );

        Ok(Self {
            black,
            white,
            reachable: (self.reachable | placed.neighbors()) & !occupied,
            turn: !self.turn,
            placed: self.placed + 1,
        })
    }

    /// The same position with the other side to move.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            turn: !self.turn,
            ..self
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::symbol), f)?;
        write!(f, "\n{} ({}) to move", self.turn, self.turn.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 65 symbols (64 cells and the side to move), found {}", found)]
    WrongLength { found: usize },

    #[display(fmt = "invalid cell symbol '{}'", found)]
    InvalidCell { found: char },

    #[display(fmt = "invalid side to move '{}'", found)]
    InvalidTurn { found: char },
}

/// Parse a position: 64 cells in row-major order (`X` black, `O` white,
/// `.`, `-` or `*` empty) then the side to move (`X` or `O`). Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES + 1 {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        for (coord, &symbol) in Coordinate::all().zip(&symbols) {
            match symbol.to_ascii_uppercase() {
                'X' => black |= Bitboard::from(coord),
                'O' => white |= Bitboard::from(coord),
                '.' | '-' | '*' => {}
                _ => return Err(ParseBoardError::InvalidCell { found: symbol }),
            }
        }

        let turn = match symbols[NUM_SPACES].to_ascii_uppercase() {
            'X' => Color::Black,
            'O' => Color::White,
            found => return Err(ParseBoardError::InvalidTurn { found }),
        };

        Ok(Self::from_disks(black, white, turn))
    }
}
