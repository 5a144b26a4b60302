//! `othello-rules` is the rules engine for 8x8 Othello.
//!
//! The crate is organized in three layers:
//!
//!  - [`Coordinate`] and [`bitboard`] are the value types for squares and sets of squares.
//!  - [`Board`] is one immutable position: it owns move legality and the flip rule.
//!    [`LegalMoveSet`] maps every legal destination to the board it produces.
//!  - [`Game`] adds pass handling and terminal detection on top of [`Board`].
//!    It is what a match driver should use.

pub mod bitboard;
pub mod test_utils;

mod board;
mod coordinate;
mod error;
mod game;
mod moves;
mod utils;

pub use board::*;
pub use coordinate::*;
pub use error::*;
pub use game::*;
pub use moves::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
