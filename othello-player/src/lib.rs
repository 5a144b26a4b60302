//! `othello-player` puts agents at an [`othello_rules`] board.
//!
//!  - [`Agent`] is the strategy interface: one struct, one [`Strategy`] per archetype.
//!  - [`heuristic`] holds the one-ply scoring functions the greedy strategies maximize.
//!  - [`Match`] alternates two agents over a [`Game`](othello_rules::Game) until it ends.
//!  - [`elo`] runs round-robin series between archetypes and fits Elo ratings.

pub mod config;
pub mod elo;
pub mod heuristic;

mod agent;
mod console;
mod error;
mod play;

pub use agent::*;
pub use console::*;
pub use error::*;
pub use play::*;
