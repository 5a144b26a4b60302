//! The strategy interface shared by every kind of player.

use crate::heuristic::Heuristic;
use crate::{AgentError, Console};
use derive_more::{Display, Error};
use itertools::Itertools;
use othello_rules::{Board, Color, Coordinate, LegalMoveSet};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// The kinds of agent that can be seated at a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Human,
    Random,
    Greedy,
    Positional,
    Table,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Human,
        Archetype::Random,
        Archetype::Greedy,
        Archetype::Positional,
        Archetype::Table,
    ];

    /// The label shown next to an agent's name.
    pub fn label(self) -> &'static str {
        match self {
            Archetype::Human => "Human",
            Archetype::Random => "Level 0 AI",
            Archetype::Greedy => "Level 1 AI",
            Archetype::Positional => "Level 2 AI",
            Archetype::Table => "Level 3 AI",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Archetype::Human => "human",
            Archetype::Random => "random",
            Archetype::Greedy => "greedy",
            Archetype::Positional => "positional",
            Archetype::Table => "table",
        }
    }

    pub fn is_interactive(self) -> bool {
        self == Archetype::Human
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unknown agent '{}' (expected human, random, greedy, positional or table)", input)]
pub struct ParseArchetypeError {
    input: String,
}

/// Parse an archetype by name, or by level: `h` for human, `0`-`3` for the AIs.
impl std::str::FromStr for Archetype {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let archetype = match lowered.as_str() {
            "h" => Archetype::Human,
            "0" => Archetype::Random,
            "1" => Archetype::Greedy,
            "2" => Archetype::Positional,
            "3" => Archetype::Table,
            name => Archetype::ALL
                .iter()
                .copied()
                .find(|archetype| archetype.key() == name)
                .ok_or_else(|| ParseArchetypeError {
                    input: s.to_string(),
                })?,
        };
        Ok(archetype)
    }
}

/// Who an agent is. Fixed when the agent is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub number: u8,
    pub name: String,
    pub archetype: Archetype,
}

impl Identity {
    pub fn new(number: u8, name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            number,
            name: name.into(),
            archetype,
        }
    }

    /// e.g. `"Player 1: Greedy (Level 1 AI)"`.
    pub fn full_name(&self) -> String {
        format!(
            "Player {}: {} ({})",
            self.number,
            self.name,
            self.archetype.label()
        )
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// How an agent picks among the legal moves.
#[derive(Debug)]
pub enum Strategy {
    /// Ask a person through a [`Console`].
    Interactive(Console),
    /// Any legal move, uniformly.
    Random,
    /// The move whose resulting board scores highest.
    Greedy(Heuristic),
}

impl Strategy {
    /// The strategy an archetype plays with. Humans use stdin and stdout.
    pub fn for_archetype(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Human => Strategy::Interactive(Console::stdio()),
            Archetype::Random => Strategy::Random,
            Archetype::Greedy => Strategy::Greedy(Heuristic::DiskCount),
            Archetype::Positional => Strategy::Greedy(Heuristic::WeightedPosition),
            Archetype::Table => Strategy::Greedy(Heuristic::StaticTable),
        }
    }
}

/// A player: an identity, a color once seated, and a strategy.
#[derive(Debug)]
pub struct Agent {
    identity: Identity,
    color: Option<Color>,
    strategy: Strategy,
    rng: StdRng,
}

impl Agent {
    pub fn new(identity: Identity, strategy: Strategy, rng: StdRng) -> Self {
        Self {
            identity,
            color: None,
            strategy,
            rng,
        }
    }

    /// An agent of the given archetype, named after it.
    /// `seed` makes its random choices reproducible.
    pub fn from_archetype(number: u8, archetype: Archetype, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let name = match archetype {
            Archetype::Human => "Human",
            Archetype::Random => "Random",
            Archetype::Greedy => "Greedy",
            Archetype::Positional => "Positional",
            Archetype::Table => "Table",
        };
        Self::new(
            Identity::new(number, name, archetype),
            Strategy::for_archetype(archetype),
            rng,
        )
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The color this agent plays, once seated.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Seat the agent. A seated agent keeps its color.
    pub fn set_color(&mut self, color: Color) {
        assert!(
            self.color.map_or(true, |seated| seated == color),
            "{} is already playing {:?}",
            self.identity.full_name(),
            self.color
        );
        self.color = Some(color);
    }

    /// Choose a destination from `moves`, which holds the legal moves out of `board`.
    /// The result is always a key of `moves`.
    pub fn choose_move(
        &mut self,
        board: &Board,
        moves: &LegalMoveSet,
    ) -> Result<Coordinate, AgentError> {
        if moves.is_empty() {
            return Err(AgentError::NoMoves);
        }
        let me = board.turn();
        if let Some(seat) = self.color {
            if seat != me {
                return Err(AgentError::WrongTurn { seat, turn: me });
            }
        }

        let dest = match &mut self.strategy {
            Strategy::Interactive(console) => Some(console.prompt_move(moves)?),
            Strategy::Random => moves.destinations().choose(&mut self.rng),
            Strategy::Greedy(heuristic) => {
                let heuristic = *heuristic;
                best_move(moves, &mut self.rng, |next| heuristic.score(next, me))
            }
        }
        .ok_or(AgentError::NoMoves)?;

        debug!(agent = %self.identity, square = %dest, "chose move");
        Ok(dest)
    }
}

/// The destination whose resulting board scores highest, ties broken uniformly at random.
/// `None` only if `moves` is empty.
pub fn best_move<R, F>(moves: &LegalMoveSet, rng: &mut R, mut score: F) -> Option<Coordinate>
where
    R: Rng + ?Sized,
    F: FnMut(&Board) -> i32,
{
    moves
        .iter()
        .max_set_by_key(|(_, next)| score(next))
        .into_iter()
        .map(|(&dest, _)| dest)
        .choose(rng)
}
