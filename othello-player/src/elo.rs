//! Round-robin series between archetypes, rated on a logistic (Elo) scale.
//!
//! Each entrant plays the next one in the list `repeat` times, alternating colors.
//! Ratings are then chained: the first entrant is anchored and every following
//! rating is fitted from its score fraction against the previous entrant.

use crate::{Agent, Archetype, Match, MatchError, MatchReport};
use derive_more::{Display, Error};
use othello_rules::Game;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::info;

/// Score fractions are clamped this far from 0 and 1 so every rating is finite.
const FRACTION_MARGIN: f64 = 1e-4;

#[derive(Debug, Display, Error)]
pub enum TournamentError {
    #[display(fmt = "interactive agents cannot enter a tournament")]
    InteractiveEntrant,

    #[display(fmt = "a tournament needs at least 2 entrants, found {}", found)]
    TooFewEntrants { found: usize },

    #[display(fmt = "each series needs at least one game")]
    NoGames,

    #[display(fmt = "{}", _0)]
    Match(MatchError),
}

impl From<MatchError> for TournamentError {
    fn from(err: MatchError) -> Self {
        TournamentError::Match(err)
    }
}

/// Parameters of the logistic rating curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingScale {
    /// Rating given to the first entrant.
    pub anchor: f64,
    /// Rating difference at which the stronger side scores `base` times the weaker.
    pub scale: f64,
    pub base: f64,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            anchor: 100.0,
            scale: 400.0,
            base: 10.0,
        }
    }
}

/// Chain ratings from the anchor: `fractions[i]` is the score fraction of
/// entrant `i + 1` against entrant `i`.
pub fn chain_ratings(fractions: &[f64], scale: RatingScale) -> Vec<f64> {
    let mut current = scale.anchor;
    let mut ratings = vec![current];
    for &fraction in fractions {
        let p = fraction.clamp(FRACTION_MARGIN, 1.0 - FRACTION_MARGIN);
        current -= scale.scale * (1.0 / p - 1.0).log(scale.base);
        ratings.push(current);
    }
    ratings
}

/// Points scored in one series: 1 per win, 0.5 per draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairScore {
    pub first: Archetype,
    pub second: Archetype,
    pub games: u32,
    pub first_points: f64,
    pub second_points: f64,
}

impl PairScore {
    fn new(first: Archetype, second: Archetype) -> Self {
        Self {
            first,
            second,
            games: 0,
            first_points: 0.0,
            second_points: 0.0,
        }
    }

    /// The second entrant's share of the points.
    pub fn second_fraction(&self) -> f64 {
        self.second_points / self.games as f64
    }
}

/// The results of a finished tournament.
#[derive(Clone, Debug, PartialEq)]
pub struct Standings {
    pub entrants: Vec<Archetype>,
    pub series: Vec<PairScore>,
    /// One rating per entrant, truncated to whole points.
    pub ratings: Vec<i32>,
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.series {
            writeln!(
                f,
                "{:>10} vs {:<10} {:>6.1} - {:<6.1} ({} games)",
                pair.first, pair.second, pair.first_points, pair.second_points, pair.games
            )?;
        }
        writeln!(f, "\nRatings:")?;
        for (entrant, rating) in self.entrants.iter().zip(&self.ratings) {
            writeln!(f, "{:>10} ({}) {:>6}", entrant, entrant.label(), rating)?;
        }
        Ok(())
    }
}

/// A list of computer archetypes and how many games each adjacent pair plays.
#[derive(Clone, Debug)]
pub struct Tournament {
    entrants: Vec<Archetype>,
    repeat: u32,
    scale: RatingScale,
    seed: Option<u64>,
}

impl Tournament {
    pub fn new(entrants: Vec<Archetype>, repeat: u32) -> Result<Self, TournamentError> {
        if entrants.len() < 2 {
            return Err(TournamentError::TooFewEntrants {
                found: entrants.len(),
            });
        }
        if entrants.iter().any(|entrant| entrant.is_interactive()) {
            return Err(TournamentError::InteractiveEntrant);
        }
        if repeat == 0 {
            return Err(TournamentError::NoGames);
        }

        Ok(Self {
            entrants,
            repeat,
            scale: RatingScale::default(),
            seed: None,
        })
    }

    pub fn with_scale(mut self, scale: RatingScale) -> Self {
        self.scale = scale;
        self
    }

    /// Seed every agent of every game from `seed`, making the whole tournament reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn total_games(&self) -> u64 {
        (self.entrants.len() as u64 - 1) * self.repeat as u64
    }

    /// Play every series, calling `on_game` after each game.
    pub fn run<F>(&self, mut on_game: F) -> Result<Standings, TournamentError>
    where
        F: FnMut(&MatchReport),
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut series = Vec::with_capacity(self.entrants.len() - 1);
        for pair in self.entrants.windows(2) {
            info!(first = %pair[0], second = %pair[1], games = self.repeat, "series");
            series.push(self.play_series(pair[0], pair[1], &mut rng, &mut on_game)?);
        }

        let fractions: Vec<f64> = series.iter().map(PairScore::second_fraction).collect();
        let ratings = chain_ratings(&fractions, self.scale)
            .into_iter()
            .map(|rating| rating as i32)
            .collect();

        Ok(Standings {
            entrants: self.entrants.clone(),
            series,
            ratings,
        })
    }

    fn play_series<F>(
        &self,
        first: Archetype,
        second: Archetype,
        rng: &mut StdRng,
        on_game: &mut F,
    ) -> Result<PairScore, MatchError>
    where
        F: FnMut(&MatchReport),
    {
        let mut score = PairScore::new(first, second);

        for game in 0..self.repeat {
            let first_agent = Agent::from_archetype(1, first, Some(rng.gen()));
            let second_agent = Agent::from_archetype(2, second, Some(rng.gen()));
            let (black, white) = if game % 2 == 0 {
                (first_agent, second_agent)
            } else {
                (second_agent, first_agent)
            };

            let report = Match::new(Game::default(), black, white).run()?;
            match report.winner().map(|identity| identity.number) {
                Some(1) => score.first_points += 1.0,
                Some(_) => score.second_points += 1.0,
                None => {
                    score.first_points += 0.5;
                    score.second_points += 0.5;
                }
            }
            score.games += 1;
            on_game(&report);
        }

        Ok(score)
    }
}
