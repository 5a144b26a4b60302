//! The match loop: two agents, one game, alternating until it ends.

use crate::{Agent, Identity, MatchError};
use othello_rules::{Action, Color, Game, Outcome};
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Whether a match can keep going after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Finished(Outcome),
}

/// A game between two agents, owned by whoever drives it.
pub struct Match {
    game: Game,
    black: Agent,
    white: Agent,
    history: Vec<Game>,
    observer: Option<Box<dyn Write>>,
}

impl Match {
    /// Seat `black` and `white` at `game`.
    pub fn new(game: Game, mut black: Agent, mut white: Agent) -> Self {
        black.set_color(Color::Black);
        white.set_color(Color::White);
        Self {
            game,
            black,
            white,
            history: vec![game],
            observer: None,
        }
    }

    /// Render the board and every action to `out` as the match is played.
    pub fn with_observer(mut self, out: impl Write + 'static) -> Self {
        self.observer = Some(Box::new(out));
        self
    }

    /// The current state.
    pub fn game(&self) -> Game {
        self.game
    }

    /// Every state so far, starting with the initial one.
    pub fn history(&self) -> &[Game] {
        &self.history
    }

    pub fn agent(&self, color: Color) -> &Agent {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    fn agent_mut(&mut self, color: Color) -> &mut Agent {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    fn observe(&mut self, args: fmt::Arguments) -> Result<(), MatchError> {
        if let Some(out) = self.observer.as_mut() {
            out.write_fmt(args)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Play one action: a pass if the side to move is stuck, otherwise its agent's choice.
    /// On error the state is unchanged, so the step can be retried.
    pub fn step(&mut self) -> Result<Status, MatchError> {
        if let Some(outcome) = self.game.outcome() {
            return Ok(Status::Finished(outcome));
        }

        let game = self.game;
        let turn = game.turn();
        self.observe(format_args!("\n{}\n", game))?;

        let moves = game.legal_moves();
        let action = if moves.is_empty() {
            Action::Pass
        } else {
            let board = game.board();
            Action::Place(self.agent_mut(turn).choose_move(&board, &moves)?)
        };

        let next = game.apply(action)?;
        debug!(color = %turn, %action, placed = next.board().placed(), "ply");
        let mover = self.agent(turn).identity().full_name();
        self.observe(format_args!("{} plays {}\n", mover, action))?;

        self.game = next;
        self.history.push(next);

        Ok(match next.outcome() {
            Some(outcome) => Status::Finished(outcome),
            None => Status::InProgress,
        })
    }

    /// Step until the game ends.
    pub fn run(mut self) -> Result<MatchReport, MatchError> {
        let outcome = loop {
            if let Status::Finished(outcome) = self.step()? {
                break outcome;
            }
        };

        let report = MatchReport {
            outcome,
            count: self.game.board().count(),
            plies: self.history.len() - 1,
            black: self.black.identity().clone(),
            white: self.white.identity().clone(),
        };
        info!(%report, plies = report.plies, "match finished");
        let final_state = self.game;
        self.observe(format_args!("\n{}\n{}\n", final_state, report))?;

        Ok(report)
    }
}

/// The result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub outcome: Outcome,
    /// Final `(black, white)` disk counts.
    pub count: (u8, u8),
    /// Actions played, passes included.
    pub plies: usize,
    pub black: Identity,
    pub white: Identity,
}

impl MatchReport {
    /// The winning agent, or `None` for a draw.
    pub fn winner(&self) -> Option<&Identity> {
        match self.outcome.winner()? {
            Color::Black => Some(&self.black),
            Color::White => Some(&self.white),
        }
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.count;
        match self.outcome {
            Outcome::Winner(color) => write!(
                f,
                "{} wins as {}, {}-{}",
                self.winner().map(Identity::full_name).unwrap_or_default(),
                color,
                black.max(white),
                black.min(white)
            ),
            Outcome::Draw => write!(f, "Draw, {}-{}", black, white),
        }
    }
}
