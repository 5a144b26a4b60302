//! Errors raised while agents play.

use derive_more::{Display, Error};
use othello_rules::{Color, Coordinate, ParseCoordinateError, RulesError};
use std::io;

/// Why an agent could not produce a move.
#[derive(Debug, Display, Error)]
pub enum AgentError {
    #[display(fmt = "{}; enter a square like 'd3'", _0)]
    Parse(ParseCoordinateError),

    #[display(fmt = "{} is not a legal move (legal: {})", square, legal)]
    IllegalSquare { square: Coordinate, legal: String },

    #[display(fmt = "input closed before a move was chosen")]
    InputClosed,

    /// The caller asked for a move when the side to move had to pass.
    #[display(fmt = "no legal move to choose from")]
    NoMoves,

    #[display(fmt = "agent seated as {} was asked to move for {}", seat, turn)]
    WrongTurn { seat: Color, turn: Color },

    #[display(fmt = "I/O error: {}", _0)]
    Io(io::Error),
}

impl From<ParseCoordinateError> for AgentError {
    fn from(err: ParseCoordinateError) -> Self {
        AgentError::Parse(err)
    }
}

impl From<io::Error> for AgentError {
    fn from(err: io::Error) -> Self {
        AgentError::Io(err)
    }
}

/// Why a match could not advance.
#[derive(Debug, Display, Error)]
pub enum MatchError {
    #[display(fmt = "{}", _0)]
    Rules(RulesError),

    #[display(fmt = "{}", _0)]
    Agent(AgentError),

    #[display(fmt = "failed to write match output: {}", _0)]
    Output(io::Error),
}

impl From<RulesError> for MatchError {
    fn from(err: RulesError) -> Self {
        MatchError::Rules(err)
    }
}

impl From<AgentError> for MatchError {
    fn from(err: AgentError) -> Self {
        MatchError::Agent(err)
    }
}

impl From<io::Error> for MatchError {
    fn from(err: io::Error) -> Self {
        MatchError::Output(err)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}: {}", path, source)]
    FileRead { path: String, source: io::Error },

    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(toml::de::Error),

    #[display(fmt = "config validation error: {}", reason)]
    Validation { reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err)
    }
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ConfigError::Validation {
            reason: reason.into(),
        }
    }
}
