//! TOML configuration for matches and tournaments.

use crate::elo::RatingScale;
use crate::{Archetype, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(rename = "match")]
    pub game: MatchConfig,
    pub tournament: TournamentConfig,
}

/// Who sits at the board for a single game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub black: Archetype,
    pub white: Archetype,
    /// Seed for the agents' random choices; fresh entropy when absent.
    pub seed: Option<u64>,
    /// Print the board before every ply.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            black: Archetype::Human,
            white: Archetype::Greedy,
            seed: None,
            verbose: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Entrants in rating order: each plays the next one.
    pub entrants: Vec<Archetype>,
    /// Games per series.
    pub repeat: u32,
    pub seed: Option<u64>,
    pub anchor: f64,
    pub scale: f64,
    pub base: f64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        let rating = RatingScale::default();
        TournamentConfig {
            entrants: vec![
                Archetype::Random,
                Archetype::Greedy,
                Archetype::Positional,
                Archetype::Table,
            ],
            repeat: 100,
            seed: None,
            anchor: rating.anchor,
            scale: rating.scale,
            base: rating.base,
        }
    }
}

impl TournamentConfig {
    pub fn rating_scale(&self) -> RatingScale {
        RatingScale {
            anchor: self.anchor,
            scale: self.scale,
            base: self.base,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text. Tournament settings are only
    /// checked by [`AppConfig::validate`], so `play` starts regardless.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the tournament settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tournament = &self.tournament;
        if tournament.entrants.len() < 2 {
            return Err(ConfigError::invalid(
                "tournament.entrants needs at least 2 agents",
            ));
        }
        if tournament.entrants.iter().any(|a| a.is_interactive()) {
            return Err(ConfigError::invalid(
                "tournament.entrants cannot include human",
            ));
        }
        if tournament.repeat == 0 {
            return Err(ConfigError::invalid("tournament.repeat must be > 0"));
        }
        if !tournament.anchor.is_finite() {
            return Err(ConfigError::invalid("tournament.anchor must be finite"));
        }
        if !(tournament.scale.is_finite() && tournament.scale > 0.0) {
            return Err(ConfigError::invalid("tournament.scale must be > 0"));
        }
        if !(tournament.base.is_finite() && tournament.base > 1.0) {
            return Err(ConfigError::invalid("tournament.base must be > 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.black, Archetype::Human);
        assert_eq!(config.tournament.rating_scale(), RatingScale::default());
    }

    #[test]
    fn parse_partial_toml() {
        let config = AppConfig::parse(
            r#"
            [match]
            black = "table"
            seed = 7

            [tournament]
            entrants = ["random", "positional"]
            repeat = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.game.black, Archetype::Table);
        assert_eq!(config.game.white, Archetype::Greedy);
        assert_eq!(config.game.seed, Some(7));
        assert_eq!(
            config.tournament.entrants,
            vec![Archetype::Random, Archetype::Positional]
        );
        assert_eq!(config.tournament.repeat, 10);
        assert_eq!(config.tournament.scale, 400.0);
    }

    #[test]
    fn parse_rejects_unknown_agent() {
        let err = AppConfig::parse("[match]\nblack = \"minimax\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn validate_rejects_human_entrant() {
        let config =
            AppConfig::parse("[tournament]\nentrants = [\"human\", \"random\"]\n").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: tournament.entrants cannot include human"
        );
    }

    #[test]
    fn validate_rejects_zero_repeat() {
        let mut config = AppConfig::default();
        config.tournament.repeat = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_ratings() {
        let config = AppConfig::parse("[tournament]\nscale = nan\nbase = nan\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "config validation error: tournament.scale must be > 0"
        );

        let config = AppConfig::parse("[tournament]\nbase = inf\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "config validation error: tournament.base must be > 1"
        );

        let mut config = AppConfig::default();
        config.tournament.anchor = f64::NAN;
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "config validation error: tournament.anchor must be finite"
        );
    }

    #[test]
    fn bad_tournament_table_still_parses_for_play() {
        let config = AppConfig::parse(
            "[match]\nwhite = \"table\"\n\n[tournament]\nrepeat = 0\nscale = -1.0\n",
        )
        .unwrap();
        assert_eq!(config.game.white, Archetype::Table);
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_without_file() {
        let config = AppConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = AppConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
