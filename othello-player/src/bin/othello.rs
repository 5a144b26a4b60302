//! Command-line front end: play a game, or rate the computer agents.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use othello_player::config::AppConfig;
use othello_player::elo::Tournament;
use othello_player::{Agent, Archetype, Match};
use othello_rules::Game;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "othello.toml";

#[derive(Debug, Parser)]
#[command(name = "othello", about = "Play Othello against simple agents, or rate them")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for every random choice, for reproducible games.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a single game.
    Play {
        /// human, random, greedy, positional or table (or h, 0-3).
        #[arg(long)]
        black: Option<Archetype>,

        #[arg(long)]
        white: Option<Archetype>,

        /// Only print the result.
        #[arg(long)]
        quiet: bool,
    },

    /// Play series between computer agents and fit Elo ratings.
    Tournament {
        /// Comma-separated entrants, weakest first.
        #[arg(long, value_delimiter = ',')]
        entrants: Option<Vec<Archetype>>,

        /// Games per series.
        #[arg(long)]
        repeat: Option<u32>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        black: None,
        white: None,
        quiet: false,
    }) {
        Command::Play {
            black,
            white,
            quiet,
        } => {
            let game = &mut config.game;
            game.black = black.unwrap_or(game.black);
            game.white = white.unwrap_or(game.white);
            game.seed = cli.seed.or(game.seed);
            game.verbose = game.verbose && !quiet;
            play(&config)
        }
        Command::Tournament { entrants, repeat } => {
            let tournament = &mut config.tournament;
            if let Some(entrants) = entrants {
                tournament.entrants = entrants;
            }
            tournament.repeat = repeat.unwrap_or(tournament.repeat);
            tournament.seed = cli.seed.or(tournament.seed);
            config.validate()?;
            rate(&config)
        }
    }
}

fn play(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let settings = &config.game;
    let black = Agent::from_archetype(1, settings.black, settings.seed);
    let white = Agent::from_archetype(2, settings.white, settings.seed.map(|s| s.wrapping_add(1)));

    println!("Welcome to Othello.");
    println!("Black: {}", black.identity().full_name());
    println!("White: {}", white.identity().full_name());

    let mut game = Match::new(Game::default(), black, white);
    if settings.verbose {
        game = game.with_observer(io::stdout());
    }

    let report = game.run()?;
    if !settings.verbose {
        println!("{}", report);
    }
    Ok(())
}

fn rate(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let settings = &config.tournament;
    let tournament = Tournament::new(settings.entrants.clone(), settings.repeat)?
        .with_scale(settings.rating_scale())
        .with_seed(settings.seed);

    let progress = ProgressBar::new(tournament.total_games());
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?,
    );
    let standings = tournament.run(|_| progress.inc(1))?;
    progress.finish_and_clear();

    print!("{}", standings);
    Ok(())
}
