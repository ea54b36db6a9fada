//! Headless driver for the Pong agent arena.
//!
//! `arena play` runs one match, `arena roster` plays every pairing of a
//! roster. Set `RUST_LOG=debug` to see paddle hits, `trace` for every tick.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use pong_core::{
    build_matches, Config, GameRng, Match, Outcome, Player, RandomAgent, Runner, Side,
    TrackingAgent,
};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Play Pong matches between paddle agents", long_about = None)]
struct Cli {
    /// JSON config file; missing fields use the defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stop a match undecided after this many ticks
    #[arg(long, global = true)]
    max_ticks: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single match
    Play {
        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long, value_enum, default_value_t = AgentKind::Random)]
        left: AgentKind,

        #[arg(long, value_enum, default_value_t = AgentKind::Random)]
        right: AgentKind,

        /// Pace ticks at the configured tick rate
        #[arg(long, default_value = "false")]
        realtime: bool,
    },

    /// Play every pairing of a roster once
    Roster {
        /// Roster size (default: one slot per --agent, or 3)
        #[arg(long)]
        players: Option<usize>,

        /// Agent kinds, repeatable, cycled over the roster slots
        /// (default: random, random, tracking)
        #[arg(long = "agent", value_enum)]
        agents: Vec<AgentKind>,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Play fixtures on all cores
        #[arg(long, default_value = "false")]
        parallel: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Tracking,
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Random => f.write_str("random"),
            AgentKind::Tracking => f.write_str("tracking"),
        }
    }
}

impl AgentKind {
    fn player(self, label: String, config: &Config) -> Player {
        match self {
            AgentKind::Random => Player::new(label, RandomAgent::default()),
            AgentKind::Tracking => Player::new(label, TrackingAgent::new(config)),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let runner = Runner {
        max_ticks: cli.max_ticks,
    };

    match cli.command {
        Commands::Play {
            seed,
            left,
            right,
            realtime,
        } => play(&config, runner, seed, left, right, realtime),
        Commands::Roster {
            players,
            agents,
            seed,
            parallel,
        } => roster(&config, runner, &roster_kinds(players, &agents), seed, parallel),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::from_json(&json).with_context(|| format!("failed to load config {}", path.display()))
}

fn play(
    config: &Config,
    runner: Runner,
    seed: u64,
    left: AgentKind,
    right: AgentKind,
    realtime: bool,
) -> Result<()> {
    let left = left.player(format!("left ({left})"), config);
    let right = right.player(format!("right ({right})"), config);

    let mut rng = GameRng::new(seed);
    let mut game =
        Match::new(config.clone(), &mut rng).with_labels(left.label.clone(), right.label.clone());
    let tick = config.tick_duration();

    let outcome = runner.run_with_observer(
        &mut game,
        left.agent.as_ref(),
        right.agent.as_ref(),
        &mut rng,
        |_| {
            if realtime {
                std::thread::sleep(tick);
            }
        },
    )?;

    println!("{}", describe(&game, &outcome));
    Ok(())
}

const DEFAULT_ROSTER: [AgentKind; 3] = [AgentKind::Random, AgentKind::Random, AgentKind::Tracking];

/// Agent kind for every roster slot, cycling through `agents`
fn roster_kinds(players: Option<usize>, agents: &[AgentKind]) -> Vec<AgentKind> {
    let agents = if agents.is_empty() {
        &DEFAULT_ROSTER[..]
    } else {
        agents
    };
    let players = players.unwrap_or(agents.len());
    agents.iter().copied().cycle().take(players).collect()
}

fn roster(
    config: &Config,
    runner: Runner,
    kinds: &[AgentKind],
    seed: u64,
    parallel: bool,
) -> Result<()> {
    let players: Vec<Player> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| kind.player(format!("P{} ({kind})", i + 1), config))
        .collect();

    let mut fixtures = build_matches(&players, config, seed).into_fixtures();
    info!(
        "playing {} fixtures for {} players",
        fixtures.len(),
        players.len()
    );

    let outcomes: Vec<Outcome> = if parallel {
        fixtures
            .par_iter_mut()
            .map(|fixture| fixture.play(&runner))
            .collect::<Result<_, _>>()?
    } else {
        fixtures
            .iter_mut()
            .map(|fixture| fixture.play(&runner))
            .collect::<Result<_, _>>()?
    };

    for (fixture, outcome) in fixtures.iter().zip(&outcomes) {
        println!("{}", describe(&fixture.game, outcome));
    }
    Ok(())
}

fn describe(game: &Match, outcome: &Outcome) -> String {
    let versus = format!("{} vs {}", game.label(Side::Left), game.label(Side::Right));
    match outcome {
        Outcome::Decided { winner, ticks } => {
            format!("{versus}: {} wins after {ticks} ticks", game.label(*winner))
        }
        Outcome::TickLimit { ticks } => format!("{versus}: undecided after {ticks} ticks"),
    }
}
