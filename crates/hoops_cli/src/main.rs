//! hoops CLI
//!
//! Play single games, run parallel series, and generate roster files.

mod report;
mod rosters;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use hoops_core::batch::{simulate_slate, Fixture, SeriesSummary, WorkerPool};
use hoops_core::{EngineConfig, GameEngine};

use rosters::TeamSource;

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Deterministic basketball game simulator", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct TeamArgs {
    /// Home roster file (JSON or YAML)
    #[arg(long, conflicts_with = "home_overall")]
    home: Option<PathBuf>,

    /// Generate the home roster around this overall rating
    #[arg(long, default_value_t = 75)]
    home_overall: u8,

    /// Away roster file (JSON or YAML)
    #[arg(long, conflicts_with = "away_overall")]
    away: Option<PathBuf>,

    /// Generate the away roster around this overall rating
    #[arg(long, default_value_t = 75)]
    away_overall: u8,

    /// Engine config file (JSON or YAML); missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the fast-paced preset instead of the default tuning
    #[arg(long, conflicts_with = "config")]
    fast: bool,
}

impl TeamArgs {
    fn home_source(&self) -> TeamSource {
        TeamSource::pick(self.home.clone(), 1, "Home", self.home_overall)
    }

    fn away_source(&self) -> TeamSource {
        TeamSource::pick(self.away.clone(), 2, "Away", self.away_overall)
    }

    fn engine_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("loading engine config {}", path.display())),
            None if self.fast => Ok(EngineConfig::fast_paced()),
            None => Ok(EngineConfig::default()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one game and print the box score
    Game {
        #[command(flatten)]
        teams: TeamArgs,

        /// Game seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Print the full GameResult as JSON instead of a box score
        #[arg(long)]
        json: bool,

        /// Also print the play-by-play
        #[arg(long)]
        plays: bool,
    },

    /// Simulate many games between the same two teams in parallel
    Series {
        #[command(flatten)]
        teams: TeamArgs,

        /// Number of games
        #[arg(long, default_value_t = 100)]
        games: usize,

        /// Slate seed; each game derives its own seed from it
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Worker threads (0 = one per core)
        #[arg(long, default_value_t = 0)]
        workers: usize,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a roster file
    Roster {
        /// Team id
        #[arg(long)]
        id: u32,

        /// Team name
        #[arg(long)]
        name: String,

        /// Mean overall rating
        #[arg(long, default_value_t = 75)]
        overall: u8,

        /// Generator seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file; `.yaml`/`.yml` writes YAML, anything else JSON.
        /// Prints JSON to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Game { teams, seed, json, plays } => {
            let config = teams.engine_config()?;
            let home = teams.home_source().load(seed)?;
            let away = teams.away_source().load(seed)?;
            info!("{} vs {}, seed {}", home.name, away.name, seed);

            let result = GameEngine::from_rosters(&home, &away, seed)?
                .with_config(config)?
                .simulate();

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::scoreline(&result, &home.name, &away.name));
                print!("{}", report::box_score(&result));
                if plays {
                    print!("{}", report::play_by_play(&result));
                }
            }
        }

        Commands::Series { teams, games, seed, workers, json } => {
            if games == 0 {
                bail!("--games must be at least 1");
            }
            let config = teams.engine_config()?;
            let home = teams.home_source().load(seed)?;
            let away = teams.away_source().load(seed)?;
            info!("{} games: {} vs {}", games, home.name, away.name);

            let fixtures: Vec<Fixture> =
                (0..games).map(|_| Fixture::new(home.clone(), away.clone())).collect();
            let outcomes = simulate_slate(&fixtures, seed, &config, WorkerPool::new(workers));
            if let Some(err) = outcomes.iter().find_map(|o| o.result.as_ref().err()) {
                bail!("series aborted: {}", err);
            }
            let summary = SeriesSummary::from_outcomes(&outcomes);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", report::series(&summary, &home.name, &away.name));
            }
        }

        Commands::Roster { id, name, overall, seed, out } => {
            let roster = rosters::generate(id, &name, overall, seed);
            match out {
                Some(path) => {
                    rosters::save(&roster, &path)?;
                    println!("Wrote {} ({} players) to {}", roster.name, roster.players.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&roster)?),
            }
        }
    }

    Ok(())
}
