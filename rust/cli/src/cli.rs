//! Command-line surface of the `petal` binary.

use crate::config::parse_first_player;
use clap::{Parser, Subcommand, ValueEnum};
use petal_engine::engine::FirstPlayer;

#[derive(Debug, Parser)]
#[command(name = "petal", version, about = "Two-player flower card game")]
pub struct PetalCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one game in the terminal
    Play {
        /// Opponent in seat 2
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        /// Shuffle seed (overrides PETAL_SEED)
        #[arg(long)]
        seed: Option<u64>,
        /// Who moves first: random, 0 or 1 (overrides PETAL_FIRST_PLAYER)
        #[arg(long, value_parser = first_player_arg)]
        first: Option<FirstPlayer>,
        /// Pause before the computer's moves are shown
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },
    /// Run computer-vs-computer games and report the results
    Sim {
        /// Number of games
        #[arg(long, default_value_t = 100)]
        games: u32,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Turn cap after which a game is abandoned without a winner
        #[arg(long, default_value_t = 200)]
        max_turns: u32,
        /// Write one JSON record per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal the opening hands for a seed
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Two people share the terminal
    Human,
    /// The greedy computer player takes seat 2
    Ai,
}

impl Vs {
    /// # Examples
    ///
    /// ```
    /// # use petal_cli::cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}

fn first_player_arg(s: &str) -> Result<FirstPlayer, String> {
    parse_first_player(s).ok_or_else(|| format!("expected random, 0 or 1, got '{}'", s))
}
