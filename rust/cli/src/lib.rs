//! # petal CLI Library
//!
//! Terminal front end for the flower card game: play a game against the
//! greedy computer player or a second person, run bulk simulations, inspect a
//! deal, and show the resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output streams are parameters so the whole CLI can be
//! driven from tests.
//!
//! ```
//! use std::io;
//! let args = vec!["petal", "deal", "--seed", "42"];
//! let code = petal_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: play one game (`--vs ai|human`, `--seed`, `--first`, `--ai-delay-ms`)
//! - `sim`: computer-vs-computer games with win counts and optional JSONL records
//! - `deal`: the opening hands for a seed
//! - `cfg`: the resolved configuration and the source of each value

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod pacing;
pub mod ui;
pub mod validation;

use cli::{Commands, PetalCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};
pub use error::{CliError, EXIT_ERROR, EXIT_SUCCESS};

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Write a line or bail out with the error exit code.
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return EXIT_ERROR;
        }
    };
}

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PetalCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return EXIT_ERROR;
                }
                return EXIT_SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: petal <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: petal --help");
            return EXIT_ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Play {
            vs,
            seed,
            first,
            ai_delay_ms,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let opts = PlayOptions {
                vs,
                seed,
                first,
                ai_delay_ms,
            };
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seed,
            max_turns,
            output,
        } => handle_sim_command(games, seed, max_turns, output, out, err),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}
