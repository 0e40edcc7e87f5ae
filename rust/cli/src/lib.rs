//! # Showdown CLI Library
//!
//! Command-line front end for the deterministic draw poker engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let args = ["showdown", "play", "-s", "balanced", "-s", "aggressive", "--seed", "42"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = showdown_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one round and print every seat's draw
//! - `sim`: Predict the winner and bet arrays, or tally many rounds
//! - `eval`: Evaluate a five-card hand
//! - `rng`: Print a seeded float stream
//! - `practice`: Wagered round against a generated AI table
//! - `cfg`: Display current configuration settings

use clap::{Parser, ValueEnum};
use std::io::Write;

use showdown_engine::strategy::{DrawStrategy, RiskLevel};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_eval_command, handle_play_command, handle_practice_command,
    handle_rng_command, handle_sim_command,
};

pub use commands::{PlayArgs, PracticeArgs, SimArgs};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "rng", "practice", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = showdown_cli::run(["showdown", "rng", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: showdown <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: showdown --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            strategies,
            ids,
            pot,
            seed,
            shared_draw,
            json,
            log,
        } => handle_play_command(
            PlayArgs {
                strategies: presets(&strategies),
                ids,
                pot,
                seed,
                shared_draw,
                json,
                log,
            },
            out,
        ),
        Commands::Sim {
            strategies,
            seed,
            rounds,
            shared_draw,
        } => handle_sim_command(
            SimArgs {
                strategies: presets(&strategies),
                seed,
                rounds,
                shared_draw,
            },
            out,
        ),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Rng { seed, count } => handle_rng_command(&seed, count, out),
        Commands::Practice {
            strategy,
            wager,
            seed,
            opponents_seed,
            settle,
            align,
            json,
        } => handle_practice_command(
            PracticeArgs {
                strategy: strategy.level().preset(),
                wager,
                seed,
                opponents_seed,
                settle: settle.map(Outcome::won),
                align,
                json,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn presets(risks: &[Risk]) -> Vec<DrawStrategy> {
    risks.iter().map(|r| r.level().preset()).collect()
}

/// Fresh seed string for commands run without `--seed`.
pub(crate) fn random_seed() -> String {
    format!("{:016x}", rand::random::<u64>())
}

/// Strategy preset selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Risk {
    /// Stand pat on made hands, hold high cards
    Conservative,
    /// Keep made hands, draw to four-flushes
    Balanced,
    /// Chase flushes and straights
    Aggressive,
}

impl Risk {
    /// # Examples
    ///
    /// ```
    /// # use showdown_cli::Risk;
    /// use showdown_engine::strategy::RiskLevel;
    /// assert_eq!(Risk::Aggressive.level(), RiskLevel::Aggressive);
    /// ```
    pub fn level(self) -> RiskLevel {
        match self {
            Risk::Conservative => RiskLevel::Conservative,
            Risk::Balanced => RiskLevel::Balanced,
            Risk::Aggressive => RiskLevel::Aggressive,
        }
    }
}

/// Win/lose flag reported by the external wager.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub fn won(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["showdown", "cfg"],
            vec!["showdown", "play", "-s", "balanced"],
            vec!["showdown", "sim", "-s", "balanced", "-s", "aggressive"],
            vec!["showdown", "eval", "As", "Ks", "Qs", "Js", "Ts"],
            vec!["showdown", "rng"],
            vec!["showdown", "practice"],
        ];
        for args in commands {
            let result = ShowdownCli::try_parse_from(&args);
            assert!(result.is_ok(), "Failed to parse: {:?}", args);
        }
        assert_eq!(COMMANDS.len(), 6);
    }

    #[test]
    fn play_requires_a_strategy() {
        assert!(ShowdownCli::try_parse_from(["showdown", "play"]).is_err());
        assert!(ShowdownCli::try_parse_from(["showdown", "play", "-s", "reckless"]).is_err());
    }

    #[test]
    fn align_requires_settle() {
        assert!(ShowdownCli::try_parse_from(["showdown", "practice", "--align"]).is_err());
        assert!(
            ShowdownCli::try_parse_from(["showdown", "practice", "--align", "--settle", "won"])
                .is_ok()
        );
    }

    #[test]
    fn presets_follow_risk() {
        assert_eq!(
            presets(&[Risk::Conservative, Risk::Aggressive]),
            vec![DrawStrategy::CONSERVATIVE, DrawStrategy::AGGRESSIVE]
        );
    }

    #[test]
    fn random_seeds_are_hex() {
        let s = random_seed();
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
