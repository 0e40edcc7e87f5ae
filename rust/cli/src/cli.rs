//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::{Outcome, Risk};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Deterministic five-card draw showdowns"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one round at a table of the given strategies
    Play {
        /// One per seat, in seat order
        #[arg(long = "strategy", short = 's', value_enum, required = true)]
        strategies: Vec<Risk>,
        /// Player ids in seat order; missing ones become player-N
        #[arg(long = "id")]
        ids: Vec<String>,
        #[arg(long)]
        pot: Option<u64>,
        /// Seed string; random when omitted
        #[arg(long)]
        seed: Option<String>,
        /// Draw replacements from the deal deck's remainder
        #[arg(long)]
        shared_draw: bool,
        #[arg(long)]
        json: bool,
        /// Append the round to a JSONL history file
        #[arg(long)]
        log: Option<String>,
    },
    /// Predict the winner and bet arrays without playing the round out
    Sim {
        #[arg(long = "strategy", short = 's', value_enum, required = true)]
        strategies: Vec<Risk>,
        #[arg(long)]
        seed: Option<String>,
        /// Rounds to tally; round N uses seed "{seed}-{N}"
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        #[arg(long)]
        shared_draw: bool,
    },
    /// Evaluate a five-card hand, e.g. `eval As Ks Qs Js Ts`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Print the first values of a seeded stream
    Rng {
        #[arg(long, default_value = "")]
        seed: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Play a wagered round against a generated AI table
    Practice {
        #[arg(long, value_enum, default_value_t = Risk::Balanced)]
        strategy: Risk,
        #[arg(long)]
        wager: Option<u64>,
        #[arg(long)]
        seed: Option<String>,
        /// Seed for the opponent table
        #[arg(long)]
        opponents_seed: Option<u64>,
        /// Outcome reported by the wager; defaults to the predicted one
        #[arg(long, value_enum)]
        settle: Option<Outcome>,
        /// Search for a seed whose round matches --settle
        #[arg(long, requires = "settle")]
        align: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
