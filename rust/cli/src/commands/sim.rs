//! Outcome prediction without rendering a round.
//!
//! With one round, `sim` prints what a wager front end needs before it
//! settles: the predicted winner, its hand and the bet array of every seat.
//! With `--rounds N` it tallies wins per seat over seeds `"{seed}-{n}"`.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_multiplier;
use crate::random_seed;
use showdown_engine::payout::bet_array;
use showdown_engine::showdown::{ShowdownConfig, simulate_outcome_with};
use showdown_engine::strategy::DrawStrategy;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SimArgs {
    pub strategies: Vec<DrawStrategy>,
    pub seed: Option<String>,
    pub rounds: u32,
    pub shared_draw: bool,
}

pub fn handle_sim_command(args: SimArgs, out: &mut dyn Write) -> Result<(), CliError> {
    if args.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let showdown = cfg.showdown_config(args.shared_draw);
    let seed = args.seed.unwrap_or_else(random_seed);

    if args.rounds == 1 {
        predict(&showdown, &args.strategies, &seed, out)
    } else {
        tally(&showdown, &args.strategies, &seed, args.rounds, out)
    }
}

fn predict(
    config: &ShowdownConfig,
    strategies: &[DrawStrategy],
    seed: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = simulate_outcome_with(config, strategies, seed)?;
    writeln!(out, "Seed: {}", seed)?;
    let (Some(winner), Some(rank)) = (outcome.winner_index, outcome.winner_hand_rank) else {
        writeln!(out, "No players, no winner")?;
        return Ok(());
    };
    writeln!(
        out,
        "Winner: seat {} with {} ({})",
        winner,
        rank.as_str(),
        format_multiplier(rank.multiplier())
    )?;
    for (i, s) in strategies.iter().enumerate() {
        let bets = bet_array(rank, i == winner);
        writeln!(
            out,
            "Seat {} [{}]: bet {:?} metadata {:?}",
            i,
            s.risk_level.as_str(),
            bets,
            s.to_metadata()
        )?;
    }
    Ok(())
}

fn tally(
    config: &ShowdownConfig,
    strategies: &[DrawStrategy],
    seed: &str,
    rounds: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut wins = vec![0u32; strategies.len()];
    for n in 0..rounds {
        let round_seed = format!("{}-{}", seed, n);
        let outcome = simulate_outcome_with(config, strategies, &round_seed)?;
        debug!(seed = %round_seed, winner = ?outcome.winner_index, "simulated");
        if let Some(w) = outcome.winner_index {
            wins[w] += 1;
        }
    }
    writeln!(out, "Rounds: {} (seed {})", rounds, seed)?;
    for (i, (s, w)) in strategies.iter().zip(&wins).enumerate() {
        writeln!(
            out,
            "Seat {} [{}]: {} wins ({:.1}%)",
            i,
            s.risk_level.as_str(),
            w,
            100.0 * f64::from(*w) / f64::from(rounds)
        )?;
    }
    Ok(())
}
