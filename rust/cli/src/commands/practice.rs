//! Wagered practice round against a generated AI table.
//!
//! Mirrors the flow of a wager front end:
//!
//! 1. Seat the human at 0 and generate 2-5 opponents.
//! 2. Predict the winner to build the human's bet array.
//! 3. Play the round in full for display.
//! 4. Reconcile the human seat's payout with the wager's settlement.
//!
//! The settlement defaults to the predicted outcome. Passing `--settle`
//! overrides it; with `--align` the seed is searched until the round agrees.

use crate::commands::play::render_round;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_multiplier;
use crate::random_seed;
use crate::ui;
use serde::Serialize;
use showdown_ai::AIOpponent;
use showdown_ai::preset::description;
use showdown_ai::rating::{DrawRating, rate_draw};
use showdown_ai::table::{generate_opponents, seat_table};
use showdown_engine::payout::bet_array;
use showdown_engine::settlement::{Settlement, find_aligned_seed, reconcile};
use showdown_engine::showdown::{GameResult, execute_showdown_with, simulate_outcome_with};
use showdown_engine::strategy::DrawStrategy;
use std::io::Write;

/// Seeds tried by `--align` before giving up.
const ALIGN_ATTEMPTS: u32 = 1_000;

const HUMAN_SEAT: usize = 0;

#[derive(Debug, Clone)]
pub struct PracticeArgs {
    pub strategy: DrawStrategy,
    pub wager: Option<u64>,
    pub seed: Option<String>,
    pub opponents_seed: Option<u64>,
    /// External win flag; `None` settles on the predicted outcome
    pub settle: Option<bool>,
    pub align: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PracticeReport<'a> {
    seed: &'a str,
    opponents_seed: u64,
    opponents: Vec<&'a str>,
    bet: [f64; 2],
    metadata: [u8; 5],
    settlement: Settlement,
    agrees: bool,
    ratings: Vec<DrawRating>,
    result: &'a GameResult,
}

pub fn handle_practice_command(
    args: PracticeArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let wager = args.wager.unwrap_or(cfg.default_pot);
    if wager == 0 {
        return Err(CliError::InvalidInput("wager must be > 0".to_string()));
    }
    let showdown = cfg.showdown_config(false);

    let opponents_seed = args
        .opponents_seed
        .or(cfg.opponents_seed)
        .unwrap_or_else(rand::random);
    let opponents = generate_opponents(opponents_seed);
    let (strategies, ids) = seat_table(args.strategy, &opponents);

    let mut seed = args
        .seed
        .unwrap_or_else(|| format!("practice-{}", random_seed()));
    if let (true, Some(want_win)) = (args.align, args.settle) {
        match find_aligned_seed(
            &showdown,
            &strategies,
            &seed,
            HUMAN_SEAT,
            want_win,
            ALIGN_ATTEMPTS,
        )? {
            Some(aligned) => seed = aligned,
            None => ui::display_warning(
                err,
                &format!(
                    "no seed within {} attempts matches the settlement; keeping {}",
                    ALIGN_ATTEMPTS, seed
                ),
            )?,
        }
    }

    // Bet array comes from the prediction, before anything is shown
    let preview = simulate_outcome_with(&showdown, &strategies, &seed)?;
    let human_wins = preview.winner_index == Some(HUMAN_SEAT);
    let bet = preview
        .winner_hand_rank
        .map_or([0.0, 0.0], |rank| bet_array(rank, human_wins));

    let pot = wager.saturating_mul(strategies.len() as u64);
    let round = execute_showdown_with(&showdown, &strategies, &ids, pot, &seed)?;

    // paid at the played round's multiplier; bet[1] is zero on a predicted loss
    let won = args.settle.unwrap_or(human_wins);
    let multiplier = round
        .winner()
        .map_or(0.0, |w| w.hand_eval.rank.multiplier());
    let settlement = Settlement {
        player_index: HUMAN_SEAT,
        won,
        payout: if won {
            (wager as f64 * multiplier).round() as u64
        } else {
            0
        },
    };
    let reconciled = reconcile(&round, &settlement);

    let ratings: Vec<DrawRating> = reconciled
        .result
        .players
        .iter()
        .map(|p| rate_draw(&p.initial_hand, &p.discard_indices, &p.final_hand, &p.strategy))
        .collect();

    if args.json {
        let report = PracticeReport {
            seed: &seed,
            opponents_seed,
            opponents: opponents.iter().map(|o| o.ai.name()).collect(),
            bet,
            metadata: args.strategy.to_metadata(),
            settlement,
            agrees: reconciled.agrees,
            ratings,
            result: &reconciled.result,
        };
        let s = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "Opponents (table {}):", opponents_seed)?;
    for o in &opponents {
        writeln!(out, "  {} {}", o.player_id, o.ai.name())?;
    }
    writeln!(
        out,
        "Wager {} at up to {} (bet {:?})",
        wager,
        format_multiplier(bet[1]),
        bet
    )?;
    writeln!(
        out,
        "Strategy {}: {}",
        args.strategy.risk_level.as_str(),
        description(args.strategy.risk_level)
    )?;
    render_round(&reconciled.result, out)?;
    for (p, r) in reconciled.result.players.iter().zip(&ratings) {
        writeln!(out, "Draw {}: {}", p.player_id, r.as_str())?;
    }
    if !reconciled.agrees {
        ui::display_warning(err, "settlement disagrees with the round shown")?;
    }
    if settlement.won {
        writeln!(out, "You won {}", settlement.payout)?;
    } else {
        writeln!(out, "You lost {}", wager)?;
    }
    Ok(())
}
