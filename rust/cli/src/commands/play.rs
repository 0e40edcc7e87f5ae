//! Play one round and show every seat's deal, draw and final hand.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_draw};
use crate::random_seed;
use showdown_engine::logger::RoundLogger;
use showdown_engine::showdown::{GameResult, execute_showdown_with};
use showdown_engine::strategy::DrawStrategy;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub strategies: Vec<DrawStrategy>,
    pub ids: Vec<String>,
    /// Falls back to the configured default pot
    pub pot: Option<u64>,
    pub seed: Option<String>,
    pub shared_draw: bool,
    pub json: bool,
    pub log: Option<String>,
}

pub fn handle_play_command(args: PlayArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let pot = args.pot.unwrap_or(cfg.default_pot);
    if pot == 0 {
        return Err(CliError::InvalidInput("pot must be > 0".to_string()));
    }
    let seed = args.seed.unwrap_or_else(random_seed);

    let result = execute_showdown_with(
        &cfg.showdown_config(args.shared_draw),
        &args.strategies,
        &args.ids,
        pot,
        &seed,
    )?;

    if let Some(path) = &args.log {
        let mut logger = RoundLogger::append(path)?;
        logger.log(&result, Some(serde_json::json!({ "command": "play" })))?;
    }

    if args.json {
        let s = serde_json::to_string_pretty(&result).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        render_round(&result, out)?;
    }
    Ok(())
}

/// Text rendering shared by `play` and `practice`.
pub(crate) fn render_round(result: &GameResult, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "Seed: {} (game {}, pot {})",
        result.seed, result.game_id, result.total_pot
    )?;
    for p in &result.players {
        writeln!(
            out,
            "Seat {} {} [{}]: {}  ->  {}  ({})",
            p.player_index,
            p.player_id,
            p.strategy.risk_level.as_str(),
            format_draw(&p.initial_hand, &p.discard_indices),
            format_cards(&p.final_hand),
            p.hand_eval.name
        )?;
    }
    match result.winner() {
        Some(w) => writeln!(
            out,
            "Winner: seat {} ({}) with {}, payout {}",
            w.player_index, w.player_id, w.hand_eval.name, w.payout
        )?,
        None => writeln!(out, "No players, no winner")?,
    }
    Ok(())
}
