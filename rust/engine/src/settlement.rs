//! Reconciling a round with the external wager's authoritative outcome.
//!
//! The wager system decides whether a seat actually won and how much it was
//! paid. The engine's own winner only drives what gets rendered, so a caller
//! either overrides the payout with [`reconcile`] or picks a seed whose
//! deterministic outcome already matches the flag with [`find_aligned_seed`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::EngineError;
use crate::showdown::{simulate_outcome_with, GameResult, ShowdownConfig};
use crate::strategy::DrawStrategy;

/// Outcome reported by the external wager for one seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub player_index: usize,
    pub won: bool,
    pub payout: u64,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reconciled {
    pub result: GameResult,
    /// Whether the engine's winner agreed with the external flag.
    pub agrees: bool,
}

/// Copy of `result` with the settled seat's payout replaced by the external one.
pub fn reconcile(result: &GameResult, settlement: &Settlement) -> Reconciled {
    let engine_says_won = result.winner_index == Some(settlement.player_index);
    let agrees = engine_says_won == settlement.won;
    if !agrees {
        warn!(
            seed = %result.seed,
            player = settlement.player_index,
            engine_winner = ?result.winner_index,
            external_won = settlement.won,
            "engine winner disagrees with settlement"
        );
    }

    let mut result = result.clone();
    if let Some(p) = result.players.get_mut(settlement.player_index) {
        p.payout = if settlement.won { settlement.payout } else { 0 };
    }
    Reconciled { result, agrees }
}

/// Search `"{base_seed}-{n}"` for `n` in `0..max_attempts` and return the first
/// seed whose outcome gives `player_index` the requested result.
pub fn find_aligned_seed(
    config: &ShowdownConfig,
    strategies: &[DrawStrategy],
    base_seed: &str,
    player_index: usize,
    want_win: bool,
    max_attempts: u32,
) -> Result<Option<String>, EngineError> {
    for n in 0..max_attempts {
        let seed = format!("{}-{}", base_seed, n);
        let outcome = simulate_outcome_with(config, strategies, &seed)?;
        if (outcome.winner_index == Some(player_index)) == want_win {
            return Ok(Some(seed));
        }
    }
    Ok(None)
}
