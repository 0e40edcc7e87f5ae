//! Seeded opponent tables for practice rounds.
//!
//! A table holds between [`MIN_OPPONENTS`] and [`MAX_OPPONENTS`] opponents,
//! each playing a uniformly chosen preset. The same `u64` seed always yields
//! the same table.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use showdown_engine::strategy::{DrawStrategy, RiskLevel};

use crate::AIOpponent;
use crate::preset::PresetAI;

pub const MIN_OPPONENTS: usize = 2;
pub const MAX_OPPONENTS: usize = 5;

/// Player id of the human seat, always seated first.
pub const HUMAN_ID: &str = "human-player";

const RISKS: [RiskLevel; 3] = [
    RiskLevel::Conservative,
    RiskLevel::Balanced,
    RiskLevel::Aggressive,
];

/// A seated opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    /// `ai-player-{n}`, counting from 1.
    pub player_id: String,
    pub ai: PresetAI,
}

pub fn generate_opponents(seed: u64) -> Vec<Opponent> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let count = rng.random_range(MIN_OPPONENTS..=MAX_OPPONENTS);
    (1..=count)
        .map(|n| {
            let risk = RISKS[rng.random_range(0..RISKS.len())];
            let label = risk.as_str().to_ascii_uppercase();
            Opponent {
                player_id: format!("ai-player-{}", n),
                ai: PresetAI::with_name(risk, format!("AI Player {} ({})", n, label)),
            }
        })
        .collect()
}

/// Strategies and ids for a full table: the human at seat 0, then `opponents`.
pub fn seat_table(
    human: DrawStrategy,
    opponents: &[Opponent],
) -> (Vec<DrawStrategy>, Vec<String>) {
    let mut strategies = Vec::with_capacity(opponents.len() + 1);
    let mut ids = Vec::with_capacity(opponents.len() + 1);
    strategies.push(human);
    ids.push(HUMAN_ID.to_string());
    for o in opponents {
        strategies.push(o.ai.strategy());
        ids.push(o.player_id.clone());
    }
    (strategies, ids)
}
