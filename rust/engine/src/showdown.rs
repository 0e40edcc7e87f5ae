use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{evaluate_five, find_winners, HandEvaluation, HandRank, HAND_SIZE};
use crate::strategy::{choose_discards, DrawStrategy};

/// Largest table for which every seat can always receive five replacement
/// cards that were not part of the deal (`5 * 9 + 5 <= 52`).
pub const MAX_PLAYERS: usize = 9;

/// Where replacement cards come from during the draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    /// Each seat scans its own freshly shuffled deck keyed by
    /// `"{deck_seed}-{index}-draw"`, skipping cards from the initial deal.
    /// Two seats may receive the same replacement card.
    #[default]
    PerPlayerDeck,
    /// All seats draw from the remainder of the deal deck through one shared
    /// cursor, so no card appears twice at the table. A seat whose discards
    /// outrun the remainder keeps its original card in the unfilled slots.
    SharedRemainder,
}

impl std::str::FromStr for DrawMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-player-deck" | "per-player" => Ok(DrawMode::PerPlayerDeck),
            "shared-remainder" | "shared" => Ok(DrawMode::SharedRemainder),
            other => Err(format!("unknown draw mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShowdownConfig {
    pub draw_mode: DrawMode,
    /// Copied into [`GameResult::game_id`].
    pub game_id: String,
}

impl Default for ShowdownConfig {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::PerPlayerDeck,
            game_id: "practice".into(),
        }
    }
}

/// One seat's full round record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player_id: String,
    pub player_index: usize,
    pub initial_hand: [Card; HAND_SIZE],
    pub final_hand: [Card; HAND_SIZE],
    /// Sorted, unique, within `0..5`.
    pub discard_indices: Vec<usize>,
    pub hand_eval: HandEvaluation,
    pub strategy: DrawStrategy,
    pub is_winner: bool,
    pub payout: u64,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub players: Vec<PlayerResult>,
    /// `None` only for an empty table.
    pub winner_index: Option<usize>,
    pub total_pot: u64,
    pub game_id: String,
    pub seed: String,
}

impl GameResult {
    pub fn winner(&self) -> Option<&PlayerResult> {
        self.winner_index.and_then(|i| self.players.get(i))
    }
}

/// Winner information without the per-seat records.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimulatedOutcome {
    pub winner_index: Option<usize>,
    pub winner_hand_rank: Option<HandRank>,
    pub winner_hand_value: u64,
}

pub fn deck_seed(seed: &str) -> String {
    format!("poker-{}-deck", seed)
}

pub fn draw_seed(deck_seed: &str, player_index: usize) -> String {
    format!("{}-{}-draw", deck_seed, player_index)
}

/// Seat state after the deal, draw and evaluate phases.
#[derive(Debug, Clone)]
struct Seat {
    initial: [Card; HAND_SIZE],
    discards: Vec<usize>,
    final_hand: [Card; HAND_SIZE],
    eval: HandEvaluation,
}

fn play_round(
    strategies: &[DrawStrategy],
    seed: &str,
    mode: DrawMode,
) -> Result<Vec<Seat>, EngineError> {
    if strategies.len() > MAX_PLAYERS {
        return Err(EngineError::TooManyPlayers {
            max: MAX_PLAYERS,
            actual: strategies.len(),
        });
    }
    let deck_seed = deck_seed(seed);

    // Deal: one shared cursor through one shuffled deck
    let mut deck = Deck::new_with_seed(&deck_seed);
    let mut initial_hands = Vec::with_capacity(strategies.len());
    for _ in strategies {
        let cards: Vec<Card> = (0..HAND_SIZE).filter_map(|_| deck.deal_card()).collect();
        let hand: [Card; HAND_SIZE] =
            cards
                .try_into()
                .map_err(|short: Vec<Card>| EngineError::InvalidHandSize {
                    expected: HAND_SIZE,
                    actual: short.len(),
                })?;
        initial_hands.push(hand);
    }
    let dealt: HashSet<Card> = initial_hands.iter().flatten().copied().collect();

    // Draw
    let mut seats = Vec::with_capacity(strategies.len());
    for (i, (strategy, initial)) in strategies.iter().zip(initial_hands).enumerate() {
        let discards = choose_discards(&initial, strategy);
        let mut final_hand = initial;
        match mode {
            DrawMode::PerPlayerDeck => {
                let mut replacements = Deck::new_with_seed(&draw_seed(&deck_seed, i));
                for &d in &discards {
                    if let Some(c) = replacements.deal_card_except(|c| dealt.contains(c)) {
                        final_hand[d] = c;
                    }
                }
            }
            DrawMode::SharedRemainder => {
                for &d in &discards {
                    if let Some(c) = deck.deal_card() {
                        final_hand[d] = c;
                    }
                }
            }
        }
        debug!(
            player = i,
            risk = strategy.risk_level.as_str(),
            initial = %format_hand(&initial),
            discards = ?discards,
            final_hand = %format_hand(&final_hand),
            "draw complete"
        );

        // Evaluate
        let eval = evaluate_five(&final_hand);
        seats.push(Seat {
            initial,
            discards,
            final_hand,
            eval,
        });
    }
    Ok(seats)
}

/// First index among the tied best hands; `None` for an empty slice.
pub fn resolve(evals: &[HandEvaluation]) -> Option<usize> {
    find_winners(evals).first().copied()
}

/// Deal, draw, evaluate and resolve one round with the default configuration.
///
/// # Errors
///
/// [`EngineError::TooManyPlayers`] when more than [`MAX_PLAYERS`] strategies are given.
///
/// ```
/// use showdown_engine::showdown::execute_showdown;
/// use showdown_engine::strategy::DrawStrategy;
///
/// let strategies = [DrawStrategy::BALANCED, DrawStrategy::AGGRESSIVE];
/// let ids = ["alice".to_string(), "bob".to_string()];
/// let a = execute_showdown(&strategies, &ids, 1000, "demo").unwrap();
/// let b = execute_showdown(&strategies, &ids, 1000, "demo").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.winner().unwrap().payout, 1000);
/// ```
pub fn execute_showdown(
    strategies: &[DrawStrategy],
    player_ids: &[String],
    total_pot: u64,
    seed: &str,
) -> Result<GameResult, EngineError> {
    execute_showdown_with(
        &ShowdownConfig::default(),
        strategies,
        player_ids,
        total_pot,
        seed,
    )
}

pub fn execute_showdown_with(
    config: &ShowdownConfig,
    strategies: &[DrawStrategy],
    player_ids: &[String],
    total_pot: u64,
    seed: &str,
) -> Result<GameResult, EngineError> {
    let seats = play_round(strategies, seed, config.draw_mode)?;
    let evals: Vec<HandEvaluation> = seats.iter().map(|s| s.eval.clone()).collect();
    let winner_index = resolve(&evals);

    let mut players: Vec<PlayerResult> = seats
        .into_iter()
        .zip(strategies)
        .enumerate()
        .map(|(i, (seat, strategy))| PlayerResult {
            player_id: player_ids
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("player-{}", i)),
            player_index: i,
            initial_hand: seat.initial,
            final_hand: seat.final_hand,
            discard_indices: seat.discards,
            hand_eval: seat.eval,
            strategy: *strategy,
            is_winner: false,
            payout: 0,
        })
        .collect();

    if let Some(w) = winner_index {
        players[w].is_winner = true;
        players[w].payout = total_pot;
        info!(
            game_id = %config.game_id,
            seed,
            winner = w,
            hand = %players[w].hand_eval.name,
            payout = total_pot,
            "showdown resolved"
        );
    }

    Ok(GameResult {
        players,
        winner_index,
        total_pot,
        game_id: config.game_id.clone(),
        seed: seed.to_string(),
    })
}

/// Winner of the round `execute_showdown` would play for the same inputs,
/// without building per-seat records.
pub fn simulate_outcome(
    strategies: &[DrawStrategy],
    seed: &str,
) -> Result<SimulatedOutcome, EngineError> {
    simulate_outcome_with(&ShowdownConfig::default(), strategies, seed)
}

pub fn simulate_outcome_with(
    config: &ShowdownConfig,
    strategies: &[DrawStrategy],
    seed: &str,
) -> Result<SimulatedOutcome, EngineError> {
    let evals: Vec<HandEvaluation> = play_round(strategies, seed, config.draw_mode)?
        .into_iter()
        .map(|s| s.eval)
        .collect();
    let winner_index = resolve(&evals);
    let winner = winner_index.map(|i| &evals[i]);
    Ok(SimulatedOutcome {
        winner_index,
        winner_hand_rank: winner.map(|e| e.rank),
        winner_hand_value: winner.map_or(0, |e| e.value),
    })
}

pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
