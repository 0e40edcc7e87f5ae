//! After-the-fact grading of one seat's draw.

use serde::Serialize;
use showdown_engine::cards::Card;
use showdown_engine::hand::{HAND_SIZE, HandRank, evaluate_five};
use showdown_engine::strategy::DrawStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawRating {
    Optimal,
    Good,
    Poor,
}

impl DrawRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawRating::Optimal => "optimal",
            DrawRating::Good => "good",
            DrawRating::Poor => "poor",
        }
    }
}

/// Grade a draw: `Optimal` if the hand improved, `Good` for standing pat on a
/// made hand or a flush-minded draw of at most three cards, `Poor` otherwise.
pub fn rate_draw(
    initial: &[Card; HAND_SIZE],
    discards: &[usize],
    final_hand: &[Card; HAND_SIZE],
    strategy: &DrawStrategy,
) -> DrawRating {
    let before = evaluate_five(initial);
    let after = evaluate_five(final_hand);

    if after.value > before.value {
        return DrawRating::Optimal;
    }
    if before.rank != HandRank::HighCard && discards.is_empty() {
        return DrawRating::Good;
    }
    if discards.len() <= 3 && strategy.draw_to_flush {
        return DrawRating::Good;
    }
    DrawRating::Poor
}
