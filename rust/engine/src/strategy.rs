//! Draw strategies: which of a five-card hand's cards to throw away.
//!
//! [`choose_discards`] is a pure function of the hand and the strategy. The
//! returned indices are sorted, unique, and always within `0..5`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::hand::{evaluate_five, HandEvaluation, HandRank, HAND_SIZE};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Stand pat on any made hand, otherwise hold high cards.
    Conservative,
    /// Keep made hands, draw to four-flushes.
    Balanced,
    /// Chase flush and straight draws.
    Aggressive,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "conservative",
            RiskLevel::Balanced => "balanced",
            RiskLevel::Aggressive => "aggressive",
        }
    }

    /// Wire code used in wager metadata.
    pub fn code(self) -> u8 {
        match self {
            RiskLevel::Conservative => 0,
            RiskLevel::Balanced => 1,
            RiskLevel::Aggressive => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<RiskLevel> {
        match code {
            0 => Some(RiskLevel::Conservative),
            1 => Some(RiskLevel::Balanced),
            2 => Some(RiskLevel::Aggressive),
            _ => None,
        }
    }

    pub fn preset(self) -> DrawStrategy {
        match self {
            RiskLevel::Conservative => DrawStrategy::CONSERVATIVE,
            RiskLevel::Balanced => DrawStrategy::BALANCED,
            RiskLevel::Aggressive => DrawStrategy::AGGRESSIVE,
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskLevel::Conservative),
            "balanced" => Ok(RiskLevel::Balanced),
            "aggressive" => Ok(RiskLevel::Aggressive),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}

/// A player's draw policy for one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawStrategy {
    pub keep_pairs: bool,
    pub keep_high_cards: bool,
    pub draw_to_flush: bool,
    pub draw_to_straight: bool,
    pub risk_level: RiskLevel,
}

impl DrawStrategy {
    pub const CONSERVATIVE: DrawStrategy = DrawStrategy {
        keep_pairs: true,
        keep_high_cards: true,
        draw_to_flush: false,
        draw_to_straight: false,
        risk_level: RiskLevel::Conservative,
    };

    pub const BALANCED: DrawStrategy = DrawStrategy {
        keep_pairs: true,
        keep_high_cards: true,
        draw_to_flush: true,
        draw_to_straight: false,
        risk_level: RiskLevel::Balanced,
    };

    pub const AGGRESSIVE: DrawStrategy = DrawStrategy {
        keep_pairs: false,
        keep_high_cards: false,
        draw_to_flush: true,
        draw_to_straight: true,
        risk_level: RiskLevel::Aggressive,
    };

    /// `[keep_pairs, keep_high_cards, draw_to_flush, draw_to_straight, risk]`
    /// as attached to the external wager.
    pub fn to_metadata(&self) -> [u8; 5] {
        [
            u8::from(self.keep_pairs),
            u8::from(self.keep_high_cards),
            u8::from(self.draw_to_flush),
            u8::from(self.draw_to_straight),
            self.risk_level.code(),
        ]
    }

    pub fn from_metadata(meta: [u8; 5]) -> Option<DrawStrategy> {
        Some(DrawStrategy {
            keep_pairs: meta[0] != 0,
            keep_high_cards: meta[1] != 0,
            draw_to_flush: meta[2] != 0,
            draw_to_straight: meta[3] != 0,
            risk_level: RiskLevel::from_code(meta[4])?,
        })
    }
}

pub fn choose_discards(hand: &[Card; HAND_SIZE], strategy: &DrawStrategy) -> Vec<usize> {
    let eval = evaluate_five(hand);
    match strategy.risk_level {
        RiskLevel::Conservative => conservative(hand, &eval, strategy),
        RiskLevel::Aggressive => aggressive(hand, strategy),
        RiskLevel::Balanced => balanced(hand, &eval, strategy),
    }
}

fn conservative(hand: &[Card; HAND_SIZE], eval: &HandEvaluation, s: &DrawStrategy) -> Vec<usize> {
    if s.keep_pairs && eval.rank != HandRank::HighCard {
        return Vec::new();
    }
    if s.keep_high_cards {
        // 2 through 8
        let discards = indices_where(hand, |c| (1..=7).contains(&c.rank.index()));
        if HAND_SIZE - discards.len() >= 2 {
            return discards;
        }
    }
    let mut by_strength: Vec<usize> = (0..HAND_SIZE).collect();
    by_strength.sort_by(|&a, &b| hand[b].rank.high_value().cmp(&hand[a].rank.high_value()));
    let mut discards = by_strength.split_off(2);
    discards.sort_unstable();
    discards
}

fn aggressive(hand: &[Card; HAND_SIZE], s: &DrawStrategy) -> Vec<usize> {
    if s.draw_to_flush {
        if let Some(keep) = flush_draw(hand) {
            return complement(&keep);
        }
    }
    if s.draw_to_straight {
        if let Some(keep) = straight_draw(hand) {
            return complement(&keep);
        }
    }
    let mut keep = indices_where(hand, |c| hand.iter().filter(|o| o.rank == c.rank).count() >= 2);
    if keep.is_empty() && s.keep_high_cards {
        keep = indices_where(hand, |c| {
            matches!(c.rank, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King)
        });
    }
    complement(&keep)
}

fn balanced(hand: &[Card; HAND_SIZE], eval: &HandEvaluation, s: &DrawStrategy) -> Vec<usize> {
    if eval.rank != HandRank::HighCard && s.keep_pairs {
        return match eval.rank {
            HandRank::Pair => indices_where(hand, |c| c.rank.high_value() != eval.kickers[0]),
            HandRank::TwoPair => indices_where(hand, |c| c.rank.high_value() == eval.kickers[2]),
            _ => Vec::new(),
        };
    }
    if s.draw_to_flush {
        if let Some(keep) = flush_draw(hand) {
            return complement(&keep);
        }
    }
    if s.keep_high_cards {
        // 2 through 10
        return indices_where(hand, |c| (1..=9).contains(&c.rank.index()));
    }
    let mut best = 0;
    for (i, c) in hand.iter().enumerate() {
        if c.rank.high_value() > hand[best].rank.high_value() {
            best = i;
        }
    }
    complement(&[best])
}

fn indices_where<F>(hand: &[Card; HAND_SIZE], pred: F) -> Vec<usize>
where
    F: Fn(&Card) -> bool,
{
    hand.iter()
        .enumerate()
        .filter(|(_, c)| pred(c))
        .map(|(i, _)| i)
        .collect()
}

fn complement(keep: &[usize]) -> Vec<usize> {
    (0..HAND_SIZE).filter(|i| !keep.contains(i)).collect()
}

/// Indices of the four cards sharing a suit, when exactly four do.
pub fn flush_draw(hand: &[Card; HAND_SIZE]) -> Option<Vec<usize>> {
    hand.iter().find_map(|c| {
        let same = indices_where(hand, |o| o.suit == c.suit);
        (same.len() == 4).then_some(same)
    })
}

/// Indices of four cards with distinct, consecutive ranks. The Ace counts as
/// 0 and as 13; windows are scanned from A-2-3-4 up to J-Q-K-A and the first
/// complete one is returned, keeping the first card seen for each rank.
pub fn straight_draw(hand: &[Card; HAND_SIZE]) -> Option<Vec<usize>> {
    (0u8..=10).find_map(|start| {
        let window = start..start + 4;
        let mut slots: [Option<usize>; 4] = [None; 4];
        for (i, c) in hand.iter().enumerate() {
            let v = c.rank.index();
            let hit = if window.contains(&v) {
                Some(v)
            } else if c.rank == Rank::Ace && window.contains(&13) {
                Some(13)
            } else {
                None
            };
            if let Some(v) = hit {
                let slot = &mut slots[(v - start) as usize];
                if slot.is_none() {
                    *slot = Some(i);
                }
            }
        }
        let keep: Option<Vec<usize>> = slots.iter().copied().collect();
        keep.map(|mut k| {
            k.sort_unstable();
            k
        })
    })
}
