use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::EngineError;

pub const HAND_SIZE: usize = 5;

/// Width of one kicker digit in [`HandEvaluation::value`]. Must exceed the
/// largest kicker (13, an Ace played high).
const KICKER_BASE: u64 = 100;

/// Width of the category band: one digit above five kicker digits.
const RANK_BAND: u64 = KICKER_BASE.pow(5);

/// Kicker assigned to the wheel (A-2-3-4-5), below the six-high straight's 5.
const WHEEL_HIGH: u8 = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandRank {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRank {
    pub fn ordinal(self) -> u64 {
        self as u64
    }

    /// Same spelling as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            HandRank::HighCard => "HIGH_CARD",
            HandRank::Pair => "PAIR",
            HandRank::TwoPair => "TWO_PAIR",
            HandRank::ThreeOfAKind => "THREE_OF_A_KIND",
            HandRank::Straight => "STRAIGHT",
            HandRank::Flush => "FLUSH",
            HandRank::FullHouse => "FULL_HOUSE",
            HandRank::FourOfAKind => "FOUR_OF_A_KIND",
            HandRank::StraightFlush => "STRAIGHT_FLUSH",
            HandRank::RoyalFlush => "ROYAL_FLUSH",
        }
    }

    pub fn all() -> [HandRank; 10] {
        [
            HandRank::HighCard,
            HandRank::Pair,
            HandRank::TwoPair,
            HandRank::ThreeOfAKind,
            HandRank::Straight,
            HandRank::Flush,
            HandRank::FullHouse,
            HandRank::FourOfAKind,
            HandRank::StraightFlush,
            HandRank::RoyalFlush,
        ]
    }
}

/// Result of classifying one five-card hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub rank: HandRank,
    // Ace-high values, most significant first
    pub kickers: Vec<u8>,
    /// Total order across any two evaluations; higher is strictly better.
    pub value: u64,
    /// Display only, never compared.
    pub name: String,
}

/// Evaluate a hand given as a slice.
///
/// # Errors
///
/// Returns [`EngineError::InvalidHandSize`] unless the slice holds exactly five cards.
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::{evaluate, HandRank};
///
/// let cards = parse_cards("As Ks Qs Js Ts").unwrap();
/// assert_eq!(evaluate(&cards).unwrap().rank, HandRank::RoyalFlush);
/// assert!(evaluate(&cards[..4]).is_err());
/// ```
pub fn evaluate(hand: &[Card]) -> Result<HandEvaluation, EngineError> {
    let five: &[Card; HAND_SIZE] = hand.try_into().map_err(|_| EngineError::InvalidHandSize {
        expected: HAND_SIZE,
        actual: hand.len(),
    })?;
    Ok(evaluate_five(five))
}

pub fn evaluate_five(hand: &[Card; HAND_SIZE]) -> HandEvaluation {
    let mut rank_counts = [0u8; 14]; // indexed by high value, 1..=13 used
    for c in hand {
        rank_counts[c.rank.high_value() as usize] += 1;
    }

    // (multiplicity, value) ordered by multiplicity desc then value desc; for
    // every category except straights this is exactly the kicker ladder
    let mut groups: Vec<(u8, u8)> = (1..=13u8)
        .rev()
        .filter(|&v| rank_counts[v as usize] > 0)
        .map(|v| (rank_counts[v as usize], v))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    let counts: Vec<u8> = groups.iter().map(|g| g.0).collect();
    let ladder: Vec<u8> = groups.iter().map(|g| g.1).collect();

    let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let straight = straight_high(&ladder);

    let (rank, kickers) = match (is_flush, straight) {
        (true, Some(13)) => (HandRank::RoyalFlush, vec![]),
        (true, Some(high)) => (HandRank::StraightFlush, vec![high]),
        _ if counts[0] == 4 => (HandRank::FourOfAKind, ladder),
        _ if counts == [3, 2] => (HandRank::FullHouse, ladder),
        (true, None) => (HandRank::Flush, ladder),
        (false, Some(high)) => (HandRank::Straight, vec![high]),
        _ if counts[0] == 3 => (HandRank::ThreeOfAKind, ladder),
        _ if counts == [2, 2, 1] => (HandRank::TwoPair, ladder),
        _ if counts[0] == 2 => (HandRank::Pair, ladder),
        _ => (HandRank::HighCard, ladder),
    };

    let value = hand_value(rank, &kickers);
    let name = hand_name(rank, &kickers);
    HandEvaluation {
        rank,
        kickers,
        value,
        name,
    }
}

/// High card of a five-distinct-rank straight, given values sorted descending.
fn straight_high(desc_unique: &[u8]) -> Option<u8> {
    if desc_unique.len() != HAND_SIZE {
        return None;
    }
    if desc_unique[0] - desc_unique[4] == 4 {
        return Some(desc_unique[0]);
    }
    if desc_unique == [13, 4, 3, 2, 1] {
        return Some(WHEEL_HIGH);
    }
    None
}

fn hand_value(rank: HandRank, kickers: &[u8]) -> u64 {
    let kicker_value: u64 = kickers
        .iter()
        .enumerate()
        .map(|(i, &k)| u64::from(k) * KICKER_BASE.pow(4 - i as u32))
        .sum();
    rank.ordinal() * RANK_BAND + kicker_value
}

fn label(v: u8) -> char {
    Rank::from_high_value(v).map(Rank::symbol).unwrap_or('?')
}

fn straight_label(high: u8) -> char {
    if high == WHEEL_HIGH {
        '5'
    } else {
        label(high)
    }
}

fn hand_name(rank: HandRank, k: &[u8]) -> String {
    match rank {
        HandRank::RoyalFlush => "Royal Flush".to_string(),
        HandRank::StraightFlush => format!("Straight Flush, {} high", straight_label(k[0])),
        HandRank::FourOfAKind => format!("Four {}s", label(k[0])),
        HandRank::FullHouse => format!("Full House, {}s over {}s", label(k[0]), label(k[1])),
        HandRank::Flush => format!("Flush, {} high", label(k[0])),
        HandRank::Straight => format!("Straight, {} high", straight_label(k[0])),
        HandRank::ThreeOfAKind => format!("Three {}s", label(k[0])),
        HandRank::TwoPair => format!("Two Pair, {}s and {}s", label(k[0]), label(k[1])),
        HandRank::Pair => format!("Pair of {}s", label(k[0])),
        HandRank::HighCard => format!("{} high", label(k[0])),
    }
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.value.cmp(&b.value)
}

/// Indices of every evaluation holding the maximum value; empty for no input.
pub fn find_winners(evals: &[HandEvaluation]) -> Vec<usize> {
    let Some(max) = evals.iter().map(|e| e.value).max() else {
        return Vec::new();
    };
    evals
        .iter()
        .enumerate()
        .filter(|(_, e)| e.value == max)
        .map(|(i, _)| i)
        .collect()
}
