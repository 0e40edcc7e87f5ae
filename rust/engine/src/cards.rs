use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering; the discriminants only pin the deck enumeration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades = 0,
    /// Hearts suit (♥)
    Hearts = 1,
    /// Diamonds suit (♦)
    Diamonds = 2,
    /// Clubs suit (♣)
    Clubs = 3,
}

/// Represents the rank (face value) of a playing card.
///
/// The discriminant is the 0..12 encoding used throughout the engine: Ace is 0,
/// Two through King are 1 through 12. Comparisons that need the Ace to play high
/// go through [`Rank::high_value`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (0, plays high as 13)
    Ace = 0,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (10)
    Jack,
    /// Queen (11)
    Queen,
    /// King (12)
    King,
}

impl Rank {
    pub fn from_index(v: u8) -> Option<Rank> {
        all_ranks().get(v as usize).copied()
    }

    /// 0..12 encoding, Ace = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Ace-high comparison value: Ace = 13, every other rank keeps its index.
    pub fn high_value(self) -> u8 {
        match self {
            Rank::Ace => 13,
            r => r as u8,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    /// Inverse of [`Rank::high_value`].
    pub fn from_high_value(v: u8) -> Option<Rank> {
        match v {
            13 => Some(Rank::Ace),
            1..=12 => Rank::from_index(v),
            _ => None,
        }
    }
}

impl Suit {
    pub fn from_index(v: u8) -> Option<Suit> {
        all_suits().get(v as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

/// Represents a single playing card with a rank and suit.
/// Cards are plain values; hands and decks hold copies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses `As`, `td`, `10h`, `Kc` style notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCard(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let suit_ch = chars.next_back().ok_or_else(invalid)?;
        let rank_part = chars.as_str();

        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(invalid()),
        };
        let suit = match suit_ch.to_ascii_lowercase() {
            's' | '♠' => Suit::Spades,
            'h' | '♥' => Suit::Hearts,
            'd' | '♦' => Suit::Diamonds,
            'c' | '♣' => Suit::Clubs,
            _ => return Err(invalid()),
        };
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Fresh, unshuffled deck in suit-major order: every rank of Spades (Ace first),
/// then Hearts, Diamonds, Clubs. Shuffle results depend on this order.
pub fn new_deck() -> [Card; 52] {
    let mut deck = [Card::new(Rank::Ace, Suit::Spades); 52];
    let mut i = 0;
    for s in all_suits() {
        for r in all_ranks() {
            deck[i] = Card::new(r, s);
            i += 1;
        }
    }
    deck
}

/// Parse a whitespace separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EngineError> {
    s.split_whitespace().map(str::parse).collect()
}
