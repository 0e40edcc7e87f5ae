//! Card and hand formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal is expected to support
//! them and as the ASCII letters `s h d c` otherwise.
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use showdown_engine::cards::{Card, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit, unicode: bool) -> char {
    if unicode {
        match suit {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    } else {
        suit.symbol()
    }
}

/// Format a Card as a string combining rank and suit.
pub fn format_card(card: &Card) -> String {
    format_card_with(card, supports_unicode())
}

pub fn format_card_with(card: &Card, unicode: bool) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit, unicode))
}

/// Space separated cards.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cards with every discarded position wrapped in brackets, e.g. `K♥ [3♠] K♦`.
pub fn format_draw(cards: &[Card], discards: &[usize]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if discards.contains(&i) {
                format!("[{}]", format_card(c))
            } else {
                format_card(c)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `2.5x`, `10x`
pub fn format_multiplier(m: f64) -> String {
    format!("{}x", m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_engine::cards::parse_cards;

    #[test]
    fn ascii_matches_engine_notation() {
        for c in parse_cards("As Th 2d Kc").unwrap() {
            assert_eq!(format_card_with(&c, false), c.to_string());
        }
    }

    #[test]
    fn unicode_suits() {
        let c = parse_cards("Qh").unwrap()[0];
        assert_eq!(format_card_with(&c, true), "Q♥");
    }

    #[test]
    fn draw_marks_discards() {
        let cards = parse_cards("Kh 3s Kd").unwrap();
        let s = format_draw(&cards, &[1]);
        assert!(s.starts_with('K'));
        assert_eq!(s.matches('[').count(), 1);
        assert!(s.contains("[3"));
    }

    #[test]
    fn multipliers_drop_trailing_zero() {
        assert_eq!(format_multiplier(2.5), "2.5x");
        assert_eq!(format_multiplier(10.0), "10x");
    }
}
