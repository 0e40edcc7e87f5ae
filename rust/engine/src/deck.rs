use crate::cards::{new_deck, Card};
use crate::rng::make_rng;

/// In-place Fisher-Yates shuffle: for `i` from `len-1` down to 1, swap `deck[i]`
/// with `deck[floor(rng() * (i+1))]`. The index is clamped to `i` in case the
/// generator ever returns exactly 1.0.
pub fn shuffle<R>(deck: &mut [Card], rng: &mut R)
where
    R: FnMut() -> f64,
{
    for i in (1..deck.len()).rev() {
        let j = ((rng() * (i + 1) as f64).floor() as usize).min(i);
        deck.swap(i, j);
    }
}

/// A shuffled 52-card deck with a dealing cursor.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Fresh deck shuffled by the stream keyed on `seed`.
    pub fn new_with_seed(seed: &str) -> Self {
        let mut cards = new_deck().to_vec();
        let mut rng = make_rng(seed);
        shuffle(&mut cards, &mut rng);
        Self { cards, position: 0 }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deal the next card that does not satisfy `skip`.
    pub fn deal_card_except<F>(&mut self, skip: F) -> Option<Card>
    where
        F: Fn(&Card) -> bool,
    {
        while let Some(c) = self.deal_card() {
            if !skip(&c) {
                return Some(c);
            }
        }
        None
    }

    /// Full shuffled order, including cards already dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_generator_returning_one() {
        let mut cards = new_deck().to_vec();
        let mut always_one = || 1.0;
        shuffle(&mut cards, &mut always_one);
        // j == i on every step, so nothing moves
        assert_eq!(cards, new_deck().to_vec());
    }

    #[test]
    fn zero_stream_rotates_first_card_to_end() {
        let mut cards = new_deck().to_vec();
        let mut always_zero = || 0.0;
        shuffle(&mut cards, &mut always_zero);
        assert_eq!(cards[51], new_deck()[0]);
    }

    #[test]
    fn deal_card_except_skips_matches() {
        let mut deck = Deck::new_with_seed("skip");
        let first = deck.cards()[0];
        let got = deck.deal_card_except(|c| *c == first).unwrap();
        assert_eq!(got, deck.cards()[1]);
        assert_eq!(deck.remaining(), 50);
    }
}
