//! Display multipliers handed to the external wager before it settles.

use crate::hand::HandRank;

impl HandRank {
    /// Winner-takes-all multiplier shown for a winning hand of this rank.
    pub fn multiplier(self) -> f64 {
        match self {
            HandRank::HighCard => 2.0,
            HandRank::Pair => 2.5,
            HandRank::TwoPair => 4.0,
            HandRank::ThreeOfAKind => 6.0,
            HandRank::Straight => 8.0,
            HandRank::Flush => 10.0,
            HandRank::FullHouse => 15.0,
            HandRank::FourOfAKind => 25.0,
            HandRank::StraightFlush => 40.0,
            HandRank::RoyalFlush => 50.0,
        }
    }
}

pub fn max_multiplier() -> f64 {
    HandRank::all()
        .iter()
        .map(|r| r.multiplier())
        .fold(0.0, f64::max)
}

/// `[lose, win]` outcome weights for one seat's wager.
pub fn bet_array(winner_rank: HandRank, is_winner: bool) -> [f64; 2] {
    if is_winner {
        [0.0, winner_rank.multiplier()]
    } else {
        [0.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_grow_with_rank() {
        let all = HandRank::all();
        for pair in all.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
        assert_eq!(max_multiplier(), 50.0);
    }

    #[test]
    fn losers_get_empty_bet_array() {
        assert_eq!(bet_array(HandRank::Flush, true), [0.0, 10.0]);
        assert_eq!(bet_array(HandRank::Flush, false), [0.0, 0.0]);
    }
}
