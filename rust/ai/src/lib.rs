//! # showdown-ai: Draw Poker Opponents
//!
//! Computer-controlled seats for the showdown engine. An opponent is nothing
//! more than a named [`DrawStrategy`]; the engine does the rest.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every opponent implements
//! - [`preset`] - One opponent per [`RiskLevel`] preset
//! - [`table`] - Seeded generation of opponent tables
//! - [`rating`] - Grading how a draw turned out
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_ai::{create_ai, AIOpponent};
//! use showdown_engine::cards::parse_cards;
//!
//! let ai = create_ai("aggressive").expect("known preset");
//! let hand = parse_cards("2h 7h 9h Kh 3c").unwrap().try_into().unwrap();
//! assert_eq!(ai.discards(&hand), vec![4]);
//! ```

use showdown_engine::cards::Card;
use showdown_engine::hand::HAND_SIZE;
use showdown_engine::strategy::{DrawStrategy, RiskLevel, choose_discards};

pub mod preset;
pub mod rating;
pub mod table;

/// Trait defining the interface for AI opponents at a showdown table.
///
/// # Example Implementation
///
/// ```rust
/// use showdown_ai::AIOpponent;
/// use showdown_engine::strategy::DrawStrategy;
///
/// struct Stubborn;
///
/// impl AIOpponent for Stubborn {
///     fn strategy(&self) -> DrawStrategy {
///         DrawStrategy { draw_to_flush: false, ..DrawStrategy::BALANCED }
///     }
///
///     fn name(&self) -> &str {
///         "Stubborn"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Strategy this opponent plays for the whole round.
    fn strategy(&self) -> DrawStrategy;

    fn name(&self) -> &str;

    /// Indices this opponent throws away from `hand`.
    fn discards(&self, hand: &[Card; HAND_SIZE]) -> Vec<usize> {
        choose_discards(hand, &self.strategy())
    }
}

/// Factory function to create AI opponents by preset name.
///
/// Accepts `"conservative"`, `"balanced"` and `"aggressive"` in any case.
/// Returns `None` for anything else.
///
/// ```rust
/// use showdown_ai::create_ai;
///
/// let ai = create_ai("Balanced").unwrap();
/// assert_eq!(ai.name(), "BalancedAI");
/// assert!(create_ai("baseline").is_none());
/// ```
pub fn create_ai(kind: &str) -> Option<Box<dyn AIOpponent>> {
    let risk: RiskLevel = kind.parse().ok()?;
    Some(Box::new(preset::PresetAI::new(risk)))
}
