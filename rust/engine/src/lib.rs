//! # showdown-engine: Deterministic Draw Poker Showdown
//!
//! Deals five-card hands to a table of players from a virtual 52-card deck,
//! lets each player's draw strategy discard and replace cards once, evaluates
//! the final hands and awards the pot. Every random choice flows from a seed
//! string, so the same seed always reproduces the same round.
//!
//! ## Core Modules
//!
//! - [`rng`] - String-seeded ChaCha20 float stream (the pinned algorithm)
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`deck`] - Fisher-Yates shuffle and a dealing cursor
//! - [`hand`] - Five-card evaluation, kickers and comparable hand values
//! - [`strategy`] - Draw strategies and discard selection
//! - [`showdown`] - Round orchestration: deal, draw, evaluate, resolve
//! - [`payout`] - Display multipliers and wager bet arrays
//! - [`settlement`] - Reconciling a round with an external win/lose flag
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::showdown::{execute_showdown, simulate_outcome};
//! use showdown_engine::strategy::DrawStrategy;
//!
//! let strategies = [DrawStrategy::CONSERVATIVE, DrawStrategy::AGGRESSIVE];
//! let ids = ["human".to_string(), "ai-player-1".to_string()];
//!
//! // Pick a display multiplier before the wager settles...
//! let preview = simulate_outcome(&strategies, "seed-7").unwrap();
//! // ...then play the same round in full for rendering.
//! let round = execute_showdown(&strategies, &ids, 2_000, "seed-7").unwrap();
//! assert_eq!(preview.winner_index, round.winner_index);
//! ```
//!
//! ## Evaluating a Hand
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::hand::{evaluate, HandRank};
//!
//! let wheel = parse_cards("As 2d 3c 4h 5s").unwrap();
//! let eval = evaluate(&wheel).unwrap();
//! assert_eq!(eval.rank, HandRank::Straight);
//! assert_eq!(eval.kickers, vec![3]);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod payout;
pub mod rng;
pub mod settlement;
pub mod showdown;
pub mod strategy;
