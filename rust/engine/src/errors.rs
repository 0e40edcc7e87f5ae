use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Hand must contain exactly {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Invalid card notation: {0:?}")]
    InvalidCard(String),
    #[error("Too many players for one deck: {actual}, maximum: {max}")]
    TooManyPlayers { max: usize, actual: usize },
}
