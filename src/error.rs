use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when setting up or running a game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("players must be between 2 and 6, received {0}")]
    InvalidPlayerCount(usize),
    #[error("card draw minimum {min} exceeds card draw limit {limit}")]
    InvalidDrawRange { min: usize, limit: usize },
    #[error("card draw limit must be positive")]
    InvalidDrawLimit,
    #[error("bank threshold must be positive")]
    InvalidBankThreshold,
    #[error("starting player {0} is out of range")]
    InvalidStartingPlayer(PlayerId),
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
