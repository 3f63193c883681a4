use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board shape does not match the game config")]
    InvalidBoardShape,
    #[error("Invalid game config")]
    InvalidConfig,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failures surfaced by the clue provider, either from the transport or from the data it returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Trivia provider unavailable: {0}")]
    Unavailable(String),
    #[error("Random pool too small, requested {requested} categories but got {available}")]
    InsufficientPool { requested: usize, available: usize },
    #[error("Category {category} has {available} usable clues, {requested} required")]
    InsufficientClues {
        category: CategoryId,
        requested: usize,
        available: usize,
    },
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

pub type ProviderResult<T> = core::result::Result<T, ProviderError>;

/// Aggregate failure of a whole game setup, no partial board is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupFailed {
    #[error("Game setup failed: {0}")]
    Provider(#[from] ProviderError),
    #[error("Game setup failed: {0}")]
    Board(#[from] GameError),
}
