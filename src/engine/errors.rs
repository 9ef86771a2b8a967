use thiserror::Error;

use crate::domain::config::ConfigError;
use crate::domain::gems::Gems;
use crate::domain::market::MarketError;

/// Ошибки движка игры.
///
/// Любая ошибка возвращается до изменения состояния: партия остаётся
/// ровно такой, какой была до вызова.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Operation not allowed now: {0}")]
    InvalidState(&'static str),

    #[error("All {max_rolls} rolls are already used this turn")]
    MaxRollsExceeded { max_rolls: u32 },

    #[error("Not enough gems: need {cost}, have {have}")]
    InsufficientGems { cost: Gems, have: Gems },

    #[error("Index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Player name must not be empty")]
    InvalidPlayerName,

    #[error("Another operation is in progress for this game")]
    Busy,

    #[error("Card table error: {0}")]
    CardTable(String),
}

impl From<MarketError> for GameError {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::IndexOutOfRange { index, len } => GameError::IndexOutOfRange { index, len },
            MarketError::InsufficientGems { cost, have } => GameError::InsufficientGems { cost, have },
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfig(err.to_string())
    }
}
