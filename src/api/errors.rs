use serde::{Deserialize, Serialize};

use crate::engine::GameError;

/// Ошибки внешнего API (то, что отдаём слою отображения / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, индекс вне диапазона, пустое имя).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе хода или партии.
    InvalidCommand(String),

    /// Игроку не хватает камней на покупку.
    InsufficientGems(String),

    /// Сессия занята другой операцией, повторите позже.
    Busy,

    /// Ошибка движка, не попавшая в категории выше.
    EngineError(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidState(_) | GameError::MaxRollsExceeded { .. } => {
                ApiError::InvalidCommand(err.to_string())
            }
            GameError::InsufficientGems { .. } => ApiError::InsufficientGems(err.to_string()),
            GameError::IndexOutOfRange { .. } | GameError::InvalidPlayerName => {
                ApiError::BadRequest(err.to_string())
            }
            GameError::Busy => ApiError::Busy,
            GameError::InvalidConfig(_) | GameError::CardTable(_) => {
                ApiError::EngineError(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
