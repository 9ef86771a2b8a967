use crate::domain::{SeatIndex, PLAYER_COUNT};
use crate::engine::errors::GameError;
use crate::state::{GamePhase, GameState};

/// Проверка, что партия идёт и принимает изменяющие вызовы.
pub fn ensure_running(state: &GameState) -> Result<(), GameError> {
    match state.phase {
        GamePhase::Running => Ok(()),
        GamePhase::NotStarted => Err(GameError::InvalidState("game has not started")),
        GamePhase::Ended(_) => Err(GameError::InvalidState("game is over")),
        GamePhase::Stopped => Err(GameError::InvalidState("game was stopped")),
    }
}

/// Проверка индекса игрока.
pub fn ensure_seat(seat: SeatIndex) -> Result<(), GameError> {
    if seat < PLAYER_COUNT {
        Ok(())
    } else {
        Err(GameError::IndexOutOfRange {
            index: seat,
            len: PLAYER_COUNT,
        })
    }
}

/// Имя игрока после обрезки пробелов; пустое имя считается ошибкой.
pub fn normalize_player_name(name: &str) -> Result<String, GameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GameError::InvalidPlayerName);
    }
    Ok(trimmed.to_string())
}
