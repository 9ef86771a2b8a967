use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::{GameError, GameSession, RandomSource};

/// Сессия, которую можно раздать нескольким обработчикам (например, сетевому слою).
///
/// Изменяющие вызовы сериализуются одним мьютексом на партию. Если другой
/// вызов уже выполняется, новый не ждёт, а сразу получает `GameError::Busy`.
#[derive(Debug)]
pub struct SharedGame<R: RandomSource> {
    inner: Arc<Mutex<GameSession<R>>>,
}

impl<R: RandomSource> Clone for SharedGame<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedGame<R> {
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Выполнить изменяющую операцию или отказать, если сессия занята.
    pub fn try_mutate<T>(
        &self,
        op: impl FnOnce(&mut GameSession<R>) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let mut guard = self.inner.try_lock().ok_or(GameError::Busy)?;
        op(&mut guard)
    }

    /// Чтение состояния; ждёт завершения текущей операции.
    pub fn read<T>(&self, f: impl FnOnce(&GameSession<R>) -> T) -> T {
        let guard = self.inner.lock();
        f(&guard)
    }
}
