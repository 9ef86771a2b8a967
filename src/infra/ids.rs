use std::sync::atomic::{AtomicU32, Ordering};

use crate::domain::CardId;

/// Простая генерация ID карт на основе монотонного счётчика.
///
/// Нужна, когда карты приходят из таблицы без собственных идентификаторов.
/// Обычные и бонусные карты берут ID из одного счётчика, поэтому не пересекаются.
#[derive(Debug)]
pub struct CardIdGenerator {
    counter: AtomicU32,
}

impl CardIdGenerator {
    /// Генератор с начальным значением 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: CardId) -> Self {
        Self {
            counter: AtomicU32::new(first),
        }
    }

    #[inline]
    pub fn next_card_id(&self) -> CardId {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for CardIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
