use serde::{Deserialize, Serialize};

use crate::domain::card::{BonusCard, Card};
use crate::domain::gems::Gems;

/// Игрок в рамках одной партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub gems: Gems,
    /// Шестёрки в текущем броске. Сбрасываются в конце раунда.
    pub sixes: u32,
    /// Купленные обычные карты, в порядке покупки.
    pub purchased_cards: Vec<Card>,
    /// Купленные бонусные карты. Порядок определяет порядок срабатывания эффектов.
    pub bonus_cards: Vec<BonusCard>,
    pub victory_points: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gems: Gems::ZERO,
            sixes: 0,
            purchased_cards: Vec::new(),
            bonus_cards: Vec::new(),
            victory_points: 0,
        }
    }

    pub fn owned_card_count(&self) -> usize {
        self.purchased_cards.len() + self.bonus_cards.len()
    }
}
