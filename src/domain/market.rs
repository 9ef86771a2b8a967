use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::MarketCard;
use crate::domain::gems::Gems;
use crate::domain::player::Player;

/// Ошибки покупки на рынке.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("Display slot {index} is out of range (displayed: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Not enough gems: need {cost}, have {have}")]
    InsufficientGems { cost: Gems, have: Gems },
}

/// Рынок одного семейства карт: колода, открытые карты и сброс.
///
/// Карты только перемещаются deck -> displayed -> discarded, поэтому
/// сумма размеров трёх списков постоянна всю партию.
/// Перемешивание делает engine (через RNG), здесь колода уже в нужном порядке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardMarket<C> {
    /// Источник добора; берём с конца.
    pub deck: Vec<C>,
    pub displayed: Vec<C>,
    pub discarded: Vec<C>,
    pub display_slots: usize,
}

impl<C: MarketCard> CardMarket<C> {
    /// Выложить до `display_slots` карт из уже перемешанной колоды.
    pub fn new(deck: Vec<C>, display_slots: usize) -> Self {
        let mut market = Self {
            deck,
            displayed: Vec::with_capacity(display_slots),
            discarded: Vec::new(),
            display_slots,
        };
        while market.displayed.len() < display_slots {
            match market.deck.pop() {
                Some(card) => market.displayed.push(card),
                None => break,
            }
        }
        market
    }

    /// Всего карт этого семейства в партии.
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.displayed.len() + self.discarded.len()
    }

    pub fn can_afford(player: &Player, card: &C) -> bool {
        player.gems.covers(card.cost())
    }

    pub fn displayed_card(&self, index: usize) -> Result<&C, MarketError> {
        self.displayed.get(index).ok_or(MarketError::IndexOutOfRange {
            index,
            len: self.displayed.len(),
        })
    }

    /// Покупка открытой карты `index`.
    ///
    /// Сначала всё проверяем, потом меняем: при ошибке ни игрок, ни рынок не трогаются.
    /// Освободившийся слот добирается одной картой из колоды, если она не пуста.
    pub fn purchase(&mut self, player: &mut Player, index: usize) -> Result<C, MarketError> {
        let card = self.displayed_card(index)?;
        let remaining = player
            .gems
            .checked_sub(card.cost())
            .ok_or(MarketError::InsufficientGems {
                cost: *card.cost(),
                have: player.gems,
            })?;

        let card = self.displayed.remove(index);
        player.gems = remaining;
        player.victory_points = player.victory_points.saturating_add(card.points());
        card.grant_to(player);

        if let Some(next) = self.deck.pop() {
            self.displayed.insert(index, next);
        }
        self.discarded.push(card.clone());

        Ok(card)
    }
}
