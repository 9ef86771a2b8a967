use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::bonus::BonusEffect;
use crate::domain::gems::Gems;
use crate::domain::player::Player;
use crate::domain::CardId;

/// Тип обычной карты. На игру не влияет, нужен только для отображения.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    #[default]
    Treasure,
    Artifact,
    Spell,
    Relic,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CardKind::Treasure => "treasure",
            CardKind::Artifact => "artifact",
            CardKind::Spell => "spell",
            CardKind::Relic => "relic",
        };
        f.write_str(s)
    }
}

impl FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "treasure" => Ok(CardKind::Treasure),
            "artifact" => Ok(CardKind::Artifact),
            "spell" => Ok(CardKind::Spell),
            "relic" => Ok(CardKind::Relic),
            other => Err(format!("Unknown card type: {other}")),
        }
    }
}

/// Обычная карта рынка: стоит камней, приносит победные очки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub cost: Gems,
    pub points: u32,
    pub kind: CardKind,
}

/// Бонусная карта: кроме очков даёт условные камни при подсчёте хода владельца.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusCard {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub cost: Gems,
    pub points: u32,
    pub effect: BonusEffect,
}

/// Семейство карт на рынке.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardFamily {
    Standard,
    Bonus,
}

impl fmt::Display for CardFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFamily::Standard => f.write_str("standard"),
            CardFamily::Bonus => f.write_str("bonus"),
        }
    }
}

/// Общий протокол карт, которые можно купить на рынке.
///
/// Рынок не знает, в какую коллекцию игрока попадает карта:
/// это решает `grant_to` конкретного типа.
pub trait MarketCard: Clone {
    const FAMILY: CardFamily;

    fn id(&self) -> CardId;
    fn name(&self) -> &str;
    fn cost(&self) -> &Gems;
    fn points(&self) -> u32;

    /// Положить копию карты в соответствующую коллекцию игрока.
    fn grant_to(&self, player: &mut Player);
}

impl MarketCard for Card {
    const FAMILY: CardFamily = CardFamily::Standard;

    fn id(&self) -> CardId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> &Gems {
        &self.cost
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn grant_to(&self, player: &mut Player) {
        player.purchased_cards.push(self.clone());
    }
}

impl MarketCard for BonusCard {
    const FAMILY: CardFamily = CardFamily::Bonus;

    fn id(&self) -> CardId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> &Gems {
        &self.cost
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn grant_to(&self, player: &mut Player) {
        player.bonus_cards.push(self.clone());
    }
}
