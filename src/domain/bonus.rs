use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::dice::DiceCounts;
use crate::domain::gems::{GemColor, Gems};
use crate::domain::player::Player;

/// Эффект бонусной карты.
///
/// Один вариант на каждый вид бонуса. Каждый вариант вычисляется чистой
/// функцией от раскладки граней, владельца и соперника.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BonusEffect {
    /// Три и больше единиц: +1 красный.
    CrimsonTide,
    /// Четыре и больше двоек: +1 синий.
    SapphireTwins,
    /// Тройка троек вместе с четвёркой: +1 зелёный.
    EmeraldPath,
    /// Все шесть граней в одном броске: +1 фиолетовый.
    RainbowRoll,
    /// Три и больше шестёрок: +1 фиолетовый.
    SixthSense,
    /// Ни одной пятёрки: +1 синий.
    EmptyHand,
    /// Владелец отстаёт по победным очкам: +1 красный.
    UnderdogCharm,
    /// У владельца камней меньше, чем у соперника: +1 зелёный.
    Scavenger,
}

impl BonusEffect {
    pub const ALL: [BonusEffect; 8] = [
        BonusEffect::CrimsonTide,
        BonusEffect::SapphireTwins,
        BonusEffect::EmeraldPath,
        BonusEffect::RainbowRoll,
        BonusEffect::SixthSense,
        BonusEffect::EmptyHand,
        BonusEffect::UnderdogCharm,
        BonusEffect::Scavenger,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BonusEffect::CrimsonTide => "crimson_tide",
            BonusEffect::SapphireTwins => "sapphire_twins",
            BonusEffect::EmeraldPath => "emerald_path",
            BonusEffect::RainbowRoll => "rainbow_roll",
            BonusEffect::SixthSense => "sixth_sense",
            BonusEffect::EmptyHand => "empty_hand",
            BonusEffect::UnderdogCharm => "underdog_charm",
            BonusEffect::Scavenger => "scavenger",
        }
    }

    /// Текст правила для карточки.
    pub fn describe(self) -> &'static str {
        match self {
            BonusEffect::CrimsonTide => "Three or more 1s grant an extra red gem.",
            BonusEffect::SapphireTwins => "Four or more 2s grant an extra blue gem.",
            BonusEffect::EmeraldPath => "A triplet of 3s with at least one 4 grants an extra green gem.",
            BonusEffect::RainbowRoll => "Rolling every face from 1 to 6 grants a purple gem.",
            BonusEffect::SixthSense => "Three or more 6s grant a purple gem.",
            BonusEffect::EmptyHand => "A roll without any 5 grants a blue gem.",
            BonusEffect::UnderdogCharm => "Trailing the opponent in victory points grants a red gem.",
            BonusEffect::Scavenger => "Holding fewer gems than the opponent grants a green gem.",
        }
    }

    /// Прирост камней или `None`, если условие не выполнено.
    pub fn evaluate(self, counts: &DiceCounts, owner: &Player, opponent: &Player) -> Option<Gems> {
        let fired = match self {
            BonusEffect::CrimsonTide => counts.count(1) >= 3,
            BonusEffect::SapphireTwins => counts.count(2) >= 4,
            BonusEffect::EmeraldPath => counts.count(3) >= 3 && counts.count(4) >= 1,
            BonusEffect::RainbowRoll => counts.is_full_straight(),
            BonusEffect::SixthSense => counts.count(6) >= 3,
            BonusEffect::EmptyHand => counts.total() > 0 && counts.count(5) == 0,
            BonusEffect::UnderdogCharm => owner.victory_points < opponent.victory_points,
            BonusEffect::Scavenger => owner.gems.total() < opponent.gems.total(),
        };

        fired.then(|| Gems::single(self.reward_color(), 1))
    }

    fn reward_color(self) -> GemColor {
        match self {
            BonusEffect::CrimsonTide | BonusEffect::UnderdogCharm => GemColor::Red,
            BonusEffect::SapphireTwins | BonusEffect::EmptyHand => GemColor::Blue,
            BonusEffect::EmeraldPath | BonusEffect::Scavenger => GemColor::Green,
            BonusEffect::RainbowRoll | BonusEffect::SixthSense => GemColor::Purple,
        }
    }
}

impl fmt::Display for BonusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BonusEffect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        BonusEffect::ALL
            .iter()
            .copied()
            .find(|e| e.id() == key)
            .ok_or_else(|| format!("Unknown bonus effect: {s}"))
    }
}
