//! Встроенный набор карт на случай, когда таблица карт не передана.

use crate::domain::bonus::BonusEffect;
use crate::domain::card::{BonusCard, Card, CardKind};
use crate::domain::gems::Gems;
use crate::infra::ids::CardIdGenerator;

/// (name, red, blue, green, purple, points, kind)
const STANDARD: &[(&str, u32, u32, u32, u32, u32, CardKind)] = &[
    ("Copper Chalice", 2, 0, 0, 0, 1, CardKind::Treasure),
    ("Silver Locket", 1, 1, 0, 0, 1, CardKind::Treasure),
    ("Jade Idol", 0, 0, 2, 0, 1, CardKind::Artifact),
    ("Rune Stone", 1, 0, 1, 0, 1, CardKind::Artifact),
    ("Spark Scroll", 2, 1, 0, 0, 2, CardKind::Spell),
    ("Tidecaller", 0, 3, 0, 0, 2, CardKind::Spell),
    ("Ember Crown", 3, 0, 1, 0, 2, CardKind::Treasure),
    ("Moonlit Mirror", 0, 2, 1, 0, 2, CardKind::Artifact),
    ("Verdant Staff", 0, 1, 2, 0, 2, CardKind::Relic),
    ("Storm Sigil", 2, 2, 0, 0, 3, CardKind::Spell),
    ("Amethyst Orb", 0, 0, 0, 1, 2, CardKind::Relic),
    ("Dragon Scale", 3, 1, 1, 0, 3, CardKind::Relic),
    ("Oracle's Eye", 1, 1, 1, 1, 4, CardKind::Artifact),
    ("Sunforged Blade", 4, 0, 2, 0, 4, CardKind::Treasure),
    ("Void Codex", 0, 2, 0, 2, 5, CardKind::Spell),
    ("Crown of Ages", 2, 2, 2, 2, 7, CardKind::Relic),
];

/// (name, red, blue, green, purple, points, effect)
const BONUS: &[(&str, u32, u32, u32, u32, u32, BonusEffect)] = &[
    ("Crimson Tide", 2, 1, 0, 0, 1, BonusEffect::CrimsonTide),
    ("Sapphire Twins", 1, 2, 0, 0, 1, BonusEffect::SapphireTwins),
    ("Emerald Path", 0, 1, 2, 0, 1, BonusEffect::EmeraldPath),
    ("Rainbow Roll", 1, 1, 1, 0, 1, BonusEffect::RainbowRoll),
    ("Sixth Sense", 0, 0, 1, 1, 1, BonusEffect::SixthSense),
    ("Empty Hand", 1, 0, 1, 0, 1, BonusEffect::EmptyHand),
    ("Underdog Charm", 1, 1, 0, 0, 1, BonusEffect::UnderdogCharm),
    ("Scavenger", 2, 0, 0, 0, 1, BonusEffect::Scavenger),
];

pub fn default_standard_cards(ids: &CardIdGenerator) -> Vec<Card> {
    STANDARD
        .iter()
        .map(|&(name, red, blue, green, purple, points, kind)| Card {
            id: ids.next_card_id(),
            name: name.to_string(),
            cost: Gems::new(red, blue, green, purple),
            points,
            kind,
        })
        .collect()
}

pub fn default_bonus_cards(ids: &CardIdGenerator) -> Vec<BonusCard> {
    BONUS
        .iter()
        .map(|&(name, red, blue, green, purple, points, effect)| BonusCard {
            id: ids.next_card_id(),
            name: name.to_string(),
            description: effect.describe().to_string(),
            cost: Gems::new(red, blue, green, purple),
            points,
            effect,
        })
        .collect()
}

/// Обе колоды с общей нумерацией ID.
pub fn default_catalog() -> (Vec<Card>, Vec<BonusCard>) {
    let ids = CardIdGenerator::new();
    let standard = default_standard_cards(&ids);
    let bonus = default_bonus_cards(&ids);
    (standard, bonus)
}
