//! Подсчёт камней за завершённый бросок.
//!
//! Чистая функция от раскладки граней, таблицы правил и бонусных карт
//! владельца. Состояние не меняется: прирост применяет вызывающий код.

use serde::{Deserialize, Serialize};

use crate::domain::dice::{DiceCounts, MAX_FACE, MIN_FACE};
use crate::domain::gems::Gems;
use crate::domain::player::Player;
use crate::domain::rules::ScoringRules;
use crate::domain::CardId;

/// Откуда взялась строка начисления.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreSource {
    /// Базовое правило для грани.
    Face { face: u8, count: u32 },
    /// Эффект бонусной карты.
    BonusCard { card_id: CardId, name: String },
}

/// Одна строка начисления с пояснением.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreLine {
    pub source: ScoreSource,
    pub gems: Gems,
}

impl ScoreLine {
    pub fn describe(&self) -> String {
        match &self.source {
            ScoreSource::Face { face, count } => {
                format!("{count}x {face} earned {}", self.gems)
            }
            ScoreSource::BonusCard { name, .. } => {
                format!("{name} earned {}", self.gems)
            }
        }
    }
}

/// Результат подсчёта: общий прирост и строки, из которых он сложился.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreResult {
    pub delta: Gems,
    pub lines: Vec<ScoreLine>,
}

impl ScoreResult {
    fn push(&mut self, source: ScoreSource, gems: Gems) {
        if gems.is_zero() {
            return;
        }
        self.delta += gems;
        self.lines.push(ScoreLine { source, gems });
    }

    /// Прирост только от базовых правил, без бонусных карт.
    pub fn base_delta(&self) -> Gems {
        self.lines
            .iter()
            .filter(|l| matches!(l.source, ScoreSource::Face { .. }))
            .fold(Gems::ZERO, |acc, l| acc + l.gems)
    }

    /// Короткая сводка для истории партии.
    pub fn summary(&self, player_name: &str) -> String {
        if self.lines.is_empty() {
            return format!("{player_name} earned no gems.");
        }
        let details: Vec<String> = self.lines.iter().map(ScoreLine::describe).collect();
        format!("{player_name} earned {} ({}).", self.delta, details.join("; "))
    }
}

/// Посчитать камни для `player` по раскладке `counts`.
///
/// Бонусные карты срабатывают в порядке покупки.
pub fn score(
    counts: &DiceCounts,
    player: &Player,
    opponent: &Player,
    rules: &ScoringRules,
) -> ScoreResult {
    let mut result = ScoreResult::default();

    for face in MIN_FACE..=MAX_FACE {
        let count = counts.count(face);
        let gems = rules.rule_for(face).reward(count);
        result.push(ScoreSource::Face { face, count }, gems);
    }

    for card in &player.bonus_cards {
        if let Some(gems) = card.effect.evaluate(counts, player, opponent) {
            result.push(
                ScoreSource::BonusCard {
                    card_id: card.id,
                    name: card.name.clone(),
                },
                gems,
            );
        }
    }

    result
}
