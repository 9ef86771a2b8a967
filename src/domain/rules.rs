use serde::{Deserialize, Serialize};

use crate::domain::dice::{Face, MAX_FACE};
use crate::domain::gems::{GemColor, Gems};

/// Правило начисления камней за одну грань.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FaceRule {
    /// Грань ничего не даёт напрямую.
    None,
    /// `amount` камней за каждое выпадение.
    PerOccurrence { gem: GemColor, amount: u32 },
    /// Один камень за каждую полную группу из `size` выпадений.
    PerGroup { gem: GemColor, size: u32 },
    /// Один камень, если количество выпадений попало в `min..=max`.
    Presence { gem: GemColor, min: u32, max: Option<u32> },
    /// Награда по точному количеству выпадений; срабатывает не больше одной строки.
    ExactCount { rewards: Vec<(u32, GemColor)> },
}

impl FaceRule {
    /// Прирост камней за `count` выпадений грани.
    pub fn reward(&self, count: u32) -> Gems {
        match self {
            FaceRule::None => Gems::ZERO,
            FaceRule::PerOccurrence { gem, amount } => {
                Gems::single(*gem, count.saturating_mul(*amount))
            }
            FaceRule::PerGroup { gem, size } => {
                if *size == 0 {
                    Gems::ZERO
                } else {
                    Gems::single(*gem, count / size)
                }
            }
            FaceRule::Presence { gem, min, max } => {
                let in_range = count >= *min && max.map_or(true, |m| count <= m);
                if in_range && count > 0 {
                    Gems::single(*gem, 1)
                } else {
                    Gems::ZERO
                }
            }
            FaceRule::ExactCount { rewards } => rewards
                .iter()
                .find(|(n, _)| *n == count)
                .map(|&(_, gem)| Gems::single(gem, 1))
                .unwrap_or(Gems::ZERO),
        }
    }
}

/// Таблица правил для граней 1..=6.
///
/// Таблица задаётся данными, поэтому ранние варианты правил подключаются
/// без изменения движка подсчёта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringRules {
    /// Индекс 0 соответствует грани 1.
    pub faces: [FaceRule; 6],
}

impl ScoringRules {
    /// Текущая таблица:
    /// 1: красный за каждую, 2: синий за пару, 3: зелёный за тройку,
    /// 4: зелёный за наличие, 5: по точному количеству, 6: только счётчик шестёрок.
    pub fn canonical() -> Self {
        Self {
            faces: [
                FaceRule::PerOccurrence {
                    gem: GemColor::Red,
                    amount: 1,
                },
                FaceRule::PerGroup {
                    gem: GemColor::Blue,
                    size: 2,
                },
                FaceRule::PerGroup {
                    gem: GemColor::Green,
                    size: 3,
                },
                FaceRule::Presence {
                    gem: GemColor::Green,
                    min: 1,
                    max: None,
                },
                FaceRule::ExactCount {
                    rewards: vec![
                        (1, GemColor::Red),
                        (2, GemColor::Blue),
                        (3, GemColor::Green),
                        (4, GemColor::Purple),
                    ],
                },
                FaceRule::None,
            ],
        }
    }

    /// Первая редакция правил: одна четвёрка даёт фиолетовый,
    /// пятёрки: 1–2 красный, 3 синий, 4 зелёный, 5 фиолетовый.
    pub fn legacy() -> Self {
        Self {
            faces: [
                FaceRule::PerOccurrence {
                    gem: GemColor::Red,
                    amount: 1,
                },
                FaceRule::PerGroup {
                    gem: GemColor::Blue,
                    size: 2,
                },
                FaceRule::PerGroup {
                    gem: GemColor::Green,
                    size: 3,
                },
                FaceRule::Presence {
                    gem: GemColor::Purple,
                    min: 1,
                    max: Some(1),
                },
                FaceRule::ExactCount {
                    rewards: vec![
                        (1, GemColor::Red),
                        (2, GemColor::Red),
                        (3, GemColor::Blue),
                        (4, GemColor::Green),
                        (5, GemColor::Purple),
                    ],
                },
                FaceRule::None,
            ],
        }
    }

    pub fn rule_for(&self, face: Face) -> &FaceRule {
        let idx = (face.clamp(1, MAX_FACE) - 1) as usize;
        &self.faces[idx]
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::canonical()
    }
}
