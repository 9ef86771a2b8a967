use serde::{Deserialize, Serialize};

/// Значение грани кубика, 1..=6.
pub type Face = u8;

pub const MIN_FACE: Face = 1;
pub const MAX_FACE: Face = 6;

/// Один кубик в текущем ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Die {
    pub value: Face,
    /// Отмечен для переброса.
    pub selected: bool,
}

impl Die {
    pub fn new(value: Face) -> Self {
        Self {
            value,
            selected: false,
        }
    }
}

/// Сколько раз выпала каждая грань.
///
/// Индексы 1..=6 соответствуют граням, индекс 0 не используется.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DiceCounts([u32; 7]);

impl DiceCounts {
    /// Посчитать грани. Значения вне 1..=6 игнорируются.
    pub fn from_values(values: &[Face]) -> Self {
        let mut counts = [0u32; 7];
        for &v in values {
            if (MIN_FACE..=MAX_FACE).contains(&v) {
                counts[v as usize] += 1;
            }
        }
        DiceCounts(counts)
    }

    pub fn from_dice(dice: &[Die]) -> Self {
        let values: Vec<Face> = dice.iter().map(|d| d.value).collect();
        Self::from_values(&values)
    }

    /// Количество выпавших `face`. Для граней вне 1..=6 всегда 0.
    pub fn count(&self, face: Face) -> u32 {
        if (MIN_FACE..=MAX_FACE).contains(&face) {
            self.0[face as usize]
        } else {
            0
        }
    }

    pub fn total(&self) -> u32 {
        self.0[1..].iter().sum()
    }

    /// Грань, выпавшая чаще всего, и сколько раз. При равенстве берётся большая грань.
    pub fn most_common(&self) -> Option<(Face, u32)> {
        (MIN_FACE..=MAX_FACE)
            .map(|f| (f, self.count(f)))
            .filter(|&(_, n)| n > 0)
            .max_by_key(|&(f, n)| (n, f))
    }

    /// Все шесть граней встречаются хотя бы раз.
    pub fn is_full_straight(&self) -> bool {
        (MIN_FACE..=MAX_FACE).all(|f| self.count(f) > 0)
    }
}
