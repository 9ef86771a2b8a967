use core::fmt;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Цвет камня. Ровно четыре варианта, чтобы `match` по цвету был исчерпывающим.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GemColor {
    Red,
    Blue,
    Green,
    Purple,
}

impl GemColor {
    pub const ALL: [GemColor; 4] = [
        GemColor::Red,
        GemColor::Blue,
        GemColor::Green,
        GemColor::Purple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GemColor::Red => "red",
            GemColor::Blue => "blue",
            GemColor::Green => "green",
            GemColor::Purple => "purple",
        }
    }
}

impl fmt::Display for GemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Набор камней по цветам.
///
/// Один и тот же тип используется для запаса игрока, цены карты
/// и прироста камней после подсчёта очков.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Gems {
    pub red: u32,
    pub blue: u32,
    pub green: u32,
    pub purple: u32,
}

impl Gems {
    pub const ZERO: Gems = Gems {
        red: 0,
        blue: 0,
        green: 0,
        purple: 0,
    };

    pub fn new(red: u32, blue: u32, green: u32, purple: u32) -> Self {
        Self {
            red,
            blue,
            green,
            purple,
        }
    }

    /// `amount` камней одного цвета.
    pub fn single(color: GemColor, amount: u32) -> Self {
        let mut gems = Gems::ZERO;
        *gems.get_mut(color) = amount;
        gems
    }

    pub fn get(&self, color: GemColor) -> u32 {
        match color {
            GemColor::Red => self.red,
            GemColor::Blue => self.blue,
            GemColor::Green => self.green,
            GemColor::Purple => self.purple,
        }
    }

    pub fn get_mut(&mut self, color: GemColor) -> &mut u32 {
        match color {
            GemColor::Red => &mut self.red,
            GemColor::Blue => &mut self.blue,
            GemColor::Green => &mut self.green,
            GemColor::Purple => &mut self.purple,
        }
    }

    pub fn add_color(&mut self, color: GemColor, amount: u32) {
        let slot = self.get_mut(color);
        *slot = slot.saturating_add(amount);
    }

    pub fn is_zero(&self) -> bool {
        *self == Gems::ZERO
    }

    pub fn total(&self) -> u32 {
        GemColor::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Хватает ли этих камней, чтобы оплатить `cost`.
    pub fn covers(&self, cost: &Gems) -> bool {
        GemColor::ALL.iter().all(|&c| self.get(c) >= cost.get(c))
    }

    /// Вычитание цены. `None`, если хотя бы одного цвета не хватает,
    /// тогда исходный набор не меняется.
    pub fn checked_sub(&self, cost: &Gems) -> Option<Gems> {
        Some(Gems {
            red: self.red.checked_sub(cost.red)?,
            blue: self.blue.checked_sub(cost.blue)?,
            green: self.green.checked_sub(cost.green)?,
            purple: self.purple.checked_sub(cost.purple)?,
        })
    }

    /// Ненулевые цвета в фиксированном порядке red, blue, green, purple.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (GemColor, u32)> + '_ {
        GemColor::ALL
            .iter()
            .map(move |&c| (c, self.get(c)))
            .filter(|&(_, n)| n > 0)
    }
}

impl Add for Gems {
    type Output = Gems;

    fn add(self, rhs: Gems) -> Self::Output {
        Gems {
            red: self.red.saturating_add(rhs.red),
            blue: self.blue.saturating_add(rhs.blue),
            green: self.green.saturating_add(rhs.green),
            purple: self.purple.saturating_add(rhs.purple),
        }
    }
}

impl AddAssign for Gems {
    fn add_assign(&mut self, rhs: Gems) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Gems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("nothing");
        }
        let parts: Vec<String> = self
            .iter_nonzero()
            .map(|(color, n)| format!("{n} {color}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

