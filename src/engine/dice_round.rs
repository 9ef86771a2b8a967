use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::dice::{DiceCounts, Die, Face};
use crate::engine::errors::GameError;
use crate::engine::RandomSource;

/// Фаза бросков в текущем ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RollPhase {
    /// Ещё не бросали (roll_count == 0).
    NotStarted,
    /// Можно выбирать кубики и перебрасывать.
    Rolled,
    /// Все броски израсходованы, выбор заблокирован.
    Exhausted,
}

/// Итог одного броска (первого или переброса).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollOutcome {
    pub dice_values: Vec<Face>,
    pub roll_count: u32,
    pub max_rolls: u32,
    /// Сколько кубиков бросили в этот раз.
    pub rerolled: usize,
    pub exhausted: bool,
}

/// Броски одного игрока в пределах хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceRound {
    pub dice: Vec<Die>,
    pub roll_count: u32,
    pub max_rolls: u32,
    pub num_dice: usize,
    pub consume_roll_on_empty_selection: bool,
}

impl DiceRound {
    pub fn new(num_dice: usize, max_rolls: u32, consume_roll_on_empty_selection: bool) -> Self {
        Self {
            dice: Vec::new(),
            roll_count: 0,
            max_rolls,
            num_dice,
            consume_roll_on_empty_selection,
        }
    }

    pub fn phase(&self) -> RollPhase {
        if self.roll_count == 0 {
            RollPhase::NotStarted
        } else if self.roll_count < self.max_rolls {
            RollPhase::Rolled
        } else {
            RollPhase::Exhausted
        }
    }

    pub fn can_roll(&self) -> bool {
        self.roll_count < self.max_rolls
    }

    pub fn values(&self) -> Vec<Face> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Значения по возрастанию, только для отображения.
    /// Порядок самих кубиков (и индексы выбора) не меняется.
    pub fn sorted_values(&self) -> Vec<Face> {
        let mut values = self.values();
        values.sort_unstable();
        values
    }

    /// Индексы выбранных кубиков по возрастанию.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.dice
            .iter()
            .enumerate()
            .filter(|(_, d)| d.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn counts(&self) -> DiceCounts {
        DiceCounts::from_dice(&self.dice)
    }

    pub fn sixes(&self) -> u32 {
        self.counts().count(6)
    }

    /// Первый бросок хода: все кубики заново, по порядку индексов.
    pub fn start_turn<R: RandomSource>(&mut self, rng: &mut R) -> Result<RollOutcome, GameError> {
        if self.roll_count != 0 {
            return Err(GameError::InvalidState("turn already started, re-roll selected dice instead"));
        }
        if self.max_rolls == 0 {
            return Err(GameError::MaxRollsExceeded {
                max_rolls: self.max_rolls,
            });
        }

        self.dice = (0..self.num_dice).map(|_| Die::new(rng.roll_die())).collect();
        self.roll_count = 1;

        debug!(values = ?self.values(), "initial roll");
        Ok(self.outcome(self.num_dice))
    }

    /// Переключить выбор кубика `index`.
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool, GameError> {
        match self.phase() {
            RollPhase::NotStarted => {
                return Err(GameError::InvalidState("dice cannot be selected before the first roll"))
            }
            RollPhase::Exhausted => {
                return Err(GameError::InvalidState("dice selection is locked after the last roll"))
            }
            RollPhase::Rolled => {}
        }

        let len = self.dice.len();
        let die = self
            .dice
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        die.selected = !die.selected;
        Ok(die.selected)
    }

    /// Перебросить выбранные кубики, по возрастанию индексов.
    pub fn reroll<R: RandomSource>(&mut self, rng: &mut R) -> Result<RollOutcome, GameError> {
        if self.roll_count == 0 {
            return Err(GameError::InvalidState("no dice to re-roll before the first roll"));
        }
        if !self.can_roll() {
            return Err(GameError::MaxRollsExceeded {
                max_rolls: self.max_rolls,
            });
        }

        let selected = self.selected_indices();
        if selected.is_empty() && !self.consume_roll_on_empty_selection {
            return Err(GameError::InvalidState("no dice selected for re-roll"));
        }

        for &i in &selected {
            let die = &mut self.dice[i];
            die.value = rng.roll_die();
            die.selected = false;
        }
        self.roll_count += 1;

        debug!(rerolled = selected.len(), roll_count = self.roll_count, "re-roll");
        Ok(self.outcome(selected.len()))
    }

    /// Вернуться в NotStarted перед ходом следующего игрока.
    pub fn reset(&mut self) {
        self.dice.clear();
        self.roll_count = 0;
    }

    fn outcome(&self, rerolled: usize) -> RollOutcome {
        RollOutcome {
            dice_values: self.values(),
            roll_count: self.roll_count,
            max_rolls: self.max_rolls,
            rerolled,
            exhausted: !self.can_roll(),
        }
    }
}
