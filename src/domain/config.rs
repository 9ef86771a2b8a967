use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::gems::{GemColor, Gems};
use crate::domain::rules::ScoringRules;

pub const DEFAULT_NUM_DICE: usize = 8;
pub const DEFAULT_MAX_ROLLS: u32 = 4;
pub const DEFAULT_VICTORY_THRESHOLD: u32 = 10;
pub const DEFAULT_DISPLAY_SLOTS: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GameConfig: {0}")]
    Invalid(String),

    #[error("GameConfig: malformed JSON: {0}")]
    Parse(String),
}

/// Настройки партии.
///
/// Все числа, которые менялись между редакциями правил, вынесены сюда.
/// В JSON можно указывать только часть полей, остальные берутся по умолчанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько кубиков бросается в начале хода.
    pub num_dice: usize,
    /// Максимум бросков за ход, включая первый.
    pub max_rolls: u32,
    /// Победные очки, при которых партия заканчивается.
    pub victory_threshold: u32,
    /// Сколько карт каждого семейства лежит открытыми.
    pub display_slots: usize,
    /// Тратит ли переброс без выбранных кубиков попытку.
    pub consume_roll_on_empty_selection: bool,
    pub scoring: ScoringRules,
    /// Награда за большее число шестёрок в раунде.
    pub round_bonus: Gems,
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_dice: DEFAULT_NUM_DICE,
            max_rolls: DEFAULT_MAX_ROLLS,
            victory_threshold: DEFAULT_VICTORY_THRESHOLD,
            display_slots: DEFAULT_DISPLAY_SLOTS,
            consume_roll_on_empty_selection: true,
            scoring: ScoringRules::canonical(),
            round_bonus: Gems::single(GemColor::Purple, 1),
            player_names: ["Alice".to_string(), "Bob".to_string()],
        }
    }
}

impl GameConfig {
    /// Разобрать конфиг из JSON и сразу проверить его.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_dice == 0 {
            return Err(ConfigError::Invalid("num_dice = 0".into()));
        }
        if self.max_rolls == 0 {
            return Err(ConfigError::Invalid("max_rolls = 0".into()));
        }
        if self.victory_threshold == 0 {
            return Err(ConfigError::Invalid("victory_threshold = 0".into()));
        }
        if self.display_slots == 0 {
            return Err(ConfigError::Invalid("display_slots = 0".into()));
        }
        if self.player_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Invalid("player name is empty".into()));
        }
        Ok(())
    }
}
