use serde::{Deserialize, Serialize};

use crate::api::commands::CardFamilyApi;
use crate::domain::card::CardKind;
use crate::domain::dice::Face;
use crate::domain::gems::Gems;
use crate::domain::CardId;

/// DTO кубика. `index`: позиция в броске, по ней идёт выбор.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DieDto {
    pub index: usize,
    pub value: Face,
    pub selected: bool,
}

/// DTO обычной карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub id: CardId,
    pub name: String,
    pub cost: Gems,
    pub points: u32,
    pub kind: CardKind,
    /// Может ли текущий игрок купить карту прямо сейчас.
    pub affordable: bool,
}

/// DTO бонусной карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusCardDto {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub cost: Gems,
    pub points: u32,
    pub effect: String,
    pub affordable: bool,
}

/// DTO рынка одного семейства.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketDto<T> {
    pub displayed: Vec<T>,
    pub deck_remaining: usize,
    pub discarded: usize,
}

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub seat: usize,
    pub name: String,
    pub gems: Gems,
    pub sixes: u32,
    pub victory_points: u32,
    pub purchased_cards: Vec<CardDto>,
    pub bonus_cards: Vec<BonusCardDto>,
    pub is_current: bool,
}

/// Полный снимок партии для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    /// "NotStarted", "Running", "Ended", "Stopped".
    pub phase: String,
    pub round: u32,
    pub current_player_index: usize,
    pub players: Vec<PlayerDto>,
    pub dice: Vec<DieDto>,
    /// Значения по возрастанию, только для показа.
    pub sorted_values: Vec<Face>,
    pub roll_count: u32,
    pub max_rolls: u32,
    /// "Roll 2 of 4" и т.п.; пусто до первого броска.
    pub roll_status: String,
    /// Подпись кнопки броска.
    pub roll_action_label: String,
    pub can_roll: bool,
    pub can_end_turn: bool,
    pub standard_market: MarketDto<CardDto>,
    pub bonus_market: MarketDto<BonusCardDto>,
    pub victory_points: [u32; 2],
    pub victory_threshold: u32,
    pub winner: Option<usize>,
    pub is_tie: bool,
}

/// Запись истории для панели событий.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntryDto {
    pub index: u32,
    pub round: u32,
    /// `None` для системного событие.
    pub actor: Option<usize>,
    pub message: String,
}

/// Результат броска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollDto {
    pub dice_values: Vec<Face>,
    pub roll_count: u32,
    pub max_rolls: u32,
    pub exhausted: bool,
}

/// Результат завершения хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndTurnDto {
    pub score_delta: Gems,
    pub score_lines: Vec<String>,
    pub next_player_index: usize,
    pub round_ended: bool,
    pub game_ended: bool,
    pub winner: Option<usize>,
}

/// Результат покупки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseDto {
    pub family: CardFamilyApi,
    pub card_id: CardId,
    pub name: String,
    pub points: u32,
    pub game_ended: bool,
    pub winner: Option<usize>,
}

/// Ответ API на команду. Вместе с результатом всегда отдаём свежий снимок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Состояние после команды без отдельного результата.
    GameState(GameViewDto),

    Rolled {
        roll: RollDto,
        game: GameViewDto,
    },

    DieToggled {
        index: usize,
        selected: bool,
        game: GameViewDto,
    },

    TurnEnded {
        result: EndTurnDto,
        game: GameViewDto,
    },

    CardPurchased {
        purchase: PurchaseDto,
        game: GameViewDto,
    },
}
