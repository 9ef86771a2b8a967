use serde::{Deserialize, Serialize};

use crate::domain::card::CardFamily;
use crate::domain::dice::Face;
use crate::domain::gems::Gems;
use crate::domain::{CardId, SeatIndex};
use crate::state::GameOutcome;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Новая партия началась.
    GameStarted,

    /// Игрок сменил имя.
    PlayerRenamed {
        seat: SeatIndex,
        old_name: String,
        new_name: String,
    },

    /// Первый бросок хода.
    DiceRolled { seat: SeatIndex, values: Vec<Face> },

    /// Переброс выбранных кубиков.
    DiceRerolled {
        seat: SeatIndex,
        rerolled: usize,
        values: Vec<Face>,
    },

    /// Игрок израсходовал все броски.
    RollsExhausted { seat: SeatIndex },

    /// Камни за ход начислены.
    TurnScored {
        seat: SeatIndex,
        delta: Gems,
        sixes: u32,
    },

    /// Куплена карта.
    CardPurchased {
        seat: SeatIndex,
        family: CardFamily,
        card_id: CardId,
        points: u32,
    },

    /// Ход перешёл к другому игроку.
    TurnPassed { from: SeatIndex, to: SeatIndex },

    /// Раунд завершён сравнением шестёрок.
    RoundEnded {
        round: u32,
        winner: Option<SeatIndex>,
        sixes: [u32; 2],
        bonus: Gems,
    },

    /// Начался новый раунд.
    RoundStarted { round: u32 },

    /// Партия закончилась по очкам.
    GameEnded { outcome: GameOutcome },

    /// Партию остановили извне.
    GameStopped,
}

impl GameEventKind {
    /// Место игрока, от чьего имени событие, или `None` для системных событий.
    pub fn actor(&self) -> Option<SeatIndex> {
        match self {
            GameEventKind::DiceRolled { seat, .. }
            | GameEventKind::DiceRerolled { seat, .. }
            | GameEventKind::TurnScored { seat, .. }
            | GameEventKind::CardPurchased { seat, .. }
            | GameEventKind::PlayerRenamed { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}

/// Событие с порядковым номером и готовым текстом для панели истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    pub round: u32,
    pub kind: GameEventKind,
    pub message: String,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, round: u32, kind: GameEventKind, message: impl Into<String>) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent {
            index: idx,
            round,
            kind,
            message: message.into(),
        });
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// События начиная с индекса `from`, для инкрементальной отрисовки.
    pub fn since(&self, from: u32) -> &[GameEvent] {
        let start = (from as usize).min(self.events.len());
        &self.events[start..]
    }
}
