use serde::{Deserialize, Serialize};

use crate::domain::card::{BonusCard, Card};
use crate::domain::config::GameConfig;
use crate::domain::market::CardMarket;
use crate::domain::player::Player;
use crate::domain::{SeatIndex, PLAYER_COUNT};
use crate::engine::dice_round::DiceRound;
use crate::engine::game_history::{GameEventKind, GameHistory};

/// Чем закончилась партия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    /// У игрока `seat` строго больше победных очков.
    Winner { seat: SeatIndex, victory_points: u32 },
    /// Очков поровну.
    Tie { victory_points: u32 },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<SeatIndex> {
        match self {
            GameOutcome::Winner { seat, .. } => Some(*seat),
            GameOutcome::Tie { .. } => None,
        }
    }
}

/// Фаза партии целиком.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Ended(GameOutcome),
    /// Остановлена извне, без победителя.
    Stopped,
}

/// Корневой агрегат партии.
///
/// Всё состояние игры живёт здесь и меняется только через функции engine.
/// Новая партия создаёт новый `GameState`, старый просто выбрасывается.
/// Победные очки хранятся только у игроков; сводный вид считается на лету.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    pub players: [Player; PLAYER_COUNT],
    /// Кубики и счётчик бросков текущего хода.
    pub dice: DiceRound,
    pub current_player_index: SeatIndex,
    /// Номер раунда, начиная с 1.
    pub round_count: u32,
    pub standard_market: CardMarket<Card>,
    pub bonus_market: CardMarket<BonusCard>,
    pub phase: GamePhase,
    pub history: GameHistory,
}

impl GameState {
    /// Состояние до первой партии: пустые рынки, фаза NotStarted.
    pub fn not_started(config: GameConfig) -> Self {
        Self::with_markets(
            config,
            CardMarket::new(Vec::new(), 0),
            CardMarket::new(Vec::new(), 0),
            GamePhase::NotStarted,
        )
    }

    /// Новая партия с уже разложенными рынками.
    pub fn new(
        config: GameConfig,
        standard_market: CardMarket<Card>,
        bonus_market: CardMarket<BonusCard>,
    ) -> Self {
        Self::with_markets(config, standard_market, bonus_market, GamePhase::Running)
    }

    fn with_markets(
        config: GameConfig,
        standard_market: CardMarket<Card>,
        bonus_market: CardMarket<BonusCard>,
        phase: GamePhase,
    ) -> Self {
        let [first, second] = &config.player_names;
        let players = [Player::new(first.trim()), Player::new(second.trim())];
        let dice = DiceRound::new(
            config.num_dice,
            config.max_rolls,
            config.consume_roll_on_empty_selection,
        );

        Self {
            config,
            players,
            dice,
            current_player_index: 0,
            round_count: 1,
            standard_market,
            bonus_market,
            phase,
            history: GameHistory::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn opponent_index(&self) -> SeatIndex {
        (self.current_player_index + 1) % PLAYER_COUNT
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[self.opponent_index()]
    }

    /// Победные очки обоих игроков.
    pub fn victory_points(&self) -> [u32; PLAYER_COUNT] {
        [self.players[0].victory_points, self.players[1].victory_points]
    }

    /// Записать событие в историю текущего раунда.
    pub fn log(&mut self, kind: GameEventKind, message: impl Into<String>) {
        self.history.push(self.round_count, kind, message);
    }
}
