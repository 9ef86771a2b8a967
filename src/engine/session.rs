// src/engine/session.rs

use crate::domain::card::{BonusCard, Card, CardFamily};
use crate::domain::config::GameConfig;
use crate::domain::SeatIndex;
use crate::engine::dice_round::RollOutcome;
use crate::engine::errors::GameError;
use crate::engine::game_history::GameHistory;
use crate::engine::game_loop::{self, PurchaseOutcome};
use crate::engine::turn::{self, EndTurnOutcome};
use crate::engine::RandomSource;
use crate::state::GameState;

/// Сессия игры:
/// - хранит конфиг и определения карт, из которых собирается каждая новая партия;
/// - держит единственный поток RNG;
/// - даёт методы поверх функций engine и отдаёт состояние только на чтение.
///
/// Все вызовы синхронные и атомарные относительно `GameState`:
/// при ошибке состояние не меняется.
#[derive(Debug)]
pub struct GameSession<R: RandomSource> {
    config: GameConfig,
    standard_cards: Vec<Card>,
    bonus_cards: Vec<BonusCard>,
    rng: R,
    state: GameState,
}

impl<R: RandomSource> GameSession<R> {
    /// Создать сессию. Партия ещё не начата.
    pub fn new(
        config: GameConfig,
        standard_cards: Vec<Card>,
        bonus_cards: Vec<BonusCard>,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::not_started(config.clone());
        Ok(Self {
            config,
            standard_cards,
            bonus_cards,
            rng,
            state,
        })
    }

    /// Начать новую партию. Прежнее состояние выбрасывается целиком.
    pub fn start_game(&mut self) -> Result<&GameState, GameError> {
        let state = game_loop::start_game(
            self.config.clone(),
            self.standard_cards.clone(),
            self.bonus_cards.clone(),
            &mut self.rng,
        )?;
        self.state = state;
        Ok(&self.state)
    }

    /// Первый бросок хода или переброс выбранных кубиков.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, GameError> {
        game_loop::roll_dice(&mut self.state, &mut self.rng)
    }

    pub fn reroll_selected(&mut self) -> Result<RollOutcome, GameError> {
        game_loop::reroll_selected(&mut self.state, &mut self.rng)
    }

    pub fn toggle_dice_selection(&mut self, index: usize) -> Result<bool, GameError> {
        game_loop::toggle_dice_selection(&mut self.state, index)
    }

    pub fn end_turn(&mut self) -> Result<EndTurnOutcome, GameError> {
        turn::end_turn(&mut self.state)
    }

    pub fn purchase_card(
        &mut self,
        family: CardFamily,
        index: usize,
    ) -> Result<PurchaseOutcome, GameError> {
        game_loop::purchase_card(&mut self.state, family, index)
    }

    pub fn rename_player(&mut self, seat: SeatIndex, name: &str) -> Result<(), GameError> {
        game_loop::rename_player(&mut self.state, seat, name)
    }

    pub fn stop_game(&mut self) -> Result<(), GameError> {
        game_loop::stop_game(&mut self.state)
    }

    /// Текущее состояние (read-only).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &GameHistory {
        &self.state.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Новый конфиг действует со следующей партии.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Заменить определения карт для следующих партий.
    pub fn set_cards(&mut self, standard_cards: Vec<Card>, bonus_cards: Vec<BonusCard>) {
        self.standard_cards = standard_cards;
        self.bonus_cards = bonus_cards;
    }
}
